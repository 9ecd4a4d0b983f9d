/// The account record the registry keeps track of. Opaque to the registry
/// apart from its `id`; everything else round-trips as-is.
pub mod account;

/// The registry itself: an ordered in-memory account list mirrored to a
/// durable key/value store after every mutation.
pub mod registry;

/// Key/value store interface the registry persists through, plus "in memory"
/// and file-backed implementations.
///
/// NOTE: Technically this interface is not necessary for a single backend,
/// but it is the integration point for hosts that bring their own
/// persistence, and it keeps the registry testable without touching disk.
pub mod store;
