use account_registry::account::Account;
use account_registry::registry::{AccountRegistry, RegistryError};
use account_registry::store::file_store::FileStore;
use anyhow::Result;

fn account(id: u64, name: &str) -> Account {
    Account::new(id).with_field("name", name)
}

#[test]
fn accounts_survive_a_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;

    {
        let store = FileStore::open(dir.path())?;
        let mut registry = AccountRegistry::new(store);
        registry.load()?;
        assert!(registry.is_empty());

        registry.upsert(account(1, "A"))?;
        registry.upsert(account(2, "B"))?;
        registry.upsert(account(1, "A2"))?;
        registry.remove(2)?;
    }

    // a fresh registry over the same directory sees the same list
    let store = FileStore::open(dir.path())?;
    let mut registry = AccountRegistry::new(store);
    registry.load()?;
    assert_eq!(registry.accounts(), &[account(1, "A2")][..]);
    Ok(())
}

#[test]
fn first_load_on_empty_directory_changes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;
    let mut registry = AccountRegistry::new(store);

    registry.load()?;
    assert_eq!(registry.count(), 0);
    // no file is created by a plain load
    assert!(!dir.path().join("accounts.json").exists());
    Ok(())
}

#[test]
fn corrupted_file_fails_load_loudly() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("accounts.json"), "{broken")?;

    let store = FileStore::open(dir.path())?;
    let mut registry = AccountRegistry::new(store);
    let err = registry.load().unwrap_err();
    assert!(matches!(err, RegistryError::Malformed(_)));
    Ok(())
}
