use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type AccountId = u64;

/// An account record as the surrounding application defines it.
///
/// The registry only ever looks at `id`; every other field the application
/// stores on the record is carried in `fields` and serialized flattened, so
/// the persisted form stays a plain JSON object per account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Account {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Builder-style helper, mostly useful for tests and examples.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
