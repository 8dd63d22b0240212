use serde::{Deserialize, Serialize};

/// A category record as exchanged between the HTTP layer, the coordinator and
/// the store. `id` is 0 until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

impl From<models::category::Model> for Category {
    fn from(m: models::category::Model) -> Self {
        Self { id: m.category_id, name: m.name, description: m.description, is_active: m.is_active }
    }
}
