use serde::{Deserialize, Serialize};

/// A service record. `category_id` refers to a category by identity only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Service {
    pub fn new(category_id: i64, name: impl Into<String>) -> Self {
        Self { category_id, name: name.into(), ..Default::default() }
    }
}

/// Read view of a service enriched with its category's name.
/// Serialises flat: the service fields plus `category_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,
    pub category_name: String,
}

impl From<models::service::Model> for Service {
    fn from(m: models::service::Model) -> Self {
        Self {
            id: m.service_id,
            category_id: m.category_id,
            name: m.name,
            description: m.description,
            is_active: m.is_active,
        }
    }
}

impl From<models::service::WithCategoryName> for ServiceDetail {
    fn from(r: models::service::WithCategoryName) -> Self {
        Self {
            service: Service {
                id: r.service_id,
                category_id: r.category_id,
                name: r.name,
                description: r.description,
                is_active: r.is_active,
            },
            category_name: r.category_name,
        }
    }
}
