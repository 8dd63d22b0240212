use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, Select};
use serde::{Deserialize, Serialize};

use crate::category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i64,
    pub category_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::CategoryId)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A `services` row joined with the owning category's name.
///
/// Only produced by reads; `category_name` is never written back.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct WithCategoryName {
    pub service_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub category_name: String,
}

/// `SELECT services.*, categories.name AS category_name FROM services JOIN categories ...`
pub fn find_with_category_name() -> Select<Entity> {
    use sea_orm::{JoinType, QuerySelect};
    Entity::find()
        .column_as(category::Column::Name, "category_name")
        .join(JoinType::InnerJoin, Relation::Category.def())
}
