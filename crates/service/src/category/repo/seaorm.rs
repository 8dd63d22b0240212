use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use models::category::{self, Entity as CategoryEntity};

use crate::category::domain::Category;
use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn active_model(c: &Category) -> category::ActiveModel {
    category::ActiveModel {
        category_id: NotSet,
        name: Set(c.name.clone()),
        description: Set(c.description.clone()),
        is_active: Set(c.is_active),
    }
}

#[async_trait::async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, ServiceError> {
        let created = active_model(&category).insert(&self.db).await?;
        Ok(created.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, ServiceError> {
        let found = CategoryEntity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Category::from))
    }

    async fn get_all(&self) -> Result<Vec<Category>, ServiceError> {
        let rows = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn update(&self, category: &Category) -> Result<(), ServiceError> {
        let res = CategoryEntity::update_many()
            .set(active_model(category))
            .filter(category::Column::CategoryId.eq(category.id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("category"));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let res = CategoryEntity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("category"));
        }
        Ok(())
    }
}
