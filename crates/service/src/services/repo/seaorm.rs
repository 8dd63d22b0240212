use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use models::service::{self as service_model, Entity as ServiceEntity, WithCategoryName};

use crate::errors::ServiceError;
use crate::services::domain::{Service, ServiceDetail};
use crate::services::repository::ServiceRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn active_model(s: &Service) -> service_model::ActiveModel {
    service_model::ActiveModel {
        service_id: NotSet,
        category_id: Set(s.category_id),
        name: Set(s.name.clone()),
        description: Set(s.description.clone()),
        is_active: Set(s.is_active),
    }
}

#[async_trait::async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn create(&self, service: Service) -> Result<Service, ServiceError> {
        let created = active_model(&service).insert(&self.db).await?;
        Ok(created.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ServiceDetail>, ServiceError> {
        let row = service_model::find_with_category_name()
            .filter(service_model::Column::ServiceId.eq(id))
            .into_model::<WithCategoryName>()
            .one(&self.db)
            .await?;
        Ok(row.map(ServiceDetail::from))
    }

    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Service>, ServiceError> {
        let rows = ServiceEntity::find()
            .filter(service_model::Column::CategoryId.eq(category_id))
            .order_by_asc(service_model::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn get_all(&self) -> Result<Vec<ServiceDetail>, ServiceError> {
        let rows = service_model::find_with_category_name()
            .order_by_asc(service_model::Column::Name)
            .into_model::<WithCategoryName>()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ServiceDetail::from).collect())
    }

    async fn update(&self, service: &Service) -> Result<(), ServiceError> {
        let res = ServiceEntity::update_many()
            .set(active_model(service))
            .filter(service_model::Column::ServiceId.eq(service.id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("service"));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let res = ServiceEntity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("service"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::repo::seaorm::SeaOrmCategoryRepository;
    use crate::category::{Category, CategoryRepository};
    use crate::errors::ErrorKind;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn service_crud_repository() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let cats = SeaOrmCategoryRepository::new(db.clone());
        let repo = SeaOrmServiceRepository::new(db);

        let cat_name = format!("svc_repo_cat_{}", Uuid::new_v4());
        let cat = cats.create(Category::new(cat_name.clone())).await?;

        let input = Service {
            id: 0,
            category_id: cat.id,
            name: "b_leak_repair".into(),
            description: Some("fix leaks".into()),
            is_active: true,
        };
        let created = repo.create(input.clone()).await?;
        assert!(created.id > 0);
        let other = repo.create(Service::new(cat.id, "a_drain_cleaning")).await?;

        let found = repo.get_by_id(created.id).await?.unwrap();
        assert_eq!(found.service, Service { id: created.id, ..input });
        assert_eq!(found.category_name, cat_name);

        let by_cat = repo.get_by_category(cat.id).await?;
        let ids: Vec<i64> = by_cat.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![other.id, created.id]);

        let all = repo.get_all().await?;
        assert!(all.iter().any(|d| d.service.id == created.id && d.category_name == cat_name));

        let mut changed = created.clone();
        changed.name = "c_pipe_relining".into();
        changed.is_active = false;
        repo.update(&changed).await?;
        assert_eq!(repo.get_by_id(created.id).await?.unwrap().service, changed);

        repo.delete(created.id).await?;
        repo.delete(other.id).await?;
        assert!(repo.get_by_id(created.id).await?.is_none());
        assert!(repo.get_by_category(cat.id).await?.is_empty());
        cats.delete(cat.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_reference_is_rejected_by_backend() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmServiceRepository::new(db);

        let err = repo.create(Service::new(i64::MAX, "orphan")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(repo.delete(i64::MAX).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }
}
