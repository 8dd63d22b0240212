use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: lookups by category and name-ordered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_services_category")
                    .table(Services::Table)
                    .col(Services::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Categories: non-unique, listings are ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_categories_name")
                    .table(Categories::Table)
                    .col(Categories::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_category").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_categories_name").table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, CategoryId }

#[derive(DeriveIden)]
enum Categories { Table, Name }
