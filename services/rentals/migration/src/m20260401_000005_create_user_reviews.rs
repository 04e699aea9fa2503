use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserReviews::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserReviews::ListingId).uuid())
                    .col(ColumnDef::new(UserReviews::PropertyId).uuid())
                    .col(ColumnDef::new(UserReviews::Rating).small_integer().not_null())
                    .col(ColumnDef::new(UserReviews::Review).text())
                    .col(
                        ColumnDef::new(UserReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserReviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_reviews_user_id")
                    .table(UserReviews::Table)
                    .col(UserReviews::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_reviews_property_id")
                    .table(UserReviews::Table)
                    .col(UserReviews::PropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserReviews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UserReviews {
    Table,
    Id,
    UserId,
    ListingId,
    PropertyId,
    Rating,
    Review,
    CreatedAt,
    UpdatedAt,
}
