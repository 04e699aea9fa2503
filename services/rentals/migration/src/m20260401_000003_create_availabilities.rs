use sea_orm_migration::prelude::*;

use crate::m20260401_000001_create_properties::Properties;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Availabilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Availabilities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Availabilities::PropertyId).uuid().not_null())
                    .col(
                        ColumnDef::new(Availabilities::DateRange)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Availabilities::PriceDates).json_binary())
                    .col(
                        ColumnDef::new(Availabilities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Availabilities::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availabilities_property_id")
                            .from(Availabilities::Table, Availabilities::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availabilities_property_id")
                    .table(Availabilities::Table)
                    .col(Availabilities::PropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Availabilities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Availabilities {
    Table,
    Id,
    PropertyId,
    DateRange,
    PriceDates,
    CreatedAt,
    UpdatedAt,
}
