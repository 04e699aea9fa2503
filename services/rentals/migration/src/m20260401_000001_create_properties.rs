use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).string().not_null())
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(ColumnDef::new(Properties::Location).string().not_null())
                    .col(ColumnDef::new(Properties::Address).string().not_null())
                    .col(ColumnDef::new(Properties::County).string().not_null())
                    .col(ColumnDef::new(Properties::Latitude).double().not_null())
                    .col(ColumnDef::new(Properties::Longitude).double().not_null())
                    .col(ColumnDef::new(Properties::CheckInHour).string().not_null())
                    .col(
                        ColumnDef::new(Properties::CheckOutHour)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::NumOfGuests).integer().not_null())
                    .col(ColumnDef::new(Properties::NumOfChildren).integer())
                    .col(
                        ColumnDef::new(Properties::MaximumGuests)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Country).string().not_null())
                    .col(ColumnDef::new(Properties::Currency).string().not_null())
                    .col(ColumnDef::new(Properties::PriceRange).string().not_null())
                    .col(ColumnDef::new(Properties::Price).double().not_null())
                    .col(ColumnDef::new(Properties::PricePerNight).double())
                    .col(ColumnDef::new(Properties::AdditionalGuestPrice).double())
                    .col(ColumnDef::new(Properties::ChildrenPrice).double())
                    .col(ColumnDef::new(Properties::Amenities).json_binary())
                    .col(ColumnDef::new(Properties::HouseRules).json_binary())
                    .col(ColumnDef::new(Properties::Rating).double())
                    .col(
                        ColumnDef::new(Properties::Favorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Properties::Images).json_binary())
                    .col(ColumnDef::new(Properties::VideoLink).string())
                    .col(
                        ColumnDef::new(Properties::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Properties {
    Table,
    Id,
    Title,
    Description,
    Location,
    Address,
    County,
    Latitude,
    Longitude,
    CheckInHour,
    CheckOutHour,
    NumOfGuests,
    NumOfChildren,
    MaximumGuests,
    Country,
    Currency,
    PriceRange,
    Price,
    PricePerNight,
    AdditionalGuestPrice,
    ChildrenPrice,
    Amenities,
    HouseRules,
    Rating,
    Favorite,
    Images,
    VideoLink,
    Verified,
    CreatedAt,
    UpdatedAt,
}
