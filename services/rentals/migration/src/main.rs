use sea_orm_migration::prelude::*;

mod m20260401_000001_create_properties;
mod m20260401_000002_create_listings;
mod m20260401_000003_create_availabilities;
mod m20260401_000004_create_bookings;
mod m20260401_000005_create_user_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_properties::Migration),
            Box::new(m20260401_000002_create_listings::Migration),
            Box::new(m20260401_000003_create_availabilities::Migration),
            Box::new(m20260401_000004_create_bookings::Migration),
            Box::new(m20260401_000005_create_user_reviews::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
