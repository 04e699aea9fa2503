use sea_orm::entity::prelude::*;

/// Rental property. Every property owns exactly one listing row, inserted
/// in the same transaction as the property itself.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    pub address: String,
    pub county: String,
    pub latitude: f64,
    pub longitude: f64,
    pub check_in_hour: String,
    pub check_out_hour: String,
    pub num_of_guests: i32,
    pub num_of_children: Option<i32>,
    pub maximum_guests: i32,
    pub country: String,
    pub currency: String,
    pub price_range: String,
    pub price: f64,
    pub price_per_night: Option<f64>,
    pub additional_guest_price: Option<f64>,
    pub children_price: Option<f64>,
    pub amenities: Option<Json>,
    pub house_rules: Option<Json>,
    pub rating: Option<f64>,
    pub favorite: bool,
    pub images: Option<Json>,
    pub video_link: Option<String>,
    pub verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::listings::Entity")]
    Listings,
}

impl Related<super::listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
