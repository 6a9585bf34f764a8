//! `SeaORM` Entity for tour_packages table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub agency_profile_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agency_profiles::Entity",
        from = "Column::AgencyProfileId",
        to = "super::agency_profiles::Column::Id"
    )]
    AgencyProfiles,
    #[sea_orm(has_many = "super::tour_dates::Entity")]
    TourDates,
}

impl Related<super::agency_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgencyProfiles.def()
    }
}

impl Related<super::tour_dates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourDates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
