//! `SeaORM` Entity for tour_dates table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_dates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tour_package_id: Uuid,
    pub scheduled_on: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_packages::Entity",
        from = "Column::TourPackageId",
        to = "super::tour_packages::Column::Id"
    )]
    TourPackages,
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
}

impl Related<super::tour_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourPackages.def()
    }
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
