use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog record. Serializes to the public wire shape directly, so the
/// column names double as the JSON field names.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub planet_id: i32,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
