use entity::planet::{ActiveModel as PlanetActive, Column, Entity as Planet, Model as PlanetModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, planet::RPlanetUpsert};

impl DatabaseService {
    /// All planets in insertion order.
    pub async fn list_planets(&self) -> Result<Vec<PlanetModel>, AppError> {
        Ok(Planet::find()
            .order_by_asc(Column::PlanetId)
            .all(&self.db)
            .await?)
    }

    pub async fn find_planet(&self, planet_id: i32) -> Result<Option<PlanetModel>, AppError> {
        Ok(Planet::find_by_id(planet_id).one(&self.db).await?)
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetModel, AppError> {
        self.find_planet(planet_id)
            .await?
            .ok_or_else(|| AppError::NotFound("That planet does not exist.".to_string()))
    }

    pub async fn find_planet_by_name(&self, name: &str) -> Result<Option<PlanetModel>, AppError> {
        Ok(Planet::find()
            .filter(Column::PlanetName.eq(name))
            .one(&self.db)
            .await?)
    }

    pub async fn create_planet(&self, fields: RPlanetUpsert) -> Result<PlanetModel, AppError> {
        let res = Planet::insert(PlanetActive {
            planet_name: Set(fields.planet_name),
            planet_type: Set(fields.planet_type),
            home_star: Set(fields.home_star),
            mass: Set(fields.mass),
            radius: Set(fields.radius),
            distance: Set(fields.distance),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        self.get_planet(res.last_insert_id).await
    }

    /// Full replacement of every field.
    pub async fn update_planet(
        &self,
        planet_id: i32,
        fields: RPlanetUpsert,
    ) -> Result<PlanetModel, AppError> {
        let mut am: PlanetActive = self.get_planet(planet_id).await?.into();
        am.planet_name = Set(fields.planet_name);
        am.planet_type = Set(fields.planet_type);
        am.home_star = Set(fields.home_star);
        am.mass = Set(fields.mass);
        am.radius = Set(fields.radius);
        am.distance = Set(fields.distance);
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_planet(&self, planet_id: i32) -> Result<(), AppError> {
        let planet = self.get_planet(planet_id).await?;
        planet.delete(&self.db).await?;
        Ok(())
    }
}
