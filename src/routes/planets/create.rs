use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::planet::RPlanetUpsert;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::decode_token;

#[post("")]
pub async fn create(
    auth: BearerAuth,
    config: web::Data<EnvConfig>,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RPlanetUpsert>,
) -> ApiResult<entity::planet::Model> {
    decode_token(&config.jwt_secret, auth.token())?;

    let body = body.into_inner();
    if db.find_planet_by_name(&body.planet_name).await?.is_some() {
        return Err(AppError::Conflict("That planet already exists.".to_string()));
    }
    body.validate_fields()?;

    let planet = db.create_planet(body).await?;
    Ok(ApiResponse::Created(planet))
}
