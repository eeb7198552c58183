use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::planet::RPlanetUpsert;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::decode_token;

#[put("/{planet_id}")]
pub async fn update(
    auth: BearerAuth,
    config: web::Data<EnvConfig>,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<RPlanetUpsert>,
) -> ApiResult<entity::planet::Model> {
    decode_token(&config.jwt_secret, auth.token())?;

    // unknown id wins over any body problem
    let planet_id = path.into_inner();
    let existing = db.get_planet(planet_id).await?;

    let body = body.into_inner();
    if body.planet_name.is_empty() {
        return Err(AppError::Validation("planet_name is empty".to_string()));
    }
    // renaming to a name held by a different planet is a conflict; keeping
    // the current name is not
    if let Some(other) = db.find_planet_by_name(&body.planet_name).await? {
        if other.planet_id != existing.planet_id {
            return Err(AppError::Conflict("That planet already exists.".to_string()));
        }
    }
    body.validate_fields()?;

    let updated = db.update_planet(planet_id, body).await?;
    Ok(ApiResponse::Accepted(updated))
}
