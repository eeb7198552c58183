use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::decode_token;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[delete("/{planet_id}")]
pub async fn delete_planet(
    auth: BearerAuth,
    config: web::Data<EnvConfig>,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Response> {
    decode_token(&config.jwt_secret, auth.token())?;

    db.delete_planet(path.into_inner()).await?;

    Ok(ApiResponse::Accepted(Response {
        message: "Planet deleted.".to_string(),
    }))
}
