use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{planet_id}")]
pub async fn get_planet(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<entity::planet::Model> {
    Ok(ApiResponse::Ok(db.get_planet(path.into_inner()).await?))
}
