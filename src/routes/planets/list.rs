use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<entity::planet::Model>> {
    Ok(ApiResponse::Ok(db.list_planets().await?))
}
