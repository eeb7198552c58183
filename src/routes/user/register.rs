use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister};
use crate::utils::token::encrypt;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("/register")]
pub async fn register(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<Response> {
    let body = body.into_inner();

    let password_hash = encrypt(&body.password)
        .map_err(|_| AppError::Internal("failed to hash password".to_string()))?;

    db.create_user(DBUserCreate {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        password_hash,
    })
    .await?;

    // no user data echoed back
    Ok(ApiResponse::Created(Response {
        message: "User created successfully.".to_string(),
    }))
}
