use actix_web::{post, web};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserLoginRes};
use crate::utils::token::{issue_token, verify};

// the same body for an unknown email and a wrong password, on purpose
fn bad_credentials() -> AppError {
    AppError::Unauthorized("Bad email or password.".to_string())
}

#[post("/login")]
pub async fn login(
    config: web::Data<EnvConfig>,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    let body = body.into_inner();

    let user = match db.find_user_by_email(&body.email).await? {
        Some(user) => user,
        None => return Err(bad_credentials()),
    };

    if !verify(&body.password, &user.password_hash).unwrap_or(false) {
        return Err(bad_credentials());
    }

    let access_token = issue_token(&config.jwt_secret, &user.email)?;

    Ok(ApiResponse::Ok(UserLoginRes {
        message: "Login succeeded.".to_string(),
        access_token,
    }))
}
