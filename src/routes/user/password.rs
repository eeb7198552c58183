use actix_web::{get, post, web};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::mail::SendEmail;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RPasswordReset;
use crate::utils::mail::Mailer;
use crate::utils::token::{encrypt, new_reset_token, verify};

const RESET_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

fn bad_reset_token() -> AppError {
    AppError::Unauthorized("Invalid or expired reset token.".to_string())
}

/// Emails a single-use reset token instead of the stored credential.
#[get("/retrieve_password/{email}")]
pub async fn retrieve_password(
    db: web::Data<Arc<DatabaseService>>,
    mailer: web::Data<Arc<dyn Mailer>>,
    path: web::Path<String>,
) -> ApiResult<Response> {
    let email = path.into_inner();

    let user = match db.find_user_by_email(&email).await? {
        Some(user) => user,
        None => {
            return Ok(ApiResponse::Ok(Response {
                message: "That email doesn't exist".to_string(),
            }))
        }
    };

    let token = new_reset_token();
    let token_hash = encrypt(&token)
        .map_err(|_| AppError::Internal("failed to hash reset token".to_string()))?;
    let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

    db.set_reset_token(user.id, token_hash, expires_at).await?;

    mailer
        .send(SendEmail {
            to: email.clone(),
            subject: "Your Planetary API password reset".to_string(),
            text: format!(
                "A password reset was requested for your Planetary API account.\n\n\
                 Your one-time reset token is: {}\n\n\
                 It expires in {} minutes. If this wasn't you, you can ignore this email.",
                token, RESET_TOKEN_TTL_MINUTES
            ),
        })
        .await?;

    Ok(ApiResponse::Ok(Response {
        message: format!("Password reset email sent to {}", email),
    }))
}

/// Consumes a reset token issued by `retrieve_password`.
#[post("/reset_password")]
pub async fn reset_password(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RPasswordReset>,
) -> ApiResult<Response> {
    let body = body.into_inner();

    let user = db
        .find_user_by_email(&body.email)
        .await?
        .ok_or_else(bad_reset_token)?;

    let (token_hash, expires_at) = match (&user.reset_token_hash, user.reset_token_expires_at) {
        (Some(hash), Some(expires_at)) => (hash.clone(), expires_at),
        _ => return Err(bad_reset_token()),
    };

    if expires_at < Utc::now() || !verify(&body.token, &token_hash).unwrap_or(false) {
        return Err(bad_reset_token());
    }

    let password_hash = encrypt(&body.new_password)
        .map_err(|_| AppError::Internal("failed to hash password".to_string()))?;

    db.reset_password(user.id, password_hash).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Password updated successfully.".to_string(),
    }))
}
