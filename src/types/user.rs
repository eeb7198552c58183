use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RUserRegister {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RPasswordReset {
    pub email: String,
    pub token: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserLoginRes {
    pub message: String,
    pub access_token: String,
}

/// What the store needs to persist a new user. The raw password never
/// crosses this seam.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}
