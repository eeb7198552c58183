use serde::{Deserialize, Serialize};

/// Bearer token payload. Identity is only the email in `sub`; there are no
/// scopes and no refresh flow.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
