use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SendEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
}
