use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub use_tls: bool,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://planets.db?mode=rwc".to_string()),
            jwt_secret: Self::get_env("JWT_SECRET"),
            mail: MailConfig {
                host: env::var("MAIL_HOST").unwrap_or_else(|_| "smtp.mailtrap.io".to_string()),
                port: env::var("MAIL_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(2525),
                username: Self::get_env("MAIL_USERNAME"),
                password: Self::get_env("MAIL_PASSWORD"),
                use_tls: env::var("MAIL_USE_TLS").map(|v| v == "true").unwrap_or(true),
                from: env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "admin@planetary-api.com".to_string()),
            },
        }
    }
}
