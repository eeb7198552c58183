use sea_orm::ConnectOptions;
use std::sync::Arc;

use planetary_api::config::{EnvConfig, MailConfig};
use planetary_api::db::database_service::DatabaseService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // a single pooled connection keeps the in-memory database alive
        // for the whole test
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1).min_connections(1);

        let db = Arc::new(
            DatabaseService::new(options)
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db }
    }
}

pub fn test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        database_url: "sqlite::memory:".to_string(), // not used, TestContext connects itself
        jwt_secret: "test-secret".to_string(),
        mail: MailConfig {
            host: "localhost".to_string(),
            port: 2525,
            username: "test".to_string(),
            password: "test".to_string(),
            use_tls: false,
            from: "admin@planetary-api.com".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use planetary_api::types::planet::RPlanetUpsert;
    use planetary_api::types::user::RUserRegister;

    #[allow(dead_code)]
    pub fn sample_user() -> RUserRegister {
        RUserRegister {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            password: "p".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_planet() -> RPlanetUpsert {
        sample_planet_named("Mars")
    }

    #[allow(dead_code)]
    pub fn sample_planet_named(name: &str) -> RPlanetUpsert {
        RPlanetUpsert {
            planet_name: name.to_string(),
            planet_type: "Class M".to_string(),
            home_star: "Sun".to_string(),
            mass: 6.39e23,
            radius: 3389.0,
            distance: 227.9e6,
        }
    }
}
