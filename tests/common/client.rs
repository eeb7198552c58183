use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use planetary_api::db::database_service::DatabaseService;
use planetary_api::routes::configure_routes;
use planetary_api::types::{error::AppError, mail::SendEmail, user::DBUserCreate};
use planetary_api::utils::mail::Mailer;
use planetary_api::utils::token::{encrypt, issue_token};

use super::test_config;

/// Captures outbound mail instead of talking SMTP.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SendEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: SendEmail) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient {
            db,
            mailer: Arc::new(RecordingMailer::default()),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let mailer: Arc<dyn Mailer> = self.mailer.clone();
        App::new()
            .app_data(web::Data::new(test_config()))
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(mailer))
            .configure(configure_routes)
    }

    /// Inserts a user straight into the store, bypassing the register route.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str, password: &str) -> i32 {
        let password_hash = encrypt(password).expect("Failed to hash password");
        self.db
            .create_user(DBUserCreate {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("Failed to create test user")
    }

    #[allow(dead_code)]
    pub fn bearer_token(&self, email: &str) -> String {
        issue_token(&test_config().jwt_secret, email).expect("Failed to issue token")
    }
}
