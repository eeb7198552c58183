use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use planetary_api::config::EnvConfig;
use planetary_api::db::database_service::DatabaseService;
use planetary_api::routes::configure_routes;
use planetary_api::utils::mail::{Mailer, SmtpMailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(config.database_url.as_str())
            .await
            .expect("Failed to initialize DatabaseService"),
    );

    let mailer: Arc<dyn Mailer> = Arc::new(
        SmtpMailer::new(&config.mail).expect("Failed to initialize SMTP mailer"),
    );

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(Arc::clone(&mailer)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
