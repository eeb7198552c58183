//! Seeds the database with the three canonical planets and a test user.
//! Safe to run repeatedly: does nothing once the planets table is populated.

use std::env;

use planetary_api::db::database_service::DatabaseService;
use planetary_api::types::planet::RPlanetUpsert;
use planetary_api::types::user::DBUserCreate;
use planetary_api::utils::token::encrypt;

fn planet(name: &str, planet_type: &str) -> RPlanetUpsert {
    RPlanetUpsert {
        planet_name: name.to_string(),
        planet_type: planet_type.to_string(),
        home_star: "Sun".to_string(),
        mass: 3.258e23,
        radius: 1516.0,
        distance: 35.98e6,
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    dotenv::dotenv().ok();
    // only the store is needed here, so skip the full EnvConfig
    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://planets.db?mode=rwc".to_string());

    let db = DatabaseService::new(database_url.as_str())
        .await
        .expect("Failed to initialize DatabaseService");

    let existing = db.list_planets().await.expect("Failed to query planets");
    if !existing.is_empty() {
        println!("Database already seeded, nothing to do.");
        return;
    }

    for seed in [
        planet("Mercury", "Class D"),
        planet("Venus", "Class K"),
        planet("Earth", "Class M"),
    ] {
        let name = seed.planet_name.clone();
        db.create_planet(seed).await.expect("Failed to seed planet");
        println!("Seeded planet {}", name);
    }

    let password_hash = encrypt("password").expect("Failed to hash password");
    db.create_user(DBUserCreate {
        first_name: "William".to_string(),
        last_name: "Herschel".to_string(),
        email: "test@test.com".to_string(),
        password_hash,
    })
    .await
    .expect("Failed to seed test user");

    println!("Database seeded!");
}
