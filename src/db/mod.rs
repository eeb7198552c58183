pub mod database_service;
pub mod planet;
pub mod user;
