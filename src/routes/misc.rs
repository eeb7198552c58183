use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[get("/")]
pub async fn hello_world() -> impl Responder {
    HttpResponse::Ok().body("Hello World!")
}

#[get("/super_simple")]
pub async fn super_simple() -> ApiResult<Message> {
    Ok(ApiResponse::Ok(Message {
        message: "Hello, from the Planetary API.".to_string(),
    }))
}

#[get("/not_found")]
pub async fn not_found() -> ApiResult<Message> {
    Err(AppError::NotFound("The resource was not found".to_string()))
}

#[derive(Deserialize)]
pub struct AgeParams {
    pub name: String,
    pub age: i32,
}

fn age_gate(name: &str, age: i32) -> ApiResult<Message> {
    if age < 18 {
        Err(AppError::Unauthorized(format!(
            "Sorry {}, you're not old enough.",
            name
        )))
    } else {
        Ok(ApiResponse::Ok(Message {
            message: format!("Welcome {}, you're old enough.", name),
        }))
    }
}

#[get("/parameters")]
pub async fn parameters(params: web::Query<AgeParams>) -> ApiResult<Message> {
    age_gate(&params.name, params.age)
}

#[get("/url_variables/{name}/{age}")]
pub async fn url_variables(path: web::Path<(String, i32)>) -> ApiResult<Message> {
    let (name, age) = path.into_inner();
    age_gate(&name, age)
}
