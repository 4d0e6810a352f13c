use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::utils::now_utc;

pub const SERVICE_NAME: &str = "Orders REST API";
pub const SERVICE_DESCRIPTION: &str = "REST API for managing orders (CRUD operations)";

pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": now_utc().to_rfc3339(),
    }))
}

pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": SERVICE_DESCRIPTION,
        "endpoints": {
            "GET /orders": "List all orders",
            "GET /orders/{order_id}": "Get order by ID",
            "POST /orders": "Create a new order",
            "PUT /orders/{order_id}": "Update an existing order",
            "DELETE /orders/{order_id}": "Delete an order",
        },
    }))
}
