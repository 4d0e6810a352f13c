use crate::errors::ApiError;
use crate::handlers;
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(handlers::health::info))
    .service(web::scope("/health").route("", web::get().to(handlers::health::ping)))
    .service(
        web::scope("/orders")
            .route("", web::post().to(handlers::orders::create_order))
            .route("", web::get().to(handlers::orders::list_orders))
            .route("/{id}", web::get().to(handlers::orders::get_order))
            .route("/{id}", web::put().to(handlers::orders::update_order))
            .route("/{id}", web::delete().to(handlers::orders::delete_order)),
    );
}
