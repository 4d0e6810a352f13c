use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use orders_rest_api::{
    config::Config,
    repositories::{in_memory::InMemoryOrderRepository, OrderRepository},
    routes, seed,
    state::AppState,
    utils::now_utc,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::from_env();

    let repo = InMemoryOrderRepository::default();
    if config.seed_orders {
        let seeds = seed::generate(&mut rand::thread_rng(), now_utc());
        repo.seed(seeds).await;
    }

    let state = AppState::new(repo);

    info!(addr = %config.server_addr, "orders api listening");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(config.server_addr.as_str())?
    .run()
    .await
}
