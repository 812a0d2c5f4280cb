use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use searchengine::config::Config;
use searchengine::handlers::not_found;
use searchengine::repositories::PageLoader;
use searchengine::routes::api;
use searchengine::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build the index before accepting requests
    let data_file = config.index.data_file.clone();
    let index = match web::block(move || PageLoader::load(data_file)).await {
        Ok(Ok(index)) => index,
        Ok(Err(e)) => {
            error!("Failed to load dataset: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Dataset loader panicked: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting search engine on port {} with {} scoring",
        config.server.port, config.search.scoring
    );

    let state = AppState::new(index, config.clone());

    // Create HTTP server
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "WebServer running on http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
