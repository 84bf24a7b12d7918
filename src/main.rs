use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tinder_match::config::{LoggingSettings, Settings};
use tinder_match::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use tinder_match::{Identity, MatchCache, TinderService};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting Tinder matching service...");

    let owner = match settings.contract.owner.clone() {
        Some(owner) => Identity::new(owner),
        None => {
            let owner = Identity::generate();
            info!("No contract owner configured, generated {}", owner);
            owner
        }
    };

    let match_cache = MatchCache::new(settings.cache.match_cache_size, settings.cache.ttl_secs);
    info!(
        "Match cache initialized ({} entries, TTL: {}s)",
        settings.cache.match_cache_size, settings.cache.ttl_secs
    );

    let app_state = AppState {
        service: Arc::new(TinderService::new(owner, match_cache)),
        feed: settings.feed,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
