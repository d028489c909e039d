use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use career_compass::config::Settings;
use career_compass::routes::{self, AppState};
use career_compass::services::AppContext;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.init(),
    }

    info!("Starting Career Compass v{}...", env!("CARGO_PKG_VERSION"));

    // Dataset, encoders and model must all load before serving
    let context = AppContext::load(&settings.data, &settings.model).unwrap_or_else(|e| {
        error!("Startup failed: {}", e);
        std::process::exit(1);
    });

    info!(
        "Application context ready: {} features, {} careers",
        context.feature_names().len(),
        context.label_encoder().len()
    );

    let app_state = AppState::new(context);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
