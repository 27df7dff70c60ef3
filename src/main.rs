use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mindvault::{
    api::{AppState, create_router},
    config::Config,
    llm_service::LLMService,
    study_service::StudyService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let _guard = setup_logging()?;

    // The LLM credential is mandatory; a missing key aborts startup here.
    let config = Config::from_env()?;
    config.validate()?;

    info!("Starting MindVault server...");

    // Ensure upload directory exists
    std::fs::create_dir_all(&config.upload.directory)?;

    let study_service = StudyService::new();
    let llm_service = LLMService::new_with_provider(
        config.llm.api_key.clone(),
        config.llm.base_url.clone(),
        config.llm.provider,
        config.llm.model.clone(),
    );

    info!(
        provider = llm_service.provider_name(),
        model = %llm_service.model_name(),
        "Initialized LLM service"
    );

    let state = AppState {
        study_service,
        llm_service,
        upload_dir: config.upload.directory.clone(),
    };

    // Build the application router with permissive CORS for the frontend
    let app = create_router(state).layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn setup_logging() -> Result<WorkerGuard> {
    use std::fs;
    use tracing_subscriber::fmt;

    let log_directory =
        std::env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

    // Create logs directory if it doesn't exist
    fs::create_dir_all(&log_directory).unwrap_or_else(|e| {
        eprintln!("Warning: Could not create logs directory: {}", e);
    });

    // Configure log level from environment variable
    let default_log_level = "info,mindvault=debug";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level));

    // Set up file appender with daily rotation
    let file_appender = tracing_appender::rolling::daily(&log_directory, "mindvault.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true);

    // No ANSI colors for files
    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!(
        "Logging initialized - writing to {}/mindvault.log with daily rotation",
        log_directory
    );

    Ok(guard)
}
