use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use doctor_server::backend::{BackendFactory, DoctorBackend};
use doctor_server::config::AppConfig;
use doctor_server::logging::logging_middleware;
use doctor_server::resource;

#[derive(Parser, Debug)]
#[command(name = "doctor-server")]
#[command(about = "A doctor record CRUD service")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

async fn setup_backend(
    app_config: &AppConfig,
) -> Result<Arc<dyn DoctorBackend>, Box<dyn std::error::Error>> {
    let backend_config = app_config.database_backend_config()?;

    println!(
        "Setting up {:?} backend...",
        backend_config.database_type
    );

    let backend = BackendFactory::create(&backend_config).await?;
    backend.init_schema().await?;

    Ok(backend)
}

fn build_router(backend: Arc<dyn DoctorBackend>) -> Router {
    Router::new()
        .route("/api/doctors", get(resource::doctor::list_doctors))
        .route("/api/doctors", post(resource::doctor::create_doctor))
        .route("/api/doctors/{id}", get(resource::doctor::get_doctor))
        .route("/api/doctors/{id}", put(resource::doctor::update_doctor))
        .route("/api/doctors/{id}", delete(resource::doctor::delete_doctor))
        .route("/health", get(resource::health::health))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(backend)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to install shutdown signal handler: {}", e);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing for better debugging
    tracing_subscriber::fmt::init();

    // Load configuration from specified file or use defaults
    let (mut app_config, using_defaults) =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            println!("No config.yaml found, using default configuration:");
            println!("   - In-memory SQLite database");
            println!("   - Listening on 127.0.0.1:3000\n");
            (AppConfig::default_config(), true)
        } else {
            let config = AppConfig::load_from_file(&args.config)
                .map_err(|e| format!("Failed to load configuration: {}", e))?;
            (config, false)
        };

    // Environment overrides (PORT, DATABASE_URL), then command line arguments
    app_config.apply_env_overrides();
    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    if !using_defaults {
        println!("Configuration loaded:");
        println!(
            "   Server: {}:{}",
            app_config.server.host, app_config.server.port
        );
        if let Some(db_config) = &app_config.backend.database {
            println!(
                "   Backend: database/{} ({})",
                db_config.db_type, db_config.url
            );
        } else {
            println!("   Backend: {}", app_config.backend.backend_type);
        }
    }

    // Setup backend; the Arc built here is the single store-client instance
    // shared by every request for the lifetime of the process
    let backend = setup_backend(&app_config).await?;

    let app = build_router(backend.clone());

    // Start the server
    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        eprintln!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));
    println!("Doctor server listening on {}", addr);
    println!("   Doctors: http://{}/api/doctors", addr);
    println!("   Health:  http://{}/health", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the store client before exiting
    backend.cleanup().await?;
    println!("Shutdown complete");

    Ok(())
}
