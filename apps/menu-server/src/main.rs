use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};

use menu_api::{build_app, AppState};
use menu_core::repositories::MenuItemRepository;
use menu_core::seed::seed_if_empty;
use menu_core::services::MenuItemService;
use menu_infrastructure::{create_pool, run_migrations, InMemoryMenuItemRepository, PgMenuItemRepository};
use menu_shared::config::{AppConfig, DatabaseSettings, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = menu_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    let repository = open_repository(&config.database).await?;

    if config.database.seed {
        seed_if_empty(repository.as_ref())
            .await
            .context("seeding menu items")?;
    }

    // Create App State
    let service = Arc::new(MenuItemService::new(repository));
    let app = build_app(AppState::new(service), &config.app);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn open_repository(settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn MenuItemRepository>> {
    match settings.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(settings).await.context("connecting to database")?;
            info!("Database connection established.");

            if settings.run_migrations {
                run_migrations(&pool).await.context("running migrations")?;
            }
            Ok(Arc::new(PgMenuItemRepository::new(pool)))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory store; data is lost on exit");
            Ok(Arc::new(InMemoryMenuItemRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
