use dispatch_register::config::Config;
use dispatch_register::db::Database;
use dispatch_register::http_api;
use dispatch_register::services::DispatchStore;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_MAX_AGE_DAYS: u64 = 7;

/// Remove log files older than `max_age_days`.
fn cleanup_old_logs(log_dir: &str, max_age_days: u64) {
    let log_path = std::path::Path::new(log_dir);
    if !log_path.exists() {
        return;
    }

    let max_age = std::time::Duration::from_secs(max_age_days * 24 * 60 * 60);
    let now = std::time::SystemTime::now();

    if let Ok(entries) = std::fs::read_dir(log_path) {
        for entry in entries.flatten() {
            let expired = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .is_some_and(|age| age > max_age);
            if expired {
                let _ = std::fs::remove_file(entry.path());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    cleanup_old_logs(&config.log_dir, LOG_MAX_AGE_DAYS);

    // Console + daily rolling file
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stdout).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Opening database at {}", config.database_path);
    let database = Database::connect(&config.database_path).await?;
    let store = DispatchStore::new(database);
    store.initialize().await?;
    info!("Database ready");

    let addr = config.server_addr();
    let router = http_api::create_router(store);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
