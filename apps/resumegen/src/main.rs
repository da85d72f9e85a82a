mod config;
mod data_folder;
mod display;
mod errors;
mod generation;
mod llm_client;
mod models;
mod pipeline;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;

#[tokio::main]
async fn main() {
    // Load configuration first; a bad environment is reported like any other config error
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", AppError::Config(format!("{e:#}")).report());
            return;
        }
    };

    // Diagnostics go to stderr and are off unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.rust_log)
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resumegen v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Data folder: {}, model: {}",
        config.data_folder.display(),
        llm_client::MODEL
    );

    let result = pipeline::run(&config).await;
    pipeline::report(&result);
}
