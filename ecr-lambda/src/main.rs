use ecr_lambda::function_handler;
use lambda_runtime::{service_fn, Error};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "error,ecr_lambda=info";

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    if let Err(e) = lambda_runtime::run(service_fn(function_handler)).await {
        error!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this function
/// - ERROR for everything else
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        // CloudWatch adds its own timestamps and does not render colours
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}
