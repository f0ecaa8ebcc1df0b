//! decaptcha - HTTP server entry point.
//!
//! Starts the anti-captcha-compatible bridge with the terminal-prompt
//! solver standing in for a real solving surface.

use std::sync::Arc;

use decaptcha::{api, config::Config, queue::TaskQueue, solver::ManualSolver};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decaptcha=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting bridge on {}:{} (keep-alive every {}s)",
        config.host,
        config.port,
        config.keep_alive.as_secs()
    );
    info!(
        "try: curl -d '{{\"task\":{{\"type\":\"RecaptchaV2TaskProxyless\",\"websiteURL\":\"https://decaptcha.test/\",\"websiteKey\":\"<sitekey>\"}}}}' http://{}:{}/createTask",
        config.host, config.port
    );

    let queue = TaskQueue::new(Arc::new(ManualSolver));
    api::serve(config, queue).await
}
