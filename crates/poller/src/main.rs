use herald_common::config::AppConfig;
use herald_notifier::TelegramNotifier;
use herald_poller::client::StatusEndpointClient;
use herald_poller::poller::StatusPoller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herald_poller=info,herald_notifier=info".into()),
        )
        .json()
        .init();

    tracing::info!("Homework Herald starting...");

    // Missing credentials are fatal: stop before any network client exists
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, bot stopped");
            return Err(e.into());
        }
    };

    let client = StatusEndpointClient::new(
        config.endpoint.clone(),
        config.credentials.endpoint_token.clone(),
        config.request_timeout(),
    )?;
    let notifier = TelegramNotifier::new(
        &config.telegram_api_url,
        config.credentials.notifier_token.clone(),
        config.request_timeout(),
    )?;

    let mut poller = StatusPoller::new(
        client,
        notifier,
        config.credentials.recipient_id.clone(),
        config.poll_interval(),
    );

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Homework Herald stopped.");
    Ok(())
}
