use anyhow::Context;
use portfolio_mail::configuration::get_configuration;
use portfolio_mail::startup::build;
use portfolio_mail::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("portfolio-mail".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = build(config)?;
    tracing::info!(port = app.port(), "Listening");
    app.run().await?;

    Ok(())
}
