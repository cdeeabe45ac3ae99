use anyhow::Context;
use chrono::Utc;

use stavka_client::{ApiClient, lifecycle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("BETTING_API_URL").context("BETTING_API_URL must be set")?;
    let auth_token =
        std::env::var("BETTING_API_TOKEN").context("BETTING_API_TOKEN must be set")?;

    let client = ApiClient::new(base_url, auth_token);

    let events = client.list_events().await?;
    tracing::info!("Fetched {} events", events.len());

    let now = Utc::now();
    for event in &events {
        let status = lifecycle::status(event, now);
        tracing::info!(
            event_id = event.id,
            title = %event.title,
            status = ?status,
            outcomes = event.outcomes.len(),
            "event"
        );
    }

    Ok(())
}
