// Adapters layer: concrete HTTP implementations of the domain ports.

pub mod gold_api;
pub mod pushover;

pub use gold_api::GoldApiClient;
pub use pushover::PushoverNotifier;

use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Every outbound call is bounded; a timeout surfaces as a network error.
fn http_client(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("price-alert/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
