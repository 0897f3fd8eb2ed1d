use crate::config::{Credentials, Settings};
use crate::core::schedule::format_api_date;
use crate::domain::model::Price;
use crate::domain::ports::PriceSource;
use crate::utils::error::{AlertError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;

const SERVICE: &str = "price API";

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    price: f64,
}

/// Client for a GoldAPI-style quote endpoint: `GET {base}/{ASSET}/{CURRENCY}[/{YYYYMMDD}]`.
#[derive(Debug, Clone)]
pub struct GoldApiClient {
    client: Client,
    base_url: String,
    asset: String,
    currency: String,
    api_key: String,
}

impl GoldApiClient {
    pub fn new(settings: &Settings, credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            client: super::http_client(settings.timeout_seconds)?,
            base_url: settings.price_api_url.trim_end_matches('/').to_string(),
            asset: settings.asset.clone(),
            currency: settings.currency.clone(),
            api_key: credentials.price_api_key.clone(),
        })
    }

    pub fn endpoint(&self, date: Option<NaiveDate>) -> String {
        let mut url = format!("{}/{}/{}", self.base_url, self.asset, self.currency);
        if let Some(date) = date {
            url.push('/');
            url.push_str(&format_api_date(date));
        }
        url
    }
}

#[async_trait]
impl PriceSource for GoldApiClient {
    async fn fetch_price(&self, date: Option<NaiveDate>) -> Result<Price> {
        let url = self.endpoint(date);
        tracing::debug!("Requesting price from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("x-access-token", &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Price API response status: {}", status);
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(AlertError::Upstream {
                service: SERVICE.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let quote: QuoteResponse =
            serde_json::from_str(&body).map_err(|e| AlertError::MalformedResponse {
                service: SERVICE.to_string(),
                message: e.to_string(),
            })?;

        if !quote.price.is_finite() || quote.price <= 0.0 {
            return Err(AlertError::MalformedResponse {
                service: SERVICE.to_string(),
                message: format!("price must be a positive number, got {}", quote.price),
            });
        }

        Ok(Price {
            value: quote.price,
            date,
        })
    }
}
