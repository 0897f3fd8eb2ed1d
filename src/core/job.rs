use crate::adapters::{GoldApiClient, PushoverNotifier};
use crate::config::{Credentials, Settings};
use crate::core::alert::AlertRules;
use crate::core::schedule::{format_api_date, local_hour, previous_day};
use crate::domain::model::{AlertKind, Delivery, Notification};
use crate::domain::ports::{Notifier, PriceSource};
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// How a single run ended. A run never fails once the job is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The current price could not be fetched; nothing was sent.
    PriceUnavailable,
    /// Trigger hour, but no usable reference price; nothing was sent.
    ComparisonSkipped { price: f64 },
    Sent { price: f64, kind: AlertKind },
    DeliveryFailed { price: f64, kind: AlertKind },
}

impl RunOutcome {
    pub fn price(&self) -> Option<f64> {
        match self {
            RunOutcome::PriceUnavailable => None,
            RunOutcome::ComparisonSkipped { price }
            | RunOutcome::Sent { price, .. }
            | RunOutcome::DeliveryFailed { price, .. } => Some(*price),
        }
    }

    pub fn notification_sent(&self) -> bool {
        matches!(self, RunOutcome::Sent { .. })
    }
}

pub struct PriceAlertJob<P: PriceSource, N: Notifier> {
    source: P,
    notifier: N,
    rules: AlertRules,
    timezone: FixedOffset,
}

pub type LiveJob = PriceAlertJob<GoldApiClient, PushoverNotifier>;

/// Wire the HTTP adapters from validated settings and credentials.
pub fn build_job(settings: &Settings, credentials: &Credentials) -> Result<LiveJob> {
    let source = GoldApiClient::new(settings, credentials)?;
    let notifier = PushoverNotifier::new(settings, credentials)?;
    Ok(PriceAlertJob::new(
        source,
        notifier,
        AlertRules::from_settings(settings),
        settings.timezone()?,
    ))
}

impl<P: PriceSource, N: Notifier> PriceAlertJob<P, N> {
    pub fn new(source: P, notifier: N, rules: AlertRules, timezone: FixedOffset) -> Self {
        Self {
            source,
            notifier,
            rules,
            timezone,
        }
    }

    pub async fn run(&self) -> RunOutcome {
        self.run_at(Utc::now()).await
    }

    pub async fn run_at(&self, now: DateTime<Utc>) -> RunOutcome {
        let hour = local_hour(now, &self.timezone);
        tracing::info!("Local hour: {}h (UTC{})", hour, self.timezone);

        let current = match self.source.fetch_price(None).await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!("Failed to fetch current price: {}", e);
                tracing::warn!("Suggestion: {}", e.recovery_suggestion());
                tracing::info!("Processed. Final price: unavailable");
                return RunOutcome::PriceUnavailable;
            }
        };
        tracing::info!("Current price: {:.2}", current.value);

        let notification = if self.rules.is_trigger_hour(hour) {
            self.daily_notification(now, current.value).await
        } else {
            Some(self.rules.hourly_quote(current.value, hour))
        };

        let outcome = match notification {
            Some(notification) => match self.deliver(&notification).await {
                Some(_) => RunOutcome::Sent {
                    price: current.value,
                    kind: notification.kind,
                },
                None => RunOutcome::DeliveryFailed {
                    price: current.value,
                    kind: notification.kind,
                },
            },
            None => RunOutcome::ComparisonSkipped {
                price: current.value,
            },
        };

        tracing::info!("Processed. Final price: {:.2}", current.value);
        outcome
    }

    /// Sends the fixed test notification without touching the price source.
    pub async fn send_test_push(&self) -> Result<Delivery> {
        let notification = self.rules.test_push();
        let delivery = self.notifier.send(&notification).await?;
        tracing::info!("Test push sent: {:?}", delivery);
        Ok(delivery)
    }

    async fn daily_notification(&self, now: DateTime<Utc>, current: f64) -> Option<Notification> {
        let date = previous_day(now, &self.timezone);
        tracing::info!("Comparing with {}", format_api_date(date));

        // No fallback quote when the reference price is missing.
        let previous = match self.source.fetch_price(Some(date)).await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!("Failed to fetch price for {}: {}", date, e);
                return None;
            }
        };
        tracing::info!("Reference price: {:.2}", previous.value);

        let notification = self.rules.daily_comparison(current, previous.value);
        if notification.is_none() {
            tracing::warn!("Reference price {} cannot be compared", previous.value);
        }
        notification
    }

    async fn deliver(&self, notification: &Notification) -> Option<Delivery> {
        match self.notifier.send(notification).await {
            Ok(delivery) => {
                tracing::info!(
                    "Push sent: {} (request: {})",
                    notification.title,
                    delivery.request.as_deref().unwrap_or("-")
                );
                Some(delivery)
            }
            Err(e) => {
                tracing::warn!("Failed to send push '{}': {}", notification.title, e);
                tracing::warn!("Suggestion: {}", e.recovery_suggestion());
                None
            }
        }
    }
}
