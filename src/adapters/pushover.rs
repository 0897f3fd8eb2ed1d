use crate::config::{Credentials, Settings};
use crate::domain::model::{Delivery, Notification};
use crate::domain::ports::Notifier;
use crate::utils::error::{AlertError, Result};
use async_trait::async_trait;
use reqwest::Client;

const SERVICE: &str = "push gateway";

/// Pushover-style gateway: form-encoded `POST` to `/1/messages.json`.
#[derive(Debug, Clone)]
pub struct PushoverNotifier {
    client: Client,
    url: String,
    token: String,
    user: String,
    priority: i8,
    sound: String,
}

impl PushoverNotifier {
    pub fn new(settings: &Settings, credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            client: super::http_client(settings.timeout_seconds)?,
            url: settings.notify_url.clone(),
            token: credentials.push_token.clone(),
            user: credentials.push_user.clone(),
            priority: settings.priority,
            sound: settings.sound.clone(),
        })
    }
}

#[async_trait]
impl Notifier for PushoverNotifier {
    async fn send(&self, notification: &Notification) -> Result<Delivery> {
        let priority = self.priority.to_string();
        let form = [
            ("token", self.token.as_str()),
            ("user", self.user.as_str()),
            ("message", notification.message.as_str()),
            ("title", notification.title.as_str()),
            ("priority", priority.as_str()),
            ("sound", self.sound.as_str()),
        ];

        tracing::debug!("Posting notification '{}' to {}", notification.title, self.url);
        let response = self.client.post(&self.url).form(&form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Push gateway response: {} - {}", status, body);

        if !status.is_success() {
            return Err(AlertError::Upstream {
                service: SERVICE.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        // The gateway answers {"status":1,"request":"..."}; anything else is only logged.
        let delivery = serde_json::from_str::<Delivery>(&body).unwrap_or_else(|e| {
            tracing::debug!("Unrecognised push gateway body: {}", e);
            Delivery::default()
        });
        Ok(delivery)
    }
}
