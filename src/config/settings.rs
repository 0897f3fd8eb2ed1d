use crate::utils::error::{AlertError, Result};
use crate::utils::validation::{self, Validate};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_PRICE_API_URL: &str = "https://www.goldapi.io/api";
pub const DEFAULT_NOTIFY_URL: &str = "https://api.pushover.net/1/messages.json";

/// Non-secret settings of the job. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub price_api_url: String,
    pub asset: String,
    pub currency: String,
    /// Human name of the asset used in message bodies.
    pub asset_label: String,
    pub notify_url: String,
    pub trigger_hour: u32,
    /// Fractional drop (0.03 = 3%) that turns the daily quote into an opportunity alert.
    pub drop_threshold: f64,
    pub utc_offset_hours: i32,
    pub timeout_seconds: u64,
    pub priority: i8,
    pub sound: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            price_api_url: DEFAULT_PRICE_API_URL.to_string(),
            asset: "XAU".to_string(),
            currency: "USD".to_string(),
            asset_label: "Ouro".to_string(),
            notify_url: DEFAULT_NOTIFY_URL.to_string(),
            trigger_hour: 10,
            drop_threshold: 0.03,
            utc_offset_hours: -3,
            timeout_seconds: 15,
            priority: 1,
            sound: "cashregister".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file; absent keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay values found through `lookup` (normally the process environment).
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = get("PRICE_API_URL") {
            self.price_api_url = v;
        }
        if let Some(v) = get("PRICE_ASSET") {
            self.asset = v;
        }
        if let Some(v) = get("PRICE_CURRENCY") {
            self.currency = v;
        }
        if let Some(v) = get("ASSET_LABEL") {
            self.asset_label = v;
        }
        if let Some(v) = get("NOTIFY_URL") {
            self.notify_url = v;
        }
        if let Some(v) = get("TRIGGER_HOUR") {
            self.trigger_hour = parse_env("TRIGGER_HOUR", &v)?;
        }
        if let Some(v) = get("DROP_THRESHOLD") {
            self.drop_threshold = parse_env("DROP_THRESHOLD", &v)?;
        }
        if let Some(v) = get("UTC_OFFSET_HOURS") {
            self.utc_offset_hours = parse_env("UTC_OFFSET_HOURS", &v)?;
        }
        if let Some(v) = get("REQUEST_TIMEOUT_SECONDS") {
            self.timeout_seconds = parse_env("REQUEST_TIMEOUT_SECONDS", &v)?;
        }
        if let Some(v) = get("PUSH_PRIORITY") {
            self.priority = parse_env("PUSH_PRIORITY", &v)?;
        }
        if let Some(v) = get("PUSH_SOUND") {
            self.sound = v;
        }

        Ok(self)
    }

    pub fn timezone(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            AlertError::InvalidConfigValue {
                field: "utc_offset_hours".to_string(),
                value: self.utc_offset_hours.to_string(),
                reason: "Offset is out of range".to_string(),
            }
        })
    }
}

fn parse_env<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| AlertError::InvalidConfigValue {
        field: name.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("price_api_url", &self.price_api_url)?;
        validation::validate_url("notify_url", &self.notify_url)?;
        validation::validate_symbol("asset", &self.asset)?;
        validation::validate_symbol("currency", &self.currency)?;
        validation::validate_non_empty_string("asset_label", &self.asset_label)?;
        validation::validate_range("trigger_hour", self.trigger_hour, 0, 23)?;
        validation::validate_fraction("drop_threshold", self.drop_threshold)?;
        validation::validate_range("utc_offset_hours", self.utc_offset_hours, -12, 14)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        // Emergency priority (2) needs retry/expire fields the notifier does not send
        validation::validate_range("priority", self.priority, -2, 1)?;
        validation::validate_non_empty_string("sound", &self.sound)?;

        tracing::debug!("Settings validation passed");
        Ok(())
    }
}
