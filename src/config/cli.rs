use crate::config::settings::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "price-alert")]
#[command(about = "Fetch a commodity price and push it to your phone")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with non-secret settings")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub price_api_url: Option<String>,

    #[arg(long)]
    pub asset: Option<String>,

    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long)]
    pub asset_label: Option<String>,

    #[arg(long)]
    pub notify_url: Option<String>,

    #[arg(long, help = "Local hour that runs the day-over-day comparison")]
    pub trigger_hour: Option<u32>,

    #[arg(long, help = "Drop fraction that triggers an opportunity alert, e.g. 0.03")]
    pub drop_threshold: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset_hours: Option<i32>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, allow_negative_numbers = true)]
    pub priority: Option<i8>,

    #[arg(long)]
    pub sound: Option<String>,

    #[arg(long, help = "Run as if the current time were this RFC 3339 instant")]
    pub at: Option<DateTime<Utc>>,

    #[arg(long, help = "Only send a test notification, skip price lookups")]
    pub test_push: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then the environment, then CLI flags.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };

        let settings = self.apply_overrides(base.with_env_overrides(|k| std::env::var(k).ok())?);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(v) = &self.price_api_url {
            settings.price_api_url = v.clone();
        }
        if let Some(v) = &self.asset {
            settings.asset = v.clone();
        }
        if let Some(v) = &self.currency {
            settings.currency = v.clone();
        }
        if let Some(v) = &self.asset_label {
            settings.asset_label = v.clone();
        }
        if let Some(v) = &self.notify_url {
            settings.notify_url = v.clone();
        }
        if let Some(v) = self.trigger_hour {
            settings.trigger_hour = v;
        }
        if let Some(v) = self.drop_threshold {
            settings.drop_threshold = v;
        }
        if let Some(v) = self.utc_offset_hours {
            settings.utc_offset_hours = v;
        }
        if let Some(v) = self.timeout_seconds {
            settings.timeout_seconds = v;
        }
        if let Some(v) = self.priority {
            settings.priority = v;
        }
        if let Some(v) = &self.sound {
            settings.sound = v.clone();
        }
        settings
    }
}
