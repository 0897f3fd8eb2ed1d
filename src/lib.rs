pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{Credentials, Settings};
pub use crate::core::job::{build_job, LiveJob, PriceAlertJob, RunOutcome};
pub use crate::utils::error::{AlertError, Result};
