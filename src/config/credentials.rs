use crate::utils::error::{AlertError, Result};
use std::fmt;

pub const PRICE_API_KEY_VAR: &str = "GOLD_API_KEY";
pub const PUSH_USER_VAR: &str = "PUSH_USER";
pub const PUSH_TOKEN_VAR: &str = "PUSH_TOKEN";

/// Secrets for the price API and the push gateway. Built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub price_api_key: String,
    pub push_user: String,
    pub push_token: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            price_api_key: required(&lookup, PRICE_API_KEY_VAR)?,
            push_user: required(&lookup, PUSH_USER_VAR)?,
            push_token: required(&lookup, PUSH_TOKEN_VAR)?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AlertError::ConfigurationMissing {
            field: name.to_string(),
        })
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("price_api_key", &"<redacted>")
            .field("push_user", &"<redacted>")
            .field("push_token", &"<redacted>")
            .finish()
    }
}
