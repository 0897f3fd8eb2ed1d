use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A quote of the tracked asset, optionally for a past calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub value: f64,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    OpportunityDrop,
    DailyQuote,
    HourlyQuote,
    TestPush,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

/// What the push gateway answered, as far as it could be parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub request: Option<String>,
}
