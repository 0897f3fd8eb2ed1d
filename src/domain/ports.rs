use crate::domain::model::{Delivery, Notification, Price};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Current price when `date` is `None`, otherwise the price recorded for that day.
    async fn fetch_price(&self, date: Option<NaiveDate>) -> Result<Price>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<Delivery>;
}
