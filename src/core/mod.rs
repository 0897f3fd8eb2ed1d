pub mod alert;
pub mod job;
pub mod schedule;

pub use crate::domain::model::{AlertKind, Delivery, Notification, Price};
pub use crate::domain::ports::{Notifier, PriceSource};
pub use crate::utils::error::Result;
