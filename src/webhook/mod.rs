//! Delivery of generated schedules to an external webhook.

mod client;
mod payload;

pub use client::{HttpWebhook, ScheduleWebhook, WebhookFuture};
pub use payload::{SchedulePayload, WebhookEmployee};
