//! Webhook delivery.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::WebhookConfig;
use crate::error::{EngineError, EngineResult};

use super::payload::SchedulePayload;

/// Future returned by [`ScheduleWebhook::send`].
pub type WebhookFuture<'a> = Pin<Box<dyn Future<Output = EngineResult<()>> + Send + 'a>>;

/// Something that accepts delivered schedules.
///
/// Object safe so services can hold an `Arc<dyn ScheduleWebhook>`.
pub trait ScheduleWebhook: Send + Sync {
    /// Delivers one payload.
    fn send<'a>(&'a self, payload: &'a SchedulePayload) -> WebhookFuture<'a>;
}

/// Posts payloads as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWebhook {
    url: String,
    client: reqwest::Client,
}

impl HttpWebhook {
    /// Builds a client for `config.url` with the configured timeout.
    pub fn new(config: &WebhookConfig) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| EngineError::WebhookError {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    /// The endpoint payloads are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, payload: &SchedulePayload) -> EngineResult<()> {
        debug!(url = %self.url, schedule_id = %payload.schedule_id, "Posting schedule");

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EngineError::WebhookError {
                message: format!("failed to send request: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Webhook rejected schedule");
            return Err(EngineError::WebhookError {
                message: format!("webhook returned non-success status: {}", status.as_u16()),
            });
        }

        Ok(())
    }
}

impl ScheduleWebhook for HttpWebhook {
    fn send<'a>(&'a self, payload: &'a SchedulePayload) -> WebhookFuture<'a> {
        Box::pin(self.post(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn payload() -> SchedulePayload {
        SchedulePayload {
            schedule_id: "s1".to_string(),
            period_start: "2025-01-06T00:00:00+00:00".to_string(),
            period_end: "2025-01-17T00:00:00+00:00".to_string(),
            employees: vec![],
            assignments: vec![],
            total_shifts: 0,
            total_hours: 0.0,
            generated_at: "2025-01-05T12:00:00+00:00".to_string(),
        }
    }

    /// Accepts one connection and answers it with `status_line`.
    async fn one_shot_server(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/hook")
    }

    fn webhook(url: String) -> HttpWebhook {
        HttpWebhook::new(&WebhookConfig {
            url,
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_status_is_ok() {
        let url = one_shot_server("200 OK").await;
        assert!(webhook(url).send(&payload()).await.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_is_webhook_error() {
        let url = one_shot_server("500 Internal Server Error").await;
        match webhook(url).send(&payload()).await {
            Err(EngineError::WebhookError { message }) => assert!(message.contains("500")),
            other => panic!("Expected WebhookError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_webhook_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = webhook(format!("http://{addr}/hook")).send(&payload()).await;
        assert!(matches!(result, Err(EngineError::WebhookError { .. })));
    }
}
