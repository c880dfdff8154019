use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::error::WatchError;
use crate::domain::ports::notifier::{Message, Notifier};

/// Discord webhook adapter: one message becomes one embed in one POST.
pub struct DiscordNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            webhook_url,
        }
    }
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    embeds: [Embed<'a>; 1],
}

#[derive(Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    color: u32,
    footer: Footer<'a>,
}

#[derive(Serialize)]
struct Footer<'a> {
    text: &'a str,
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send(&self, message: &Message) -> Result<(), WatchError> {
        let payload = WebhookPayload {
            embeds: [Embed {
                title: &message.title,
                description: &message.body,
                color: message.color,
                footer: Footer {
                    text: &message.footer,
                },
            }],
        };

        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| WatchError::DispatchFailure(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(WatchError::DispatchFailure(format!(
                "webhook returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
