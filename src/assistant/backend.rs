// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

use super::AssistantContext;
use crate::config::AssistantConfig;
use crate::rbac::RoleId;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Remote (or local) model answering assistant queries.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Produce a reply to `query` for the given role context.
    async fn reply(&self, context: &AssistantContext, query: &str) -> Result<String>;

    /// Return the backend name (e.g. "Anthropic Messages").
    fn name(&self) -> &str;
}

// ══════════════════════════════════════════════════════════════════════════════
// Anthropic Messages API
// ══════════════════════════════════════════════════════════════════════════════

pub struct AnthropicBackend {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicBackend {
    pub fn new(config: &AssistantConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

/// Answering style expected by each role.
fn role_guidance(role: RoleId) -> &'static str {
    match role {
        RoleId::Cio => {
            "Focus on business impact, SLA trends, and high-level executive summaries only. \
             Avoid technical jargon."
        }
        RoleId::Security => {
            "Focus on security threats, anomaly patterns, and SOC workflows. \
             Suggest containment steps."
        }
        RoleId::Sre => {
            "Focus on service health, root cause analysis, latency, and deployment health."
        }
        RoleId::Admin => {
            "Provide full technical details. \
             Suggest automation scripts and remediation steps as needed."
        }
    }
}

fn system_prompt(context: &AssistantContext) -> String {
    format!(
        "You are an AI network monitoring assistant for a {} ({}) user on a NOC dashboard.\n\
         Role context: {}\n\
         Be concise and actionable. Use bullet points for lists. Keep responses under 200 words.",
        context.role_label,
        context.role_id,
        role_guidance(context.role_id)
    )
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl AssistantBackend for AnthropicBackend {
    async fn reply(&self, context: &AssistantContext, query: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": system_prompt(context),
            "messages": [{ "role": "user", "content": query }],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to assistant endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Assistant API error ({status}): {error_text}");
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse assistant response")?;
        let text: String = parsed
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect();

        if text.is_empty() {
            return Ok("Unable to process response.".to_string());
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "Anthropic Messages"
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Factory
// ══════════════════════════════════════════════════════════════════════════════

pub fn create_backend(config: &AssistantConfig) -> Result<Box<dyn AssistantBackend>> {
    match config.provider.as_str() {
        "anthropic" => {
            let key = config.api_key.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "Assistant provider 'anthropic' requires an API key. Set assistant.api_key or {}.",
                    crate::config::API_KEY_ENV
                )
            })?;
            Ok(Box::new(AnthropicBackend::new(config, key)?))
        }
        "mock" => Ok(Box::new(MockBackend::echo())),
        other => anyhow::bail!("Unsupported assistant provider: {other}"),
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Mock backend (for testing and offline use)
// ══════════════════════════════════════════════════════════════════════════════

/// Replies without any network call. `delay` lets tests reorder completions.
pub struct MockBackend {
    reply: Option<String>,
    delay: Duration,
    fail: bool,
}

impl MockBackend {
    /// Echo the query back, tagged with the role.
    pub fn echo() -> Self {
        Self {
            reply: None,
            delay: Duration::ZERO,
            fail: false,
        }
    }

    pub fn fixed(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            delay: Duration::ZERO,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            delay: Duration::ZERO,
            fail: true,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl AssistantBackend for MockBackend {
    async fn reply(&self, context: &AssistantContext, query: &str) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            anyhow::bail!("mock backend failure");
        }
        Ok(self
            .reply
            .clone()
            .unwrap_or_else(|| format!("[{}] {query}", context.role_id)))
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_mock() {
        let config = AssistantConfig {
            provider: "mock".into(),
            ..Default::default()
        };
        assert_eq!(create_backend(&config).unwrap().name(), "Mock");
    }

    #[test]
    fn factory_anthropic_requires_key() {
        let config = AssistantConfig::default();
        let err = create_backend(&config).err().unwrap();
        assert!(err.to_string().contains("requires an API key"));

        let config = AssistantConfig {
            api_key: Some("sk-test".into()),
            ..Default::default()
        };
        assert_eq!(create_backend(&config).unwrap().name(), "Anthropic Messages");
    }

    #[test]
    fn factory_rejects_unknown_provider() {
        let config = AssistantConfig {
            provider: "carrier-pigeon".into(),
            ..Default::default()
        };
        assert!(create_backend(&config).is_err());
    }

    #[test]
    fn system_prompt_carries_role_guidance() {
        let cio = system_prompt(&AssistantContext::for_role(RoleId::Cio));
        assert!(cio.contains("(CIO)"));
        assert!(cio.contains("Avoid technical jargon."));

        let sec = system_prompt(&AssistantContext::for_role(RoleId::Security));
        assert!(sec.contains("Suggest containment steps."));
        assert!(!sec.contains("jargon"));
    }

    #[tokio::test]
    async fn echo_tags_role() {
        let ctx = AssistantContext::for_role(RoleId::Sre);
        let reply = MockBackend::echo().reply(&ctx, "p99?").await.unwrap();
        assert_eq!(reply, "[SRE] p99?");
    }

    #[test]
    fn messages_response_concatenates_text_blocks() {
        let raw = r#"{"content":[{"type":"text","text":"a"},{"type":"tool_use"},{"type":"text","text":"b"}]}"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.content.into_iter().filter_map(|b| b.text).collect();
        assert_eq!(text, "ab");
    }
}
