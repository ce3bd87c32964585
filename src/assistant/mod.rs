// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! AI assistant collaborator.
//!
//! The core hands the assistant nothing but the active role id and label.
//! Requests are fire-and-forget: [`ChatSession::send`] appends the user line,
//! raises the `pending` flag and spawns the backend call. Navigation and role
//! switches never wait on it and never cancel it. Whatever comes back (reply
//! or failure notice) is appended in arrival order, independent of the role
//! active at that moment.

pub mod backend;

pub use backend::{create_backend, AnthropicBackend, AssistantBackend, MockBackend};

use crate::rbac::RoleId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Transcript line shown when the backend call fails.
pub const CONNECTION_ERROR: &str = "⚠️ Connection error. Please try again.";

/// Role context handed to the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantContext {
    pub role_id: RoleId,
    pub role_label: &'static str,
}

impl AssistantContext {
    pub fn for_role(role: RoleId) -> Self {
        Self {
            role_id: role,
            role_label: role.role().label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            speaker,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Canned prompts offered to each role.
pub fn suggestions(role: RoleId) -> &'static [&'static str] {
    match role {
        RoleId::Admin => &[
            "Show all devices above 80% CPU",
            "What caused the last critical alert?",
            "Run remediation on srv-mon-05",
            "List all devices in HYD-DC1",
        ],
        RoleId::Sre => &[
            "Detect anomalies in last 6 hours",
            "Show P99 latency trend",
            "Identify root cause of memory spike",
            "Compare traffic week over week",
        ],
        RoleId::Cio => &[
            "Summarize this month's SLA",
            "What is our network risk score?",
            "Predict downtime risk for next week",
            "Give me an executive summary",
        ],
        RoleId::Security => &[
            "Show suspicious traffic patterns",
            "Which IPs are blocked today?",
            "Analyze baseline deviations",
            "Flag unusual auth failures",
        ],
    }
}

fn greeting(role: RoleId) -> String {
    format!(
        "Hello! I'm your AI Network Assistant, configured for the **{role}** role.\n\n\
         I'll provide insights tailored to your permissions and responsibilities. \
         How can I help you today?"
    )
}

/// A chat transcript plus its in-flight request counter.
#[derive(Clone)]
pub struct ChatSession {
    backend: Arc<dyn AssistantBackend>,
    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    in_flight: Arc<AtomicUsize>,
}

impl ChatSession {
    /// New transcript seeded with a greeting for `role`.
    pub fn new(backend: Arc<dyn AssistantBackend>, role: RoleId) -> Self {
        Self {
            backend,
            transcript: Arc::new(Mutex::new(vec![ChatMessage::new(
                Speaker::Ai,
                greeting(role),
            )])),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Whether any request is still awaiting its reply.
    pub fn pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    /// Queue `query`. Returns `None` for blank input, otherwise the handle of
    /// the detached backend call (callers may drop it).
    pub async fn send(&self, context: AssistantContext, query: &str) -> Option<JoinHandle<()>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.transcript
            .lock()
            .await
            .push(ChatMessage::new(Speaker::User, query));
        self.in_flight.fetch_add(1, Ordering::SeqCst);

        let backend = Arc::clone(&self.backend);
        let transcript = Arc::clone(&self.transcript);
        let in_flight = Arc::clone(&self.in_flight);
        let query = query.to_owned();

        Some(tokio::spawn(async move {
            let text = match backend.reply(&context, &query).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(backend = backend.name(), "assistant request failed: {e:#}");
                    CONNECTION_ERROR.to_string()
                }
            };
            transcript.lock().await.push(ChatMessage::new(Speaker::Ai, text));
            in_flight.fetch_sub(1, Ordering::SeqCst);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn transcript_starts_with_role_greeting() {
        let chat = ChatSession::new(Arc::new(MockBackend::echo()), RoleId::Cio);
        let transcript = chat.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].speaker, Speaker::Ai);
        assert!(transcript[0].text.contains("**CIO**"));
        assert!(!chat.pending());
    }

    #[tokio::test]
    async fn blank_queries_are_ignored() {
        let chat = ChatSession::new(Arc::new(MockBackend::echo()), RoleId::Sre);
        assert!(chat.send(AssistantContext::for_role(RoleId::Sre), "   ").await.is_none());
        assert_eq!(chat.transcript().await.len(), 1);
    }

    #[tokio::test]
    async fn reply_is_appended_after_question() {
        let chat = ChatSession::new(Arc::new(MockBackend::fixed("all green")), RoleId::Admin);
        let handle = chat
            .send(AssistantContext::for_role(RoleId::Admin), "status?")
            .await
            .unwrap();
        handle.await.unwrap();

        let texts: Vec<String> = chat.transcript().await.into_iter().map(|m| m.text).collect();
        assert_eq!(&texts[1..], &["status?".to_string(), "all green".to_string()]);
        assert!(!chat.pending());
    }

    #[tokio::test]
    async fn failure_becomes_connection_error_line() {
        let chat = ChatSession::new(Arc::new(MockBackend::failing()), RoleId::Security);
        chat.send(AssistantContext::for_role(RoleId::Security), "blocked IPs?")
            .await
            .unwrap()
            .await
            .unwrap();

        let last = chat.transcript().await.pop().unwrap();
        assert_eq!(last.speaker, Speaker::Ai);
        assert_eq!(last.text, CONNECTION_ERROR);
    }

    #[tokio::test]
    async fn pending_while_request_in_flight() {
        let backend = MockBackend::fixed("late").with_delay(Duration::from_millis(50));
        let chat = ChatSession::new(Arc::new(backend), RoleId::Sre);
        let handle = chat
            .send(AssistantContext::for_role(RoleId::Sre), "slow one")
            .await
            .unwrap();
        assert!(chat.pending());
        handle.await.unwrap();
        assert!(!chat.pending());
    }

    #[test]
    fn every_role_has_four_suggestions() {
        for role in RoleId::ALL {
            assert_eq!(suggestions(role).len(), 4);
        }
    }

    #[test]
    fn context_carries_catalog_label() {
        let ctx = AssistantContext::for_role(RoleId::Security);
        assert_eq!(ctx.role_label, "Security Analyst");
    }
}
