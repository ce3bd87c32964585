//! Integration tests for the assistant collaborator.
//! Replies append in arrival order and never depend on the role active when
//! they land.

use anyhow::Result;
use async_trait::async_trait;
use netvision_core::assistant::{
    AssistantBackend, AssistantContext, ChatSession, Speaker, CONNECTION_ERROR,
};
use netvision_core::{NavigationOutcome, RoleId, ViewId, ViewStateController};
use std::sync::Arc;
use std::time::Duration;

/// Sleeps for the number of milliseconds given in the query, then echoes it.
struct SleepyBackend;

#[async_trait]
impl AssistantBackend for SleepyBackend {
    async fn reply(&self, context: &AssistantContext, query: &str) -> Result<String> {
        let millis: u64 = query.parse()?;
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(format!("{}:{query}", context.role_id))
    }

    fn name(&self) -> &str {
        "Sleepy"
    }
}

#[tokio::test]
async fn test_replies_append_in_arrival_order() {
    let chat = ChatSession::new(Arc::new(SleepyBackend), RoleId::Admin);

    let slow = chat
        .send(AssistantContext::for_role(RoleId::Admin), "80")
        .await
        .unwrap();
    let fast = chat
        .send(AssistantContext::for_role(RoleId::Admin), "5")
        .await
        .unwrap();
    fast.await.unwrap();
    slow.await.unwrap();

    let texts: Vec<String> = chat.transcript().await.into_iter().map(|m| m.text).collect();
    // greeting, both questions, then replies by arrival: fast before slow.
    assert_eq!(&texts[1..3], &["80".to_string(), "5".to_string()]);
    assert_eq!(&texts[3..], &["Admin:5".to_string(), "Admin:80".to_string()]);
}

#[tokio::test]
async fn test_role_switch_does_not_block_or_cancel_request() {
    let chat = ChatSession::new(Arc::new(SleepyBackend), RoleId::Sre);
    let mut ctl = ViewStateController::default();
    ctl.select_role(RoleId::Sre);
    assert_eq!(ctl.navigate(ViewId::Ai), NavigationOutcome::Applied);

    let handle = chat
        .send(AssistantContext::for_role(RoleId::Sre), "40")
        .await
        .unwrap();

    // Role switch and navigation proceed while the request is pending.
    ctl.switch_role(RoleId::Cio);
    assert_eq!(ctl.view(), ViewId::Dashboard);
    assert!(chat.pending());

    handle.await.unwrap();
    let last = chat.transcript().await.pop().unwrap();
    // Keyed by append order, tagged with the role that asked.
    assert_eq!(last.speaker, Speaker::Ai);
    assert_eq!(last.text, "SRE:40");
    assert!(!chat.pending());
}

#[tokio::test]
async fn test_backend_error_is_a_transcript_line() {
    let chat = ChatSession::new(Arc::new(SleepyBackend), RoleId::Security);
    chat.send(AssistantContext::for_role(RoleId::Security), "not-a-number")
        .await
        .unwrap()
        .await
        .unwrap();
    assert_eq!(chat.transcript().await.pop().unwrap().text, CONNECTION_ERROR);
}
