// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

//! Assistant chat API. Gated like the AI page itself: the role must reach
//! the `ai` view, and the AI Root Cause level is resolved on every request.
//! The transcript survives role switches and is dropped on sign-out.

use super::error::ApiError;
use super::types::{ChatRequest, ChatResponse};
use crate::assistant::{suggestions, AssistantContext, ChatSession};
use crate::error::RbacError;
use crate::gateway::AppState;
use crate::navigation::{NavigationProjector, ViewId};
use crate::rbac::{AccessLevel, Feature, PermissionResolver, RoleId};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::get,
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/assistant", get(get_chat).post(post_chat))
}

/// Level at which `role` may use the assistant page.
fn assistant_access(role: RoleId) -> Result<AccessLevel, ApiError> {
    if !NavigationProjector::is_reachable(role, ViewId::Ai) {
        return Err(RbacError::InvalidNavigationRequest {
            role: role.to_string(),
            view: ViewId::Ai.to_string(),
        }
        .into());
    }
    let level = PermissionResolver::resolve(Feature::AiRootCause, role);
    if !level.ui_contract().renders_body {
        return Err(ApiError::AccessDenied {
            feature: Feature::AiRootCause,
            level,
        });
    }
    Ok(level)
}

/// Resolve access and fetch the chat under one lock.
fn open_chat(state: &AppState) -> Result<(RoleId, AccessLevel, ChatSession), ApiError> {
    let mut session = state.session();
    let role = session.controller.role().ok_or(ApiError::NoActiveRole)?;
    let access = assistant_access(role)?;
    let (role, chat) = session
        .chat(&state.assistant)
        .ok_or(ApiError::NoActiveRole)?;
    Ok((role, access, chat))
}

async fn respond(chat: &ChatSession, role: RoleId, access: AccessLevel) -> ChatResponse {
    ChatResponse {
        role,
        access,
        pending: chat.pending(),
        suggestions: suggestions(role),
        transcript: chat.transcript().await,
    }
}

async fn get_chat(State(state): State<AppState>) -> Result<Json<ChatResponse>, ApiError> {
    let (role, access, chat) = open_chat(&state)?;
    Ok(Json(respond(&chat, role, access).await))
}

async fn post_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<(StatusCode, Json<ChatResponse>), ApiError> {
    let (role, access, chat) = open_chat(&state)?;
    // Asking counts as acting on the page; read-only levels only see the
    // transcript.
    if !access.ui_contract().mutation_controls {
        return Err(ApiError::AccessDenied {
            feature: Feature::AiRootCause,
            level: access,
        });
    }

    // Detached: the reply is appended whenever it arrives.
    let status = match chat.send(AssistantContext::for_role(role), &payload.message).await {
        Some(_handle) => StatusCode::ACCEPTED,
        None => StatusCode::OK,
    };
    Ok((status, Json(respond(&chat, role, access).await)))
}
