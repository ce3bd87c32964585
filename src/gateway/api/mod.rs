// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

pub mod assistant;
pub mod error;
pub mod handlers;
pub mod types;

use crate::gateway::AppState;
use axum::Router;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::router())
        .merge(assistant::router())
}
