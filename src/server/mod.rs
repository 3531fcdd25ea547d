//! HTTP and WebSocket surface: REST routes over the store, the room relay, and the
//! standalone rule-based text-generation service.

pub mod ai_service;
pub mod config;
pub mod error;
pub mod listen;
pub mod rooms;
pub mod routes;
pub mod state;
pub mod ws;

use crate::{
    foundation::error::{BlueboardError, BlueboardResult},
    server::{
        config::{AiServiceArgs, ServeArgs},
        listen::bind_with_retry,
        state::AppState,
    },
};

/// Runs the API server until the listener fails.
pub async fn serve(args: ServeArgs) -> BlueboardResult<()> {
    let state = AppState::from_args(&args).await?;
    tracing::info!(generator = %state.generator.describe(), "generator ready");

    let listener = bind_with_retry(&args.host, args.port, args.max_port_attempts).await?;
    axum::serve(listener, routes::router(state))
        .await
        .map_err(|e| BlueboardError::startup(format!("server stopped: {e}")))
}

/// Runs the rule-based `/generate` service.
pub async fn serve_ai(args: AiServiceArgs) -> BlueboardResult<()> {
    let listener = bind_with_retry(&args.host, args.port, args.max_port_attempts).await?;
    axum::serve(listener, ai_service::router())
        .await
        .map_err(|e| BlueboardError::startup(format!("ai service stopped: {e}")))
}
