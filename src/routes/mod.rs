// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::{error::AppError, services::menu::MenuCatalog, state::SharedState};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chat::chat_handler;
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "nopickles-mvp";

pub fn create_router(static_dir: &Path) -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/menu", get(menu_handler))
        .route("/health", get(health_handler))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn menu_handler(State(state): State<SharedState>) -> Json<MenuCatalog> {
    Json(state.get_menu().as_ref().clone())
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn health_handler() -> Json<Health> {
    Json(Health { status: "healthy", service: SERVICE_NAME })
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
