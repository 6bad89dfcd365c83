//! HTTP front-end: teachers upload documents, students join by session key

pub mod error;
pub mod handlers;
pub mod pages;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use crate::config::Config;
use crate::quiz::QuestionGenerator;
use crate::storage::SessionStore;

/// Shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub generator: Arc<QuestionGenerator>,
    pub default_questions: usize,
    pub default_timer: u32,
}

impl AppState {
    pub fn from_config(config: &Config, sessions: SessionStore) -> Self {
        Self {
            sessions,
            generator: Arc::new(QuestionGenerator::new(config.generator_config())),
            default_questions: config.get_default_questions(),
            default_timer: config.get_default_timer(),
        }
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/index", get(handlers::index))
        .route("/teacher", post(handlers::teacher_generate))
        .route(
            "/student",
            get(handlers::student_page).post(handlers::student_join),
        )
        .route("/submit", post(handlers::submit))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: &str, state: AppState, max_upload_bytes: usize) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state, max_upload_bytes))
        .await
        .context("Web server stopped with an error")
}
