pub mod chapters;
pub mod engine;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod progress;
pub mod rejections;
pub mod statics;
pub mod utils;
pub mod views;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{middleware, Router};

use crate::chapters::ChapterSet;
use crate::engine::QuizBlock;
use crate::progress::ProgressStore;

/// Answered/unanswered state for every quiz block the learner has touched,
/// keyed by chapter id and question index.
pub type BlockRegistry = Arc<Mutex<HashMap<(String, usize), QuizBlock>>>;

#[derive(Clone)]
pub struct AppState {
    pub chapters: Arc<ChapterSet>,
    pub progress: ProgressStore,
    pub blocks: BlockRegistry,
}

impl AppState {
    pub fn new(chapters: ChapterSet, progress: ProgressStore) -> Self {
        Self {
            chapters: Arc::new(chapters),
            progress,
            blocks: Arc::default(),
        }
    }

    pub(crate) fn lock_blocks(&self) -> MutexGuard<'_, HashMap<(String, usize), QuizBlock>> {
        // A poisoned registry only means some block missed a grading; keep
        // serving rather than panic every later request.
        self.blocks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::chapter::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::progress::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
