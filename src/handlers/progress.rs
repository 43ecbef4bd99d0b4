use axum::extract::{Path, State};
use axum::routing::post;
use axum::Router;
use maud::Markup;

use crate::rejections::AppError;
use crate::views::chapter as chapter_views;
use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chapter/{chapter_id}/complete", post(mark_complete))
        .route(names::RESET_PROGRESS_URL, post(reset_progress))
}

async fn mark_complete(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> Result<Markup, AppError> {
    if state.chapters.get(&chapter_id).is_none() {
        return Err(AppError::NotFound);
    }
    state.progress.mark_chapter_complete(&chapter_id);
    tracing::info!("chapter '{chapter_id}' marked complete");

    Ok(chapter_views::completion_control(&chapter_id, true))
}

async fn reset_progress(State(state): State<AppState>) -> Markup {
    state.progress.reset();
    tracing::info!("learner progress reset");

    chapter_views::progress_summary(0, state.chapters.len())
}
