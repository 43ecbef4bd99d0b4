use axum::extract::{Form, Path, State};
use axum::routing::post;
use axum::Router;
use maud::Markup;
use serde::Deserialize;

use crate::engine::QuizBlock;
use crate::rejections::AppError;
use crate::views::quiz as quiz_views;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/chapter/{chapter_id}/quiz/{question_idx}/answer",
        post(submit_answer),
    )
}

#[derive(Deserialize)]
struct AnswerBody {
    option: String,
}

/// Grade a selection and return the re-derived block fragment.
///
/// Repeat submissions and unparseable option values change nothing and get
/// the block's current markup back, so an answered block is observably
/// frozen no matter how often the client fires.
async fn submit_answer(
    State(state): State<AppState>,
    Path((chapter_id, question_idx)): Path<(String, usize)>,
    Form(body): Form<AnswerBody>,
) -> Result<Markup, AppError> {
    let chapter = state.chapters.get(&chapter_id).ok_or(AppError::NotFound)?;
    let question = chapter.quiz.get(question_idx).ok_or(AppError::NotFound)?;

    let mut blocks = state.lock_blocks();
    let block = blocks
        .entry((chapter_id.clone(), question_idx))
        .or_insert_with(|| QuizBlock::new(question.clone()));

    if let Ok(option_idx) = body.option.parse::<usize>() {
        if let Some(grading) = block.select(option_idx) {
            tracing::debug!(
                "graded {chapter_id} q{question_idx}: option {option_idx} was {:?}",
                grading.verdict
            );
        }
    }

    Ok(quiz_views::quiz_block(
        &chapter_id,
        question_idx,
        question,
        block.grading(),
    ))
}
