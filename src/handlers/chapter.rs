use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use maud::Markup;

use crate::extractors::IsHtmx;
use crate::rejections::AppError;
use crate::{views, AppState};

use crate::views::chapter as chapter_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/chapter/{chapter_id}", get(chapter_page))
}

async fn home(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    let cards: Vec<chapter_views::ChapterCard> = state
        .chapters
        .iter()
        .map(|chapter| chapter_views::ChapterCard {
            completed: state.progress.is_chapter_complete(&chapter.id),
            chapter,
        })
        .collect();
    let completed = state.progress.get_completed_count();

    views::render(is_htmx, "Chapters", chapter_views::home(&cards, completed))
}

async fn chapter_page(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let chapter = state.chapters.get(&chapter_id).ok_or(AppError::NotFound)?;

    // Re-derive answered quiz blocks so a revisit shows graded state.
    let gradings = {
        let blocks = state.lock_blocks();
        (0..chapter.quiz.len())
            .map(|idx| {
                blocks
                    .get(&(chapter_id.clone(), idx))
                    .and_then(|block| block.grading().cloned())
            })
            .collect()
    };

    let (prev, next) = state.chapters.neighbours(&chapter_id);
    let body = chapter_views::chapter(chapter_views::ChapterPageData {
        chapter,
        completed: state.progress.is_chapter_complete(&chapter_id),
        gradings,
        prev,
        next,
    });

    Ok(views::render(is_htmx, &chapter.title, body))
}
