use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::views;

/// Handler-level failure. A supplementary learning site only ever turns a
/// request away when the content does not exist; every other fault is
/// logged where it happens and degraded in place.
#[derive(Debug)]
pub enum AppError {
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };
        (code, error_page(message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href="/" { "Back to the chapters" } }
        },
    )
}
