pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// DOM id shared by the rendered quiz block and the htmx swap target for
/// its graded replacement.
pub fn quiz_block_id(chapter_id: &str, question_idx: usize) -> String {
    format!("quiz-{chapter_id}-q{question_idx}")
}
