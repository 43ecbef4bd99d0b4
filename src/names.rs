pub const HOME_URL: &str = "/";
pub const RESET_PROGRESS_URL: &str = "/progress/reset";

/// Storage key for the learner progress blob.
pub const PROGRESS_STORAGE_KEY: &str = "wrg_progress";

pub fn chapter_url(chapter_id: &str) -> String {
    format!("/chapter/{chapter_id}")
}

pub fn submit_answer_url(chapter_id: &str, question_idx: usize) -> String {
    format!("/chapter/{chapter_id}/quiz/{question_idx}/answer")
}

pub fn chapter_complete_url(chapter_id: &str) -> String {
    format!("/chapter/{chapter_id}/complete")
}
