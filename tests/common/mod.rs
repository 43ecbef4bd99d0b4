use std::path::PathBuf;

use wrg::chapters::ChapterSet;
use wrg::progress::ProgressStore;
use wrg::AppState;

pub fn create_test_state() -> AppState {
    let chapters: Vec<wrg::models::Chapter> = serde_json::from_str(
        r#"[
            {
                "id": "rivers",
                "title": "Rivers",
                "intro": "Water at work.",
                "quiz": [
                    {
                        "prompt": "Longest river in Europe?",
                        "options": [
                            {
                                "text": "Volga",
                                "correct": true,
                                "feedback": "The Volga runs 3,530 km to the Caspian Sea."
                            },
                            {
                                "text": "Danube",
                                "feedback": "The Danube is Europe's second longest."
                            }
                        ]
                    }
                ]
            },
            {
                "id": "plains",
                "title": "Plains",
                "intro": "Flat land, deep soil.",
                "quiz": []
            }
        ]"#,
    )
    .expect("test chapters should deserialize");

    let chapters = ChapterSet::from_chapters(chapters).expect("test chapters should validate");
    AppState::new(chapters, ProgressStore::in_memory())
}

/// Fresh directory for FileStore tests, unique per process and call.
#[allow(dead_code)]
pub fn temp_store_dir() -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("wrg_test_{}_{}", std::process::id(), id));
    // Clean up leftovers from previous runs
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
