//! Chapter content loading and validation.

use std::path::Path;

use color_eyre::eyre::{ensure, WrapErr};
use color_eyre::Result;

use crate::models::{Chapter, Question};

/// The ordered set of chapters the site serves. Content is validated once
/// at load; handlers can then trust every question to be well-formed.
#[derive(Debug, Clone)]
pub struct ChapterSet {
    chapters: Vec<Chapter>,
}

impl ChapterSet {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read chapter content from {path:?}"))?;
        let chapters: Vec<Chapter> =
            serde_json::from_str(&raw).wrap_err("chapter content is not valid JSON")?;
        Self::from_chapters(chapters)
    }

    pub fn from_chapters(chapters: Vec<Chapter>) -> Result<Self> {
        ensure!(!chapters.is_empty(), "chapter content is empty");
        for (idx, chapter) in chapters.iter().enumerate() {
            ensure!(!chapter.id.is_empty(), "chapter {idx} has an empty id");
            ensure!(
                !chapters[..idx].iter().any(|c| c.id == chapter.id),
                "duplicate chapter id '{}'",
                chapter.id
            );
            for (q_idx, question) in chapter.quiz.iter().enumerate() {
                validate_question(question).wrap_err_with(|| {
                    format!("chapter '{}', question {}", chapter.id, q_idx + 1)
                })?;
            }
        }
        Ok(Self { chapters })
    }

    pub fn get(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Previous and next chapters in reading order.
    pub fn neighbours(&self, chapter_id: &str) -> (Option<&Chapter>, Option<&Chapter>) {
        let Some(idx) = self.chapters.iter().position(|c| c.id == chapter_id) else {
            return (None, None);
        };
        let prev = idx.checked_sub(1).map(|i| &self.chapters[i]);
        let next = self.chapters.get(idx + 1);
        (prev, next)
    }
}

/// A renderable question has at least one option and exactly one marked
/// correct. The original authoring format never enforced this; rejecting it
/// at load keeps the grader's reveal step unambiguous.
fn validate_question(question: &Question) -> Result<()> {
    ensure!(!question.options.is_empty(), "question has no options");
    let correct = question.options.iter().filter(|o| o.correct).count();
    ensure!(
        correct == 1,
        "question must have exactly one correct option, found {correct}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter_json(quiz: &str) -> Vec<Chapter> {
        serde_json::from_str(&format!(
            r#"[{{"id": "ch1", "title": "T", "intro": "I", "quiz": {quiz}}}]"#
        ))
        .expect("chapter fixture should deserialize")
    }

    #[test]
    fn accepts_a_well_formed_question() {
        let chapters = chapter_json(
            r#"[{"prompt": "?", "options": [{"text": "a", "correct": true}, {"text": "b"}]}]"#,
        );
        let set = ChapterSet::from_chapters(chapters).expect("content should validate");
        assert_eq!(set.len(), 1);
        assert!(set.get("ch1").is_some());
        assert!(set.get("ch2").is_none());
    }

    #[test]
    fn rejects_a_question_without_options() {
        let chapters = chapter_json(r#"[{"prompt": "?", "options": []}]"#);
        let err = ChapterSet::from_chapters(chapters).expect_err("empty options should fail");
        assert!(err.to_string().contains("question 1"));
    }

    #[test]
    fn rejects_zero_or_multiple_correct_options() {
        for quiz in [
            r#"[{"prompt": "?", "options": [{"text": "a"}, {"text": "b"}]}]"#,
            r#"[{"prompt": "?", "options": [{"text": "a", "correct": true}, {"text": "b", "correct": true}]}]"#,
        ] {
            let chapters = chapter_json(quiz);
            assert!(ChapterSet::from_chapters(chapters).is_err());
        }
    }

    #[test]
    fn rejects_duplicate_chapter_ids() {
        let chapters: Vec<Chapter> = serde_json::from_str(
            r#"[{"id": "ch1", "title": "A", "intro": ""},
                {"id": "ch1", "title": "B", "intro": ""}]"#,
        )
        .expect("fixture should deserialize");
        assert!(ChapterSet::from_chapters(chapters).is_err());
    }

    #[test]
    fn neighbours_follow_reading_order() {
        let chapters: Vec<Chapter> = serde_json::from_str(
            r#"[{"id": "a", "title": "A", "intro": ""},
                {"id": "b", "title": "B", "intro": ""},
                {"id": "c", "title": "C", "intro": ""}]"#,
        )
        .expect("fixture should deserialize");
        let set = ChapterSet::from_chapters(chapters).expect("content should validate");

        let (prev, next) = set.neighbours("b");
        assert_eq!(prev.map(|c| c.id.as_str()), Some("a"));
        assert_eq!(next.map(|c| c.id.as_str()), Some("c"));

        let (prev, next) = set.neighbours("a");
        assert!(prev.is_none());
        assert_eq!(next.map(|c| c.id.as_str()), Some("b"));

        let (prev, next) = set.neighbours("missing");
        assert!(prev.is_none() && next.is_none());
    }
}
