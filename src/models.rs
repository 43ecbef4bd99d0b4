use serde::Deserialize;

/// One quiz question as authored in chapter content JSON. Field names follow
/// the authoring format (`type`, `correct`), not Rust conventions.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub scenario: Option<String>,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    pub options: Vec<QuestionOption>,
}

fn default_kind() -> String {
    "multiple-choice".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    pub feedback: Option<String>,
}

impl Question {
    /// Index of the option marked correct, if any.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }
}

/// A chapter of the site: prose sections plus the interactive widgets that
/// accompany them. Everything except `id`, `title` and `intro` is optional
/// so lightweight chapters stay lightweight.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub flip_cards: Vec<FlipCard>,
    #[serde(default)]
    pub quiz: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

/// A "regional connection" aside, collapsed by default.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlipCard {
    pub front: String,
    pub back: String,
}
