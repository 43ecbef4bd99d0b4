//! Quiz block rendering.
//!
//! A block's markup is always a pure function of its question and its
//! grading state, so the fragment returned after an answer is exactly what
//! a page reload would render. All authored text goes through maud text
//! interpolation, which escapes it; nothing here uses `PreEscaped`.

use maud::{html, Markup};

use crate::engine::Grading;
use crate::models::Question;
use crate::{names, utils};

pub fn quiz(chapter_id: &str, questions: &[Question], gradings: &[Option<Grading>]) -> Markup {
    html! {
        section."chapter-quiz" {
            h2 { "Check your understanding" }
            @for (idx, question) in questions.iter().enumerate() {
                (quiz_block(chapter_id, idx, question, gradings.get(idx).and_then(|g| g.as_ref())))
            }
        }
    }
}

pub fn quiz_block(
    chapter_id: &str,
    question_idx: usize,
    question: &Question,
    grading: Option<&Grading>,
) -> Markup {
    let block_id = utils::quiz_block_id(chapter_id, question_idx);
    let answered = grading.is_some();
    let container_class = if answered {
        "quiz-container answered"
    } else {
        "quiz-container"
    };

    html! {
        div class=(container_class) id=(block_id) {
            p."quiz-question" { (question_idx + 1) ". " (question.prompt) }

            @if let Some(scenario) = &question.scenario {
                div."quiz-scenario" {
                    p { em { (scenario) } }
                }
            }

            form hx-post=(names::submit_answer_url(chapter_id, question_idx))
                 hx-trigger="change"
                 hx-target=(format!("#{block_id}"))
                 hx-swap="outerHTML" {
                div."quiz-options" {
                    @for (i, option) in question.options.iter().enumerate() {
                        label class=(option_class(i, grading)) {
                            input type="radio"
                                  name="option"
                                  value=(i)
                                  checked[grading.is_some_and(|g| g.selected == i)]
                                  disabled[answered];
                            span { (option.text) }
                        }
                    }
                }
            }

            (feedback_region(grading))
        }
    }
}

fn option_class(idx: usize, grading: Option<&Grading>) -> &'static str {
    let Some(grading) = grading else {
        return "quiz-option";
    };
    if grading.selected == idx {
        if grading.is_correct() {
            "quiz-option correct"
        } else {
            "quiz-option incorrect"
        }
    } else if grading.reveal == Some(idx) {
        "quiz-option correct"
    } else {
        "quiz-option"
    }
}

fn feedback_region(grading: Option<&Grading>) -> Markup {
    match grading {
        None => html! {
            div."quiz-feedback" aria-live="polite" role="status" {}
        },
        Some(grading) => {
            let class = if grading.is_correct() {
                "quiz-feedback show success"
            } else {
                "quiz-feedback show error"
            };
            let line_class = if grading.is_correct() {
                "feedback-correct"
            } else {
                "feedback-incorrect"
            };
            html! {
                div class=(class) aria-live="polite" role="status" {
                    p class=(line_class) { (grading.feedback) }
                }
            }
        }
    }
}
