use maud::{html, Markup};

use crate::engine::Grading;
use crate::models::Chapter;
use crate::views::{components, quiz as quiz_views};
use crate::names;

pub struct ChapterCard<'a> {
    pub chapter: &'a Chapter,
    pub completed: bool,
}

pub fn home(cards: &[ChapterCard], completed: usize) -> Markup {
    html! {
        section."home-hero" {
            h1 { "World Regional Geography" }
            p {
                "Work through the regions of the world one chapter at a time. "
                "Each chapter ends with a short quiz; mark it complete when you are done."
            }
        }
        (progress_summary(completed, cards.len()))
        section."chapter-list" {
            @for card in cards {
                article."chapter-card" {
                    h3 {
                        (components::nav_link(
                            &names::chapter_url(&card.chapter.id),
                            html! { (card.chapter.title) },
                        ))
                        @if card.completed {
                            " "
                            span."completion-badge" aria-label="Chapter complete" { "\u{2713}" }
                        }
                    }
                    p { (card.chapter.intro) }
                }
            }
        }
    }
}

pub fn progress_summary(completed: usize, total: usize) -> Markup {
    html! {
        div."progress-summary" id="progress-summary" {
            p role="status" {
                strong { (completed) }
                " of "
                (total)
                " chapters complete"
            }
            @if completed > 0 {
                button."outline"
                       hx-post=(names::RESET_PROGRESS_URL)
                       hx-target="#progress-summary"
                       hx-swap="outerHTML"
                       hx-confirm="Reset all chapter progress?" {
                    "Reset progress"
                }
            }
        }
    }
}

pub struct ChapterPageData<'a> {
    pub chapter: &'a Chapter,
    pub completed: bool,
    pub gradings: Vec<Option<Grading>>,
    pub prev: Option<&'a Chapter>,
    pub next: Option<&'a Chapter>,
}

pub fn chapter(data: ChapterPageData) -> Markup {
    let ch = data.chapter;
    html! {
        article."chapter" {
            h1 { (ch.title) }
            p."chapter-intro" { (ch.intro) }

            @if !ch.key_terms.is_empty() {
                section."key-terms" {
                    h2 { "Key terms" }
                    dl {
                        @for term in &ch.key_terms {
                            (components::key_term(term))
                        }
                    }
                }
            }

            @for (idx, section) in ch.sections.iter().enumerate() {
                (components::accordion(idx, section))
            }

            @for (idx, connection) in ch.connections.iter().enumerate() {
                (components::connection_toggle(idx, connection))
            }

            @if !ch.flip_cards.is_empty() {
                section."flip-cards" {
                    h2 { "Flash review" }
                    div."flip-card-grid" {
                        @for card in &ch.flip_cards {
                            (components::flip_card(card))
                        }
                    }
                }
            }

            @if !ch.quiz.is_empty() {
                (quiz_views::quiz(&ch.id, &ch.quiz, &data.gradings))
            }

            (completion_control(&ch.id, data.completed))

            nav."chapter-nav" aria-label="Chapter navigation" {
                @if let Some(prev) = data.prev {
                    (components::nav_link(
                        &names::chapter_url(&prev.id),
                        html! { "\u{2190} " (prev.title) },
                    ))
                }
                (components::nav_link(names::HOME_URL, html! { "All chapters" }))
                @if let Some(next) = data.next {
                    (components::nav_link(
                        &names::chapter_url(&next.id),
                        html! { (next.title) " \u{2192}" },
                    ))
                }
            }
        }
    }
}

pub fn completion_control(chapter_id: &str, completed: bool) -> Markup {
    if completed {
        html! {
            p."chapter-complete-badge" role="status" {
                span."completion-badge" { "\u{2713}" }
                " Chapter complete"
            }
        }
    } else {
        html! {
            button."mark-complete"
                   hx-post=(names::chapter_complete_url(chapter_id))
                   hx-swap="outerHTML" {
                "Mark chapter complete"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::ChapterSet;

    fn set() -> ChapterSet {
        let chapters = serde_json::from_str(
            r#"[{"id": "na", "title": "North & Middle America", "intro": "Start here"},
                {"id": "eu", "title": "Europe", "intro": "Second stop"}]"#,
        )
        .expect("fixture should deserialize");
        ChapterSet::from_chapters(chapters).expect("fixture should validate")
    }

    #[test]
    fn home_escapes_titles_and_counts_completion() {
        let set = set();
        let cards: Vec<ChapterCard> = set
            .iter()
            .map(|chapter| ChapterCard {
                chapter,
                completed: chapter.id == "na",
            })
            .collect();
        let markup = home(&cards, 1).into_string();

        assert!(markup.contains("North &amp; Middle America"));
        assert!(markup.contains("<strong>1</strong>"));
        assert!(markup.contains("of 2 chapters complete"));
        assert!(markup.contains("completion-badge"));
    }

    #[test]
    fn reset_button_only_shows_once_something_is_complete() {
        assert!(!progress_summary(0, 2).into_string().contains("Reset progress"));
        assert!(progress_summary(1, 2).into_string().contains("Reset progress"));
    }

    #[test]
    fn chapter_without_quiz_renders_no_quiz_section() {
        let set = set();
        let (prev, next) = set.neighbours("eu");
        let markup = chapter(ChapterPageData {
            chapter: set.get("eu").expect("chapter should exist"),
            completed: false,
            gradings: Vec::new(),
            prev,
            next,
        })
        .into_string();

        assert!(!markup.contains("chapter-quiz"));
        assert!(markup.contains("Mark chapter complete"));
        assert!(markup.contains("North &amp; Middle America"));
        assert!(next.is_none());
    }
}
