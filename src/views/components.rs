//! Interactive widgets for chapter pages: accordions, regional-connection
//! toggles, flip cards and key-term tooltips. All of them are plain
//! markup driven by `details`/`summary` or CSS, so chapters stay usable
//! with scripting disabled.

use maud::{html, Markup};

use crate::models::{Connection, FlipCard, KeyTerm, Section};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn accordion(idx: usize, section: &Section) -> Markup {
    let content_id = format!("accordion-content-{}", idx + 1);
    html! {
        details."accordion-item" open[idx == 0] {
            summary."accordion-header" aria-controls=(content_id) {
                (section.heading)
            }
            div."accordion-content" id=(content_id) role="region" {
                p { (section.body) }
            }
        }
    }
}

/// Collapsed aside linking the region back to the learner's home region.
pub fn connection_toggle(idx: usize, connection: &Connection) -> Markup {
    let content_id = format!("regional-connection-{}", idx + 1);
    html! {
        details."regional-connection" {
            summary."btn-connection-toggle" aria-controls=(content_id) {
                (connection.title)
            }
            div."connection-content" id=(content_id) role="region" {
                p { (connection.body) }
            }
        }
    }
}

/// Two-sided card flipped by its (visually hidden) checkbox, so keyboard
/// toggling works without script.
pub fn flip_card(card: &FlipCard) -> Markup {
    html! {
        label."flip-card" {
            input type="checkbox" class="flip-card-state";
            span."flip-card-front" { (card.front) }
            span."flip-card-back" { (card.back) }
        }
    }
}

pub fn key_term(term: &KeyTerm) -> Markup {
    html! {
        dt."term-highlight" tabindex="0" { (term.term) }
        dd."term-tooltip" role="definition" { (term.definition) }
    }
}
