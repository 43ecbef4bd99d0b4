use maud::{html, Markup, DOCTYPE};

use crate::utils;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header."site-header" role="banner" {
            nav."main-nav" aria-label="Main navigation" {
                ul {
                    li {
                        a href="/" {
                            strong { "World Regional Geography" }
                        }
                    }
                }
                ul {
                    li."muted" { (utils::VERSION) }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer."site-footer" role="contentinfo" {
            small { "An open course companion. Progress stays on this device." }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main id="main-content" { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - World Regional Geography")) }
        }

        body."container" {
            a."skip-link" href="#main-content" { "Skip to main content" }
            (header())
            (main(body))
            (footer())
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - World Regional Geography" }
        (body)
    }
}

/// Full page for direct navigation, titled fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
