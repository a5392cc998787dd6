use maud::{html, Markup};

pub mod property_card;
pub mod property_grid;
pub mod search_form;

pub use property_card::property_card;
pub use property_grid::property_grid;
pub use search_form::search_form;

pub fn button_link(label: &str, href: &str) -> Markup {
    html! {
        a class="btn" href=(href) { (label) }
    }
}

/// `variant` is one of primary, success, warning.
pub fn badge(label: &str, variant: &str) -> Markup {
    html! {
        span class={ "badge badge-" (variant) } { (label) }
    }
}

pub fn section_heading(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="section-heading" {
            h2 { (title) }
            p { (subtitle) }
        }
    }
}

/// `src`, or `fallback` when the record carries no image.
pub fn image_or<'a>(src: &'a str, fallback: &'a str) -> &'a str {
    if src.trim().is_empty() {
        fallback
    } else {
        src
    }
}
