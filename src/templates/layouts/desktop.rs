use crate::constants::{FOOTER_COMPANY, FOOTER_NAVIGATION, FOOTER_SUPPORT, NAVIGATION, SITE_NAME};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            @for (label, href) in NAVIGATION {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                }
                main { (content) }
                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="grid grid-4" {
                div {
                    span class="brand" { (SITE_NAME) }
                    p { "Homes to buy and rent in the cities people actually want to live in." }
                    p { "95 South Park Avenue, USA" }
                    p { "+456 875 369 208" }
                }
                (link_column("Navigation", FOOTER_NAVIGATION))
                (link_column("Company", FOOTER_COMPANY))
                (link_column("Support", FOOTER_SUPPORT))
            }
        }
    }
}

fn link_column(heading: &str, links: &[(&str, &str)]) -> Markup {
    html! {
        div {
            h3 { (heading) }
            ul {
                @for (label, href) in links {
                    li { a href=(href) { (label) } }
                }
            }
        }
    }
}
