use crate::domain::Listing;
use crate::templates::components::property_grid;
use crate::templates::{button_link, desktop_layout, section_heading};
use maud::{html, Markup};

pub fn properties_page(listings: &[Listing]) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            section class="section" {
                div class="container" {
                    (section_heading("All Properties", "Every home currently on our books"))
                    p class="result-count" { strong { (listings.len()) } " listings" }
                    (property_grid(listings))
                    div class="center" {
                        (button_link("Search Properties", "/#properties"))
                    }
                }
            }
        },
    )
}
