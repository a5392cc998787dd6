use crate::domain::Listing;
use crate::templates::components::property_card;
use maud::{html, Markup};

/// Card grid, or the "no results" block when `listings` is empty.
pub fn property_grid<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Markup {
    let mut listings = listings.into_iter().peekable();

    html! {
        @if listings.peek().is_none() {
            div class="empty-state" {
                div class="empty-state-title" { "No properties found" }
                p { "Try adjusting your search criteria" }
            }
        } @else {
            div class="grid grid-3" {
                @for listing in listings {
                    (property_card(listing))
                }
            }
        }
    }
}
