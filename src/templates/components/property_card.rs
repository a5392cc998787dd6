use crate::constants::PROPERTY_PLACEHOLDER_IMAGE;
use crate::domain::format::{format_area, format_price};
use crate::domain::{Listing, ListingStatus};
use crate::templates::components::badge;
use maud::{html, Markup};

pub fn property_card(listing: &Listing) -> Markup {
    let status_variant = match listing.status {
        ListingStatus::ForSale => "success",
        ListingStatus::ForRent => "warning",
    };

    html! {
        article class="card property-card" {
            div class="property-card-media" {
                img
                    src=(listing.cover_image().unwrap_or(PROPERTY_PLACEHOLDER_IMAGE))
                    alt=(listing.title)
                    loading="lazy";
                @if listing.featured {
                    div class="corner-left" { (badge("Featured", "primary")) }
                }
                div class="corner-right" { (badge(listing.status.label(), status_variant)) }
            }
            div class="card-body" {
                div class="property-card-title" {
                    h3 { (listing.title) }
                    span class="price" { (format_price(listing.price)) }
                }
                p class="muted clamp-2" { (listing.description) }
                div class="property-card-facts" {
                    span { (listing.bedrooms) " Bed" }
                    span { (listing.bathrooms) " Bath" }
                    span { (format_area(listing.area)) }
                    span class="tag" { (listing.property_type.label()) }
                }
                div class="property-card-footer" {
                    span class="muted" { (listing.location.city) ", " (listing.location.state) }
                    a href=(format!("/properties/{}", listing.id)) { "View Details →" }
                }
            }
        }
    }
}
