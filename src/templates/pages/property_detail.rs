use crate::constants::{AVATAR_PLACEHOLDER_IMAGE, PROPERTY_PLACEHOLDER_IMAGE};
use crate::domain::format::{format_area, format_date, format_price};
use crate::domain::{Agent, Listing};
use crate::templates::components::image_or;
use crate::templates::{badge, desktop_layout};
use maud::{html, Markup};

pub fn property_detail_page(listing: &Listing, agent: Option<&Agent>) -> Markup {
    desktop_layout(
        &listing.title,
        html! {
            section class="section" {
                div class="container" {
                    div class="gallery" {
                        @if listing.images.is_empty() {
                            img src=(PROPERTY_PLACEHOLDER_IMAGE) alt=(listing.title);
                        }
                        @for src in &listing.images {
                            img src=(src) alt=(listing.title) loading="lazy";
                        }
                    }

                    div class="detail-header" {
                        div {
                            h1 { (listing.title) }
                            p class="muted" {
                                (listing.location.address) ", " (listing.location.city) ", "
                                (listing.location.state) " " (listing.location.zip_code)
                            }
                        }
                        div {
                            p class="price" { (format_price(listing.price)) }
                            (badge(listing.status.label(), "primary"))
                        }
                    }

                    dl class="facts" {
                        dt { "Type" } dd { (listing.property_type.label()) }
                        dt { "Bedrooms" } dd { (listing.bedrooms) }
                        dt { "Bathrooms" } dd { (listing.bathrooms) }
                        dt { "Area" } dd { (format_area(listing.area)) }
                        dt { "Listed" } dd { (format_date(&listing.created_at)) }
                        dt { "Updated" } dd { (format_date(&listing.updated_at)) }
                        dt { "Map" } dd {
                            a href=(map_link(listing)) target="_blank" rel="noopener" { "Open in maps" }
                        }
                    }

                    p { (listing.description) }

                    @if !listing.amenities.is_empty() {
                        h2 { "Amenities" }
                        ul class="amenity-list" {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }
                    }

                    @if let Some(agent) = agent {
                        aside class="card agent-card" {
                            img class="avatar"
                                src=(image_or(&agent.avatar, AVATAR_PLACEHOLDER_IMAGE))
                                alt=(agent.full_name());
                            div class="card-body" {
                                h3 { (agent.full_name()) }
                                p class="muted" { (agent.experience) " years experience" }
                                @if !agent.bio.is_empty() {
                                    p { (agent.bio) }
                                }
                                @if !agent.specialties.is_empty() {
                                    p class="muted" { (agent.specialties.join(", ")) }
                                }
                                p { a href=(format!("mailto:{}", agent.email)) { (agent.email) } }
                                p { (agent.phone) }
                            }
                        }
                    }

                    p { a href="/properties" { "← Back to all properties" } }
                }
            }
        },
    )
}

fn map_link(listing: &Listing) -> String {
    let c = listing.location.coordinates;
    format!("https://www.openstreetmap.org/?mlat={}&mlon={}#map=16/{}/{}", c.lat, c.lng, c.lat, c.lng)
}
