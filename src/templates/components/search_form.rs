use crate::constants::{AMENITIES, CITIES, MAX_ROOM_OPTION};
use crate::domain::format::rooms_label;
use crate::domain::{ListingStatus, PropertyType, SearchCriteria};
use maud::{html, Markup};

/// The hero search form. Submits a GET to `/search` with the current
/// criteria echoed back as the selected values.
pub fn search_form(criteria: &SearchCriteria, show_advanced: bool) -> Markup {
    let status = criteria.status.unwrap_or(ListingStatus::ForSale);

    html! {
        div class="search-panel" {
            form method="get" action="/search" class="search-form" {
                div class="grid grid-3" {
                    div {
                        label for="type" { "Property Type" }
                        select id="type" name="type" {
                            option value="" selected[criteria.property_type.is_none()] { "All Types" }
                            @for t in PropertyType::ALL {
                                option value=(t.as_str()) selected[criteria.property_type == Some(t)] { (t.label()) }
                            }
                        }
                    }

                    div {
                        label for="city" { "Location" }
                        select id="city" name="city" {
                            option value="" selected[criteria.city.is_none()] { "All Locations" }
                            @for city in CITIES {
                                option value=(city) selected[criteria.city.as_deref() == Some(*city)] { (city) }
                            }
                        }
                    }

                    div {
                        label for="status" { "Status" }
                        select id="status" name="status" {
                            @for s in ListingStatus::ALL {
                                option value=(s.as_str()) selected[status == s] { (s.label()) }
                            }
                        }
                    }
                }

                details class="advanced-search" open[show_advanced] {
                    summary { "Advanced Search" }

                    div class="grid grid-4" {
                        (rooms_select("bedrooms", "Bedrooms", criteria.min_bedrooms))
                        (rooms_select("bathrooms", "Bathrooms", criteria.min_bathrooms))

                        div {
                            label for="min_price" { "Min Price" }
                            input type="number" id="min_price" name="min_price" placeholder="Min Price"
                                min="0" value=[criteria.min_price];
                        }
                        div {
                            label for="max_price" { "Max Price" }
                            input type="number" id="max_price" name="max_price" placeholder="Max Price"
                                min="0" value=[criteria.max_price];
                        }
                    }

                    fieldset class="amenities" {
                        legend { "Amenities" }
                        div class="grid grid-4" {
                            @for amenity in AMENITIES {
                                label class="checkbox" {
                                    input type="checkbox" name="amenities" value=(amenity)
                                        checked[criteria.has_amenity(amenity)];
                                    span { (amenity) }
                                }
                            }
                        }
                    }
                }

                div class="form-actions" {
                    a class="btn btn-outline" href="/" { "Reset" }
                    button type="submit" class="btn" { "Search Now" }
                }
            }
        }
    }
}

fn rooms_select(name: &str, label: &str, current: Option<u32>) -> Markup {
    html! {
        div {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                option value="" selected[current.is_none()] { "Any" }
                @for n in 1..=MAX_ROOM_OPTION {
                    option value=(n) selected[current == Some(n)] { (rooms_label(n)) }
                }
            }
        }
    }
}
