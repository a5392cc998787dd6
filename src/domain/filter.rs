// src/domain/filter.rs

use crate::domain::criteria::SearchCriteria;
use crate::domain::listing::Listing;

/// Returns the listings that satisfy every constraint present in `criteria`,
/// in their original order. The input is left untouched.
///
/// Bounds are inclusive. `amenities` is accepted on the criteria but is not
/// applied here; callers that need amenity matching must filter further.
pub fn filter_listings(listings: &[Listing], criteria: &SearchCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .cloned()
        .collect()
}

/// Whether a single listing passes every supplied constraint.
pub fn matches(listing: &Listing, criteria: &SearchCriteria) -> bool {
    if let Some(property_type) = criteria.property_type {
        if listing.property_type != property_type {
            return false;
        }
    }
    if let Some(status) = criteria.status {
        if listing.status != status {
            return false;
        }
    }
    if let Some(city) = &criteria.city {
        if listing.location.city != *city {
            return false;
        }
    }

    at_least(listing.bedrooms, criteria.min_bedrooms)
        && at_least(listing.bathrooms, criteria.min_bathrooms)
        && within(listing.price, criteria.min_price, criteria.max_price)
        && within(listing.area, criteria.min_area, criteria.max_area)
}

fn at_least(value: u32, min: Option<u32>) -> bool {
    min.map_or(true, |min| value >= min)
}

fn within(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}
