// src/domain/listing.rs

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

// listing
//  ├── id, title, description
//  ├── type            (house | apartment | condo | villa)
//  ├── status          (for-sale | for-rent)
//  ├── price, bedrooms, bathrooms, area
//  ├── location
//  │    ├── address, city, state, zipCode
//  │    └── coordinates { lat, lng }
//  ├── images, amenities
//  └── agentId, featured, createdAt, updatedAt

/// A single property record from the catalog. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "whole_amount")]
    pub price: i64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet.
    #[serde(deserialize_with = "whole_amount")]
    pub area: i64,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub agent_id: String,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Villa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    ForSale,
    ForRent,
}

#[derive(Debug, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Villa,
    ];

    /// Wire value, as used in catalog files and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Villa => "villa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "Family House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Villa => "Villa",
        }
    }
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 2] = [ListingStatus::ForSale, ListingStatus::ForRent];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::ForRent => "for-rent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "property type",
                value: s.to_string(),
            })
    }
}

impl FromStr for ListingStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "listing status",
                value: s.to_string(),
            })
    }
}

/// Drops the fractional part of a number, like `parseInt` on the form side.
/// Non-finite input has no whole part.
pub fn truncate_amount(n: f64) -> Option<i64> {
    n.is_finite().then(|| n.trunc() as i64)
}

/// Catalog files may carry fractional prices and areas; only the whole part is kept.
pub(crate) fn whole_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    truncate_amount(n).ok_or_else(|| de::Error::custom(format!("not a finite number: {n}")))
}

impl Listing {
    /// First photo, if the listing has any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
