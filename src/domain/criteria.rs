// src/domain/criteria.rs

use crate::domain::listing::{truncate_amount, ListingStatus, PropertyType};

/// User-supplied search constraints. Every field is independent; `None`
/// means the attribute is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub property_type: Option<PropertyType>,
    pub status: Option<ListingStatus>,
    pub city: Option<String>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_area: Option<i64>,
    pub max_area: Option<i64>,
    /// Carried through to the form but not applied by the filter.
    pub amenities: Vec<String>,
}

impl SearchCriteria {
    /// Builds criteria from decoded query-string pairs.
    ///
    /// Numbers keep only their whole part (`1500.5` reads as `1500`). Empty,
    /// unparsable and zero values are all treated as absent, the same way the
    /// search form leaves a select on "Any". Unknown keys are ignored.
    /// `amenities` may repeat.
    pub fn from_params(params: &[(String, String)]) -> Self {
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim())
                .filter(|v| !v.is_empty())
        };

        let amount = |key: &str| {
            get(key)
                .and_then(|v| v.parse::<f64>().ok())
                .and_then(truncate_amount)
                .filter(|n| *n != 0)
        };
        let rooms = |key: &str| amount(key).and_then(|n| u32::try_from(n).ok());

        let mut amenities: Vec<String> = Vec::new();
        for (k, v) in params {
            let v = v.trim();
            if k == "amenities" && !v.is_empty() && !amenities.iter().any(|a| a == v) {
                amenities.push(v.to_string());
            }
        }

        SearchCriteria {
            property_type: get("type").and_then(|v| v.parse().ok()),
            status: get("status").and_then(|v| v.parse().ok()),
            city: get("city").map(str::to_string),
            min_bedrooms: rooms("bedrooms"),
            min_bathrooms: rooms("bathrooms"),
            min_price: amount("min_price"),
            max_price: amount("max_price"),
            min_area: amount("min_area"),
            max_area: amount("max_area"),
            amenities,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchCriteria::default()
    }

    /// True when any field that lives in the collapsible part of the form is set.
    pub fn uses_advanced_fields(&self) -> bool {
        self.min_bedrooms.is_some()
            || self.min_bathrooms.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_area.is_some()
            || self.max_area.is_some()
            || !self.amenities.is_empty()
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_is_unconstrained() {
        let c = SearchCriteria::from_params(&[]);
        assert!(c.is_empty());
        assert!(!c.uses_advanced_fields());
    }

    #[test]
    fn reads_every_field() {
        let c = SearchCriteria::from_params(&params(&[
            ("type", "condo"),
            ("status", "for-rent"),
            ("city", "Boston"),
            ("bedrooms", "2"),
            ("bathrooms", "1"),
            ("min_price", "1000"),
            ("max_price", "5000"),
            ("min_area", "500"),
            ("max_area", "1500"),
            ("amenities", "Alarm"),
            ("amenities", "WiFi"),
        ]));

        assert_eq!(c.property_type, Some(PropertyType::Condo));
        assert_eq!(c.status, Some(ListingStatus::ForRent));
        assert_eq!(c.city.as_deref(), Some("Boston"));
        assert_eq!(c.min_bedrooms, Some(2));
        assert_eq!(c.min_bathrooms, Some(1));
        assert_eq!(c.min_price, Some(1000));
        assert_eq!(c.max_price, Some(5000));
        assert_eq!(c.min_area, Some(500));
        assert_eq!(c.max_area, Some(1500));
        assert_eq!(c.amenities, vec!["Alarm", "WiFi"]);
        assert!(c.uses_advanced_fields());
        assert!(c.has_amenity("WiFi"));
    }

    #[test]
    fn blank_zero_and_garbage_values_are_absent() {
        let c = SearchCriteria::from_params(&params(&[
            ("type", ""),
            ("status", "sold"),
            ("city", "   "),
            ("bedrooms", "0"),
            ("bathrooms", "many"),
            ("min_price", "0"),
            ("max_price", "12k"),
            ("amenities", ""),
        ]));
        assert!(c.is_empty());
    }

    #[test]
    fn fractional_numbers_keep_whole_part() {
        let c = SearchCriteria::from_params(&params(&[
            ("min_price", "1500.5"),
            ("max_area", "999.9"),
            ("bedrooms", "2.7"),
            ("bathrooms", "0.5"),
        ]));
        assert_eq!(c.min_price, Some(1500));
        assert_eq!(c.max_area, Some(999));
        assert_eq!(c.min_bedrooms, Some(2));
        assert_eq!(c.min_bathrooms, None);
    }

    #[test]
    fn negative_bounds_are_kept_as_given() {
        let c = SearchCriteria::from_params(&params(&[("max_price", "-5")]));
        assert_eq!(c.max_price, Some(-5));

        let c = SearchCriteria::from_params(&params(&[("bedrooms", "-2")]));
        assert_eq!(c.min_bedrooms, None);
    }

    #[test]
    fn duplicate_amenities_collapse() {
        let c = SearchCriteria::from_params(&params(&[
            ("amenities", "Gym"),
            ("amenities", "Gym"),
        ]));
        assert_eq!(c.amenities, vec!["Gym"]);
    }
}
