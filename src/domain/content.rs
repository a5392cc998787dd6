// src/domain/content.rs
// Records behind the static home page sections. Rendered only, never filtered.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::listing::whole_amount;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Years in the business.
    pub experience: u32,
    pub rating: f32,
    pub properties_count: u32,
    #[serde(default)]
    pub social_media: SocialMedia,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl Agent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: Author,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    /// Minutes.
    pub read_time: u32,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub shares: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A city shown in the "Popular Places" section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularLocation {
    pub id: String,
    pub name: String,
    pub state: String,
    pub properties_count: u32,
    #[serde(deserialize_with = "whole_amount")]
    pub average_price: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}
