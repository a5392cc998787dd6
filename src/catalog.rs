// src/catalog.rs

use crate::domain::{Agent, BlogPost, Listing, PopularLocation};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROPERTIES_FILE: &str = "properties.json";
pub const AGENTS_FILE: &str = "agents.json";
pub const BLOG_FILE: &str = "blog.json";
pub const LOCATIONS_FILE: &str = "locations.json";

const BUILTIN_PROPERTIES: &str = include_str!("../data/properties.json");
const BUILTIN_AGENTS: &str = include_str!("../data/agents.json");
const BUILTIN_BLOG: &str = include_str!("../data/blog.json");
const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Every record the site renders, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    agents: Vec<Agent>,
    posts: Vec<BlogPost>,
    locations: Vec<PopularLocation>,
}

impl Catalog {
    pub fn new(
        listings: Vec<Listing>,
        agents: Vec<Agent>,
        posts: Vec<BlogPost>,
        locations: Vec<PopularLocation>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("listing", listings.iter().map(|l| l.id.as_str()))?;
        ensure_unique("agent", agents.iter().map(|a| a.id.as_str()))?;

        Ok(Self {
            listings,
            agents,
            posts,
            locations,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            parse(PROPERTIES_FILE, BUILTIN_PROPERTIES)?,
            parse(AGENTS_FILE, BUILTIN_AGENTS)?,
            parse(BLOG_FILE, BUILTIN_BLOG)?,
            parse(LOCATIONS_FILE, BUILTIN_LOCATIONS)?,
        )
    }

    /// Reads the four catalog files from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();

        Self::new(
            read(dir, PROPERTIES_FILE)?,
            read(dir, AGENTS_FILE)?,
            read(dir, BLOG_FILE)?,
            read(dir, LOCATIONS_FILE)?,
        )
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn featured_locations(&self) -> impl Iterator<Item = &PopularLocation> {
        self.locations.iter().filter(|l| l.featured)
    }
}

fn read<T: DeserializeOwned>(dir: &Path, file: &'static str) -> Result<Vec<T>, CatalogError> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })?;
    parse(file, &raw)
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Json { file, source })
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
