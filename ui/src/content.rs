//! Static site content: catalog, highlights, perks and maker bios.
//!
//! The document is embedded at compile time (`content/site.json`) and parsed once on
//! first access through [`SITE`]. Lists render in document order and are never mutated.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::core::config::SiteConfig;

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/site.json"));

/// Parsed embedded content. A broken document is a build defect caught by the tests below.
pub static SITE: Lazy<SiteContent> = Lazy::new(|| {
    SiteContent::from_json(EMBEDDED).expect("embedded content/site.json is valid")
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureHighlight {
    pub image: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Perk {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Maker {
    pub name: String,
    pub photo: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub config: SiteConfig,
    pub products: Vec<Product>,
    pub highlights: Vec<FeatureHighlight>,
    pub perks: Vec<Perk>,
    pub makers: Vec<Maker>,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content has no {0}")]
    Empty(&'static str),
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.check_non_empty()?;
        Ok(content)
    }

    fn check_non_empty(&self) -> Result<(), ContentError> {
        let lists = [
            ("products", self.products.is_empty()),
            ("highlights", self.highlights.is_empty()),
            ("perks", self.perks.is_empty()),
            ("makers", self.makers.is_empty()),
        ];
        match lists.into_iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(ContentError::Empty(name)),
            None => Ok(()),
        }
    }
}
