//! Curated city gallery data
//!
//! Loads the hand-picked city list shown on the landing page from a JSON
//! file so copy changes don't require a rebuild of the binary.

use crate::models::City;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Ordered catalog of featured cities. Order reflects display priority.
#[derive(Debug)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl CityCatalog {
    /// Load the catalog from a JSON array file (usually `data/cities.json`).
    pub fn from_file(path: &Path) -> Result<Self> {
        let cities: Vec<City> = serde_json::from_str(&fs::read_to_string(path)?)?;
        Self::new(cities)
    }

    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(Error::Generic("City catalog is empty".to_string()));
        }
        Ok(Self { cities })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn find(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }
}
