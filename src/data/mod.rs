// Static area catalog
mod areas;

use std::path::Path;

use thiserror::Error;

use crate::models::{Area, Category};

/// Errors that can occur while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate area name: {0}")]
    DuplicateName(String),

    #[error("area {area}: {category:?} score {value} is outside 1-{max}")]
    ScoreOutOfRange {
        area: String,
        category: Category,
        value: u8,
        max: u8,
    },
}

/// Read-only, ordered collection of candidate areas.
///
/// Loaded once at startup and shared across every engine invocation; the
/// engine itself only sees the slice, so tests can hand it arbitrary
/// synthetic catalogs.
#[derive(Debug, Clone)]
pub struct AreaCatalog {
    areas: Vec<Area>,
}

impl AreaCatalog {
    /// The built-in 20-area catalog.
    pub fn builtin() -> Self {
        // The embedded table is trusted; validation guards file-loaded data.
        Self {
            areas: areas::builtin_areas(),
        }
    }

    /// Load a catalog from a JSON file (an array of areas).
    pub fn from_json_file<P: AsRef<Path>>(path: P, scale_max: u8) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let areas: Vec<Area> = serde_json::from_str(&raw)?;
        Self::from_areas(areas, scale_max)
    }

    /// Build a catalog from in-memory areas, validating names and scores.
    pub fn from_areas(areas: Vec<Area>, scale_max: u8) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for area in &areas {
            if !seen.insert(area.name.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateName(area.name.clone()));
            }
            for category in Category::ALL {
                let value = area.scores.get(category);
                if value < 1 || value > scale_max {
                    return Err(CatalogError::ScoreOutOfRange {
                        area: area.name.clone(),
                        category,
                        value,
                        max: scale_max,
                    });
                }
            }
        }
        Ok(Self { areas })
    }

    /// Areas in catalog order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Case-insensitive lookup by area name.
    pub fn by_name(&self, name: &str) -> Option<&Area> {
        self.areas
            .iter()
            .find(|area| area.name.eq_ignore_ascii_case(name))
    }
}
