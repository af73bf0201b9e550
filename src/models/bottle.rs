//! Bottle (inventory item) model.
//!
//! A bottle is the unit the scheduler assigns to tasting slots. The
//! inventory store owns these records; the scheduler reads them and
//! never writes back.

use serde::{Deserialize, Serialize};

/// Category assigned to bottles without one.
pub const DEFAULT_CATEGORY: &str = "other";

/// A bottle in the collection.
///
/// `category` is free-form; grouping and weight lookups go through
/// [`Bottle::category_key`], which normalizes case and empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bottle {
    /// Unique bottle identifier within the inventory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Spirit category (e.g., "bourbon", "scotch"). May be empty.
    #[serde(default)]
    pub category: String,
    /// Whether this bottle has already been tasted.
    #[serde(default)]
    pub tasted: bool,
    /// Alcohol by volume, percent. `None` = unknown.
    #[serde(default)]
    pub abv: Option<f64>,
}

impl Bottle {
    /// Creates a new untasted bottle with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category: String::new(),
            tasted: false,
            abv: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the ABV.
    pub fn with_abv(mut self, abv: f64) -> Self {
        self.abv = Some(abv);
        self
    }

    /// Marks the bottle as tasted (or not).
    pub fn tasted(mut self, tasted: bool) -> Self {
        self.tasted = tasted;
        self
    }

    /// Normalized category for grouping and weight lookups.
    ///
    /// Lowercased; empty categories map to [`DEFAULT_CATEGORY`].
    pub fn category_key(&self) -> String {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }
}
