//! Weighted candidate pool construction.
//!
//! Partitions the inventory into untasted and tasted subsets and
//! annotates each bottle with its selection weight:
//!
//! ```text
//! weight = category_weight(bottle) * (2.0 if untasted else 1.0)
//! ```
//!
//! The untasted multiplier is a fixed design constant: new bottles
//! should dominate the schedule surface area.

use crate::models::{Bottle, Preferences};

/// Weight multiplier applied to untasted bottles.
pub const UNTASTED_WEIGHT_FACTOR: f64 = 2.0;

/// A bottle under consideration for a schedule slot.
///
/// Ephemeral: created per generation call and discarded with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Snapshot of the inventory bottle.
    pub bottle: Bottle,
    /// Selection weight (positive).
    pub weight: f64,
    /// Whether scheduling this bottle would be a repeat tasting.
    pub is_repeat: bool,
}

impl Candidate {
    /// Normalized category key of the wrapped bottle.
    pub fn category_key(&self) -> String {
        self.bottle.category_key()
    }
}

/// Builds the weighted candidate pool from the inventory.
///
/// Untasted bottles come first, then tasted, each subset preserving
/// inventory order. An empty inventory yields an empty pool; the caller
/// treats that as "no schedule can be generated".
pub fn build_pool(bottles: &[Bottle], preferences: &Preferences) -> Vec<Candidate> {
    let mut pool = Vec::with_capacity(bottles.len());

    for bottle in bottles.iter().filter(|b| !b.tasted) {
        pool.push(make_candidate(bottle, preferences));
    }
    for bottle in bottles.iter().filter(|b| b.tasted) {
        pool.push(make_candidate(bottle, preferences));
    }

    pool
}

fn make_candidate(bottle: &Bottle, preferences: &Preferences) -> Candidate {
    let base = preferences.category_weight(&bottle.category_key());
    let multiplier = if bottle.tasted {
        1.0
    } else {
        UNTASTED_WEIGHT_FACTOR
    };
    Candidate {
        bottle: bottle.clone(),
        weight: base * multiplier,
        is_repeat: bottle.tasted,
    }
}
