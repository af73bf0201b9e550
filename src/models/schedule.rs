//! Schedule (output) model.
//!
//! A schedule is the ordered sequence of dated tasting assignments the
//! generator produces, plus summary accessors for reporting.
//!
//! # Invariants
//! - Period indices are exactly `1..=entries.len()`, no gaps.
//! - Entry dates are non-decreasing.
//! - `total_periods == entries.len()`.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled tasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period index.
    pub period: usize,
    /// Resolved calendar date.
    pub date: NaiveDate,
    /// Assigned bottle ID.
    pub bottle_id: String,
    /// Assigned bottle name.
    pub bottle_name: String,
    /// Normalized bottle category.
    pub category: String,
    /// Alcohol by volume, if known.
    pub abv: Option<f64>,
    /// Whether the bottle had already been tasted when scheduled.
    pub is_repeat: bool,
}

/// A complete tasting schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Ordered tasting assignments.
    pub entries: Vec<ScheduleEntry>,
    /// When this schedule was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of scheduled periods (== `entries.len()`).
    pub total_periods: usize,
}

impl Schedule {
    /// Creates a schedule from ordered entries, stamping the generation time.
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        let total_periods = entries.len();
        Self {
            entries,
            generated_at: Utc::now(),
            total_periods,
        }
    }

    /// Creates an empty schedule.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Date of the first tasting.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    /// Date of the last tasting.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }

    /// Number of first-time tastings.
    pub fn new_tasting_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_repeat).count()
    }

    /// Number of repeat tastings.
    pub fn repeat_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_repeat).count()
    }

    /// Entry counts per category.
    pub fn category_breakdown(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// All entries assigned to a given bottle.
    pub fn entries_for_bottle(&self, bottle_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.bottle_id == bottle_id)
            .collect()
    }
}
