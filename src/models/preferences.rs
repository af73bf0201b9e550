//! User preference models and resolution.
//!
//! Preferences arrive as a partially-populated configuration record
//! ([`PreferencesConfig`], the shape stored by the configuration
//! collaborator) and are resolved into a fully-defaulted, strongly-typed
//! [`Preferences`] value before scheduling.
//!
//! # Resolution contract
//! Resolution never fails. Missing fields take documented defaults;
//! unparsable weekday names and dates are skipped; non-positive weights
//! and intervals fall back. Re-resolving an already-resolved value is a
//! no-op (idempotent).

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Default schedule length in periods (two years of weekly tastings).
pub const DEFAULT_HORIZON: usize = 104;

/// Default interval between tastings, in days.
pub const DEFAULT_FREQUENCY_DAYS: i64 = 7;

/// Named tasting frequency.
///
/// Resolves to a fixed day count; `Custom` reads an explicit interval
/// from the configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cadence {
    /// Every 7 days.
    #[default]
    Weekly,
    /// Every 14 days.
    BiWeekly,
    /// Every 30 days.
    Monthly,
    /// Explicit interval from `custom_interval_days`.
    Custom,
}

impl Cadence {
    /// Interval in days for this cadence.
    ///
    /// `Custom` uses `custom_days` when it is a positive value, falling
    /// back to [`DEFAULT_FREQUENCY_DAYS`] otherwise.
    pub fn days(&self, custom_days: Option<i64>) -> i64 {
        match self {
            Cadence::Weekly => 7,
            Cadence::BiWeekly => 14,
            Cadence::Monthly => 30,
            Cadence::Custom => custom_days
                .filter(|d| *d > 0)
                .unwrap_or(DEFAULT_FREQUENCY_DAYS),
        }
    }
}

/// Raw, partially-populated preference record.
///
/// Mirrors the `user_preferences` block persisted by the configuration
/// collaborator. Every field is optional; [`Preferences::resolve`]
/// supplies defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Named cadence. `None` = weekly.
    pub tasting_frequency: Option<Cadence>,
    /// Interval for [`Cadence::Custom`], in days.
    pub custom_interval_days: Option<i64>,
    /// Preferred weekday names (e.g., `["Friday", "Saturday"]`).
    pub preferred_days: Vec<String>,
    /// ISO dates (`YYYY-MM-DD`) to avoid scheduling on.
    pub avoid_dates: Vec<String>,
    /// Category name → positive selection weight.
    pub category_preferences: HashMap<String, f64>,
    /// Whether to bias selection by season.
    pub seasonal_adjustments: Option<bool>,
    /// Minimum days between two tastings of the same category.
    pub min_days_between_category: Option<i64>,
    /// Default schedule length in periods.
    pub default_schedule_weeks: Option<usize>,
}

/// Fully-resolved scheduling preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Days between consecutive tastings.
    pub frequency_days: i64,
    /// Preferred weekdays. Empty = no preference.
    pub preferred_days: Vec<Weekday>,
    /// Dates the scheduler must avoid (bounded search, see date placement).
    pub blackout_dates: HashSet<NaiveDate>,
    /// Category name (normalized lowercase) → selection weight.
    pub category_weights: HashMap<String, f64>,
    /// Seasonal weight bias enabled.
    pub seasonal_adjustments: bool,
    /// Minimum day gap between same-category tastings. 0 = no constraint.
    pub min_days_between_category: i64,
    /// Schedule length used when the caller does not supply one.
    pub default_horizon: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            frequency_days: DEFAULT_FREQUENCY_DAYS,
            preferred_days: Vec::new(),
            blackout_dates: HashSet::new(),
            category_weights: HashMap::new(),
            seasonal_adjustments: false,
            min_days_between_category: 0,
            default_horizon: DEFAULT_HORIZON,
        }
    }
}

impl Preferences {
    /// Resolves a raw configuration record into defaulted preferences.
    ///
    /// Never fails: malformed weekday names and dates are dropped,
    /// non-positive weights and intervals fall back to their defaults.
    pub fn resolve(config: &PreferencesConfig) -> Self {
        let cadence = config.tasting_frequency.unwrap_or_default();
        let frequency_days = cadence.days(config.custom_interval_days);

        let preferred_days = config
            .preferred_days
            .iter()
            .filter_map(|name| name.trim().parse::<Weekday>().ok())
            .collect();

        let blackout_dates = config
            .avoid_dates
            .iter()
            .filter_map(|s| s.trim().parse::<NaiveDate>().ok())
            .collect();

        let category_weights = config
            .category_preferences
            .iter()
            .filter(|(_, w)| w.is_finite() && **w > 0.0)
            .map(|(k, w)| (k.trim().to_lowercase(), *w))
            .collect();

        let min_days_between_category = config
            .min_days_between_category
            .filter(|d| *d > 0)
            .unwrap_or(0);

        let default_horizon = config
            .default_schedule_weeks
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_HORIZON);

        Self {
            frequency_days,
            preferred_days,
            blackout_dates,
            category_weights,
            seasonal_adjustments: config.seasonal_adjustments.unwrap_or(false),
            min_days_between_category,
            default_horizon,
        }
    }

    /// Selection weight for a normalized category key.
    ///
    /// Categories without a configured weight count as 1.0.
    pub fn category_weight(&self, category_key: &str) -> f64 {
        self.category_weights
            .get(category_key)
            .copied()
            .unwrap_or(1.0)
    }

    /// Whether any preferred weekdays are configured.
    pub fn has_preferred_days(&self) -> bool {
        !self.preferred_days.is_empty()
    }
}

impl From<&Preferences> for PreferencesConfig {
    /// Renders resolved preferences back into the raw record shape.
    ///
    /// Round-trip guarantee: `resolve(&from(&p)) == p`.
    fn from(prefs: &Preferences) -> Self {
        let mut avoid_dates: Vec<String> = prefs
            .blackout_dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        avoid_dates.sort();

        Self {
            tasting_frequency: Some(Cadence::Custom),
            custom_interval_days: Some(prefs.frequency_days),
            preferred_days: prefs.preferred_days.iter().map(|d| d.to_string()).collect(),
            avoid_dates,
            category_preferences: prefs.category_weights.clone(),
            seasonal_adjustments: Some(prefs.seasonal_adjustments),
            min_days_between_category: Some(prefs.min_days_between_category),
            default_schedule_weeks: Some(prefs.default_horizon),
        }
    }
}
