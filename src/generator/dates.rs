//! Calendar date placement.
//!
//! Walks the ordered candidate list and assigns each a date, carrying a
//! cursor forward by the configured frequency and tracking the last
//! date seen per category.
//!
//! # Per-candidate steps
//! 1. Category spacing: defer until `min_days_between_category` days
//!    have passed since the category's previous tasting.
//! 2. Preferred-day snapping: advance 0-6 days forward to the nearest
//!    preferred weekday.
//! 3. Blackout avoidance: while the date is blacked out, advance one
//!    day and re-snap, bounded by [`BLACKOUT_RETRY_LIMIT`] attempts.
//!    Exhausting the bound keeps the last computed date (best-effort,
//!    documented lossy fallback).
//!
//! Every adjustment moves the cursor forward, so assigned dates are
//! non-decreasing in candidate order. The walk is inherently
//! sequential: each placement depends on the cursor and the per-category
//! map left by the previous one.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::pool::Candidate;
use crate::models::Preferences;

/// Maximum day-by-day advances when escaping blackout dates.
pub const BLACKOUT_RETRY_LIMIT: u32 = 30;

/// Assigns a calendar date to each candidate, in order.
pub fn assign_dates(
    candidates: Vec<Candidate>,
    start_date: NaiveDate,
    preferences: &Preferences,
) -> Vec<(NaiveDate, Candidate)> {
    let mut dated = Vec::with_capacity(candidates.len());
    let mut current = start_date;
    let mut last_by_category: HashMap<String, NaiveDate> = HashMap::new();

    for candidate in candidates {
        let category = candidate.category_key();

        if preferences.min_days_between_category > 0 {
            if let Some(&last) = last_by_category.get(&category) {
                let gap = (current - last).num_days();
                if gap < preferences.min_days_between_category {
                    current = advance_days(last, preferences.min_days_between_category);
                }
            }
        }

        current = snap_to_preferred(current, &preferences.preferred_days);

        let mut attempts = 0;
        while preferences.blackout_dates.contains(&current) && attempts < BLACKOUT_RETRY_LIMIT {
            current = advance_days(current, 1);
            current = snap_to_preferred(current, &preferences.preferred_days);
            attempts += 1;
        }

        last_by_category.insert(category, current);
        dated.push((current, candidate));
        current = advance_days(current, preferences.frequency_days);
    }

    dated
}

/// Moves a date forward to the nearest preferred weekday (0-6 days).
///
/// No preferred days, or a same-day match, is a no-op.
fn snap_to_preferred(date: NaiveDate, preferred: &[Weekday]) -> NaiveDate {
    if preferred.is_empty() || preferred.contains(&date.weekday()) {
        return date;
    }
    let offset = preferred
        .iter()
        .map(|&day| forward_distance(date.weekday(), day))
        .min()
        .unwrap_or(0);
    advance_days(date, offset)
}

/// Days forward from one weekday to another (0-6).
fn forward_distance(from: Weekday, to: Weekday) -> i64 {
    let from = from.num_days_from_monday() as i64;
    let to = to.num_days_from_monday() as i64;
    (to - from).rem_euclid(7)
}

fn advance_days(date: NaiveDate, days: i64) -> NaiveDate {
    // Day counts here are bounded (frequency, spacing, snap offsets);
    // saturate rather than wrap at the calendar's representable edge.
    date.checked_add_days(Days::new(days.max(0) as u64))
        .unwrap_or(date)
}
