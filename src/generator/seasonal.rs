//! Seasonal weight bias.
//!
//! When seasonal adjustments are enabled, candidate weights are scaled
//! by the calendar month before sampling: lighter spirits are favored
//! in summer (June-August), heavier ones in winter (December-February),
//! and each is damped in the opposite season. Other months and
//! unclassified categories are unaffected.
//!
//! The month is taken from the schedule start date, a fixed
//! approximation for the whole run; the bias influences which bottles
//! are selected, not where they land on the calendar.

use super::pool::Candidate;

/// Categories treated as light (summer-leaning) spirits.
pub const LIGHT_CATEGORIES: [&str; 5] = ["gin", "vodka", "rum", "tequila", "mezcal"];

/// Categories treated as heavy (winter-leaning) spirits.
pub const HEAVY_CATEGORIES: [&str; 7] = [
    "bourbon", "scotch", "whiskey", "whisky", "rye", "cognac", "brandy",
];

const FAVORED_FACTOR: f64 = 1.5;
const DISFAVORED_FACTOR: f64 = 0.7;

/// Seasonal multiplier for a normalized category key in a given month (1-12).
pub fn seasonal_factor(category_key: &str, month: u32) -> f64 {
    let light = LIGHT_CATEGORIES.contains(&category_key);
    let heavy = HEAVY_CATEGORIES.contains(&category_key);

    match month {
        6..=8 if light => FAVORED_FACTOR,
        6..=8 if heavy => DISFAVORED_FACTOR,
        12 | 1 | 2 if heavy => FAVORED_FACTOR,
        12 | 1 | 2 if light => DISFAVORED_FACTOR,
        _ => 1.0,
    }
}

/// Scales every candidate's weight by its seasonal factor for `month`.
pub fn apply_seasonal_bias(pool: &mut [Candidate], month: u32) {
    for candidate in pool.iter_mut() {
        candidate.weight *= seasonal_factor(&candidate.category_key(), month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::pool::build_pool;
    use crate::models::{Bottle, Preferences};

    #[test]
    fn test_summer_favors_light() {
        assert_eq!(seasonal_factor("gin", 7), 1.5);
        assert_eq!(seasonal_factor("bourbon", 7), 0.7);
    }

    #[test]
    fn test_winter_favors_heavy() {
        assert_eq!(seasonal_factor("scotch", 12), 1.5);
        assert_eq!(seasonal_factor("scotch", 1), 1.5);
        assert_eq!(seasonal_factor("rum", 2), 0.7);
    }

    #[test]
    fn test_shoulder_months_neutral() {
        assert_eq!(seasonal_factor("gin", 4), 1.0);
        assert_eq!(seasonal_factor("bourbon", 10), 1.0);
    }

    #[test]
    fn test_unclassified_category_neutral() {
        assert_eq!(seasonal_factor("amaro", 7), 1.0);
        assert_eq!(seasonal_factor("amaro", 1), 1.0);
    }

    #[test]
    fn test_apply_bias_scales_weights() {
        let bottles = vec![
            Bottle::new("g").with_category("gin"),
            Bottle::new("b").with_category("bourbon"),
            Bottle::new("a").with_category("amaro"),
        ];
        let mut pool = build_pool(&bottles, &Preferences::default());
        apply_seasonal_bias(&mut pool, 7);

        // Base weight is 2.0 (untasted).
        assert_eq!(pool[0].weight, 3.0);
        assert_eq!(pool[1].weight, 1.4);
        assert_eq!(pool[2].weight, 2.0);
    }
}
