//! Candidate selection engine.
//!
//! Turns the weighted pool into an ordered list of exactly `horizon`
//! candidates (when the pool is non-empty):
//!
//! 1. Pool smaller than or equal to the horizon: repeat-fill the
//!    shortfall from the tasted subset (whole pool if nothing has been
//!    tasted yet), shuffled and cycled so coverage never falls short.
//! 2. Pool larger than the horizon: narrow to the horizon with untasted
//!    priority, drawing within each subset by weight-proportional
//!    sampling without replacement.
//! 3. Weighted sampling also orders the working set when it already
//!    matches the horizon, each candidate's weight as its probability
//!    mass.
//! 4. Uniform shuffle, then a stable sort on the repeat flag: untasted
//!    candidates are biased to the front, ties stay in random order.
//!
//! The untasted-first ordering is a soft bias. It is computed once;
//! date placement never re-sorts.

use rand::seq::SliceRandom;
use rand::Rng;

use super::pool::Candidate;

/// Floor applied to weights during sampling so a zero or denormal
/// weight cannot stall the cumulative draw.
const WEIGHT_FLOOR: f64 = 1e-9;

/// Selects and orders `horizon` candidates from the pool.
///
/// An empty pool or a zero horizon yields an empty result.
pub fn select<R: Rng>(pool: Vec<Candidate>, horizon: usize, rng: &mut R) -> Vec<Candidate> {
    if pool.is_empty() || horizon == 0 {
        return Vec::new();
    }

    let sampled = if pool.len() <= horizon {
        let working = fill_shortfall(pool, horizon, rng);
        weighted_sample(working, horizon, rng)
    } else {
        sample_untasted_first(pool, horizon, rng)
    };

    order_untasted_first(sampled, rng)
}

/// Extends an undersized pool up to `horizon` candidates.
///
/// The fill source is the tasted subset, falling back to the whole pool
/// when nothing has been tasted. The source is shuffled once and cycled,
/// so the fill works with replacement and the shortfall is always met.
fn fill_shortfall<R: Rng>(mut pool: Vec<Candidate>, horizon: usize, rng: &mut R) -> Vec<Candidate> {
    let shortfall = horizon - pool.len();
    if shortfall == 0 {
        return pool;
    }

    let mut source: Vec<Candidate> = pool.iter().filter(|c| c.is_repeat).cloned().collect();
    if source.is_empty() {
        source = pool.clone();
    }
    source.shuffle(rng);

    pool.extend(source.iter().cycle().take(shortfall).cloned());
    pool
}

/// Narrows an oversized pool to `need` candidates, untasted first.
///
/// Untasted candidates fill as many slots as they can; tasted ones top
/// up the remainder. Within each subset the picks are drawn by weight,
/// so a heavily-weighted category is more likely to make the cut while
/// no bottle is ever guaranteed a slot.
fn sample_untasted_first<R: Rng>(pool: Vec<Candidate>, need: usize, rng: &mut R) -> Vec<Candidate> {
    let (untasted, tasted): (Vec<Candidate>, Vec<Candidate>) =
        pool.into_iter().partition(|c| !c.is_repeat);

    let mut selected = weighted_sample(untasted, need, rng);
    if selected.len() < need {
        let remainder = need - selected.len();
        selected.extend(weighted_sample(tasted, remainder, rng));
    }
    selected
}

/// Weighted random sampling without replacement.
///
/// Each draw picks one candidate with probability proportional to its
/// weight and removes it from the urn. Higher weight raises expected
/// selection (and earlier placement) but guarantees neither.
fn weighted_sample<R: Rng>(mut items: Vec<Candidate>, count: usize, rng: &mut R) -> Vec<Candidate> {
    let count = count.min(items.len());
    let mut selected = Vec::with_capacity(count);

    for _ in 0..count {
        let total: f64 = items.iter().map(|c| c.weight.max(WEIGHT_FLOOR)).sum();
        let mut draw = rng.random_range(0.0..total);
        let mut chosen = items.len() - 1;
        for (i, candidate) in items.iter().enumerate() {
            draw -= candidate.weight.max(WEIGHT_FLOOR);
            if draw <= 0.0 {
                chosen = i;
                break;
            }
        }
        selected.push(items.swap_remove(chosen));
    }

    selected
}

/// Shuffles uniformly, then stable-sorts on the repeat flag.
///
/// Equivalent to sorting on `(is_repeat, random tiebreak)`.
fn order_untasted_first<R: Rng>(mut candidates: Vec<Candidate>, rng: &mut R) -> Vec<Candidate> {
    candidates.shuffle(rng);
    candidates.sort_by_key(|c| c.is_repeat);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::pool::build_pool;
    use crate::models::{Bottle, Preferences};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn bottle(id: &str, category: &str, tasted: bool) -> Bottle {
        Bottle::new(id)
            .with_name(format!("Bottle {id}"))
            .with_category(category)
            .tasted(tasted)
    }

    fn pool_of(bottles: &[Bottle]) -> Vec<Candidate> {
        build_pool(bottles, &Preferences::default())
    }

    #[test]
    fn test_empty_pool_yields_empty() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(select(Vec::new(), 10, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_horizon_yields_empty() {
        let mut rng = SmallRng::seed_from_u64(1);
        let pool = pool_of(&[bottle("u1", "gin", false)]);
        assert!(select(pool, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_exact_count_when_pool_small() {
        let pool = pool_of(&[
            bottle("u1", "bourbon", false),
            bottle("u2", "scotch", false),
            bottle("t1", "irish", true),
        ]);
        let mut rng = SmallRng::seed_from_u64(7);
        let selected = select(pool, 5, &mut rng);
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_exact_count_when_pool_large() {
        let bottles: Vec<Bottle> = (0..20)
            .map(|i| bottle(&format!("u{i}"), "rum", false))
            .collect();
        let mut rng = SmallRng::seed_from_u64(7);
        let selected = select(pool_of(&bottles), 6, &mut rng);
        assert_eq!(selected.len(), 6);
    }

    #[test]
    fn test_small_pool_covers_every_bottle() {
        let pool = pool_of(&[
            bottle("u1", "bourbon", false),
            bottle("u2", "scotch", false),
            bottle("t1", "irish", true),
        ]);
        let mut rng = SmallRng::seed_from_u64(11);
        let selected = select(pool, 8, &mut rng);

        for id in ["u1", "u2", "t1"] {
            assert!(
                selected.iter().any(|c| c.bottle.id == id),
                "bottle {id} missing from repeat-filled selection"
            );
        }
    }

    #[test]
    fn test_repeat_fill_prefers_tasted() {
        let pool = pool_of(&[
            bottle("u1", "bourbon", false),
            bottle("t1", "irish", true),
            bottle("t2", "scotch", true),
        ]);
        let mut rng = SmallRng::seed_from_u64(3);
        let selected = select(pool, 9, &mut rng);

        // The 6 fill slots all come from the tasted subset.
        let untasted = selected.iter().filter(|c| !c.is_repeat).count();
        assert_eq!(untasted, 1);
        assert_eq!(selected.len(), 9);
    }

    #[test]
    fn test_repeat_fill_falls_back_to_untasted() {
        let pool = pool_of(&[bottle("u1", "bourbon", false), bottle("u2", "gin", false)]);
        let mut rng = SmallRng::seed_from_u64(3);
        let selected = select(pool, 6, &mut rng);

        assert_eq!(selected.len(), 6);
        assert!(selected.iter().all(|c| !c.is_repeat));
    }

    #[test]
    fn test_fill_exceeding_source_cycles() {
        // Shortfall (7) larger than the tasted source (1): the cycle
        // must still meet the full horizon.
        let pool = pool_of(&[bottle("u1", "bourbon", false), bottle("t1", "irish", true)]);
        let mut rng = SmallRng::seed_from_u64(5);
        let selected = select(pool, 9, &mut rng);
        assert_eq!(selected.len(), 9);
        assert_eq!(selected.iter().filter(|c| c.is_repeat).count(), 8);
    }

    #[test]
    fn test_narrowing_prefers_untasted() {
        let mut bottles: Vec<Bottle> = (0..10)
            .map(|i| bottle(&format!("u{i}"), "rum", false))
            .collect();
        bottles.extend((0..10).map(|i| bottle(&format!("t{i}"), "rum", true)));

        let mut rng = SmallRng::seed_from_u64(13);
        let selected = select(pool_of(&bottles), 5, &mut rng);

        assert_eq!(selected.len(), 5);
        assert!(selected.iter().all(|c| !c.is_repeat));
    }

    #[test]
    fn test_narrowing_tops_up_with_tasted() {
        let bottles = vec![
            bottle("u1", "rum", false),
            bottle("u2", "gin", false),
            bottle("t1", "rye", true),
            bottle("t2", "rye", true),
            bottle("t3", "rye", true),
        ];
        let mut rng = SmallRng::seed_from_u64(13);
        let selected = select(pool_of(&bottles), 4, &mut rng);

        assert_eq!(selected.iter().filter(|c| !c.is_repeat).count(), 2);
        assert_eq!(selected.iter().filter(|c| c.is_repeat).count(), 2);
    }

    #[test]
    fn test_untasted_ordered_before_repeats() {
        let pool = pool_of(&[
            bottle("t1", "irish", true),
            bottle("t2", "rye", true),
            bottle("u1", "bourbon", false),
            bottle("u2", "scotch", false),
        ]);
        let mut rng = SmallRng::seed_from_u64(21);
        let selected = select(pool, 4, &mut rng);

        let first_repeat = selected.iter().position(|c| c.is_repeat);
        let last_untasted = selected.iter().rposition(|c| !c.is_repeat);
        if let (Some(repeat), Some(untasted)) = (first_repeat, last_untasted) {
            assert!(untasted < repeat, "repeat scheduled before an untasted bottle");
        }
    }

    #[test]
    fn test_weighted_sample_biases_toward_heavy() {
        // Statistical: weight 50 vs 1, a single draw should pick the
        // heavy candidate in the overwhelming majority of seeded runs.
        let heavy = Candidate {
            bottle: bottle("heavy", "bourbon", false),
            weight: 50.0,
            is_repeat: false,
        };
        let light = Candidate {
            bottle: bottle("light", "gin", false),
            weight: 1.0,
            is_repeat: false,
        };

        let mut heavy_wins = 0;
        for seed in 0..300 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let picked = weighted_sample(vec![heavy.clone(), light.clone()], 1, &mut rng);
            if picked[0].bottle.id == "heavy" {
                heavy_wins += 1;
            }
        }
        assert!(
            heavy_wins > 250,
            "expected heavy candidate to dominate, won {heavy_wins}/300"
        );
    }

    #[test]
    fn test_category_weight_shifts_narrowing() {
        // 2 bourbons at weight 5.0 vs 8 gins at weight 1.0, one slot:
        // bourbon carries 10/18 of the mass and should win most runs.
        let prefs = Preferences {
            category_weights: std::collections::HashMap::from([("bourbon".to_string(), 5.0)]),
            ..Preferences::default()
        };
        let mut bottles = vec![bottle("b1", "bourbon", false), bottle("b2", "bourbon", false)];
        bottles.extend((0..8).map(|i| bottle(&format!("g{i}"), "gin", false)));

        let mut bourbon_wins = 0;
        for seed in 0..300 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let selected = select(build_pool(&bottles, &prefs), 1, &mut rng);
            if selected[0].category_key() == "bourbon" {
                bourbon_wins += 1;
            }
        }
        // Unweighted odds would be ~20%; weighted odds are ~56%.
        assert!(
            bourbon_wins > 120,
            "expected weights to favor bourbon, won {bourbon_wins}/300"
        );
    }

    #[test]
    fn test_weighted_sample_handles_zero_weights() {
        let a = Candidate {
            bottle: bottle("a", "gin", false),
            weight: 0.0,
            is_repeat: false,
        };
        let b = Candidate {
            bottle: bottle("b", "gin", false),
            weight: 0.0,
            is_repeat: false,
        };
        let mut rng = SmallRng::seed_from_u64(2);
        let picked = weighted_sample(vec![a, b], 2, &mut rng);
        assert_eq!(picked.len(), 2);
    }
}
