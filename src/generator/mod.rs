//! Tasting schedule generation pipeline.
//!
//! Turns a bottle inventory plus resolved preferences into an ordered,
//! dated tasting schedule:
//!
//! 1. [`pool`] — partition the inventory and weight each bottle
//!    (category weight × untasted multiplier).
//! 2. [`seasonal`] — optional month-based weight bias.
//! 3. [`selection`] — weighted sampling and untasted-first ordering to
//!    exactly the requested horizon.
//! 4. [`dates`] — calendar placement with category spacing, preferred
//!    weekdays, and blackout avoidance.
//! 5. Assembly into the [`Schedule`] output aggregate.
//!
//! The pipeline is a single synchronous pass over in-memory snapshots;
//! no I/O, no state kept between calls. Randomness comes from an
//! injected [`Rng`], so callers can seed it for reproducible output.
//! Degenerate inputs (empty inventory, zero horizon) produce an empty
//! schedule rather than an error.
//!
//! # Example
//!
//! ```
//! use dram_schedule::generator::TastingScheduler;
//! use dram_schedule::models::{Bottle, Preferences};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let bottles = vec![
//!     Bottle::new("b1").with_name("Eagle Rare 10").with_category("bourbon"),
//!     Bottle::new("b2").with_name("Talisker 10").with_category("scotch"),
//! ];
//! let scheduler = TastingScheduler::new(Preferences::default());
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let schedule = scheduler.generate(
//!     &bottles,
//!     "2024-01-01".parse().unwrap(),
//!     8,
//!     &mut rng,
//! );
//! assert_eq!(schedule.entry_count(), 8);
//! ```

pub mod dates;
pub mod pool;
pub mod seasonal;
pub mod selection;

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::models::{Bottle, Preferences, Schedule, ScheduleEntry};
use pool::Candidate;

pub use dates::BLACKOUT_RETRY_LIMIT;
pub use pool::{build_pool, UNTASTED_WEIGHT_FACTOR};

/// Input container for schedule generation.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Inventory snapshot.
    pub bottles: Vec<Bottle>,
    /// Date of the first tasting slot (before adjustment).
    pub start_date: NaiveDate,
    /// Periods to schedule. `None` = the preferences' default horizon.
    pub horizon: Option<usize>,
}

impl ScheduleRequest {
    /// Creates a request for the given inventory and start date.
    pub fn new(bottles: Vec<Bottle>, start_date: NaiveDate) -> Self {
        Self {
            bottles,
            start_date,
            horizon: None,
        }
    }

    /// Overrides the horizon (number of periods).
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }
}

/// Schedule generator configured with resolved preferences.
#[derive(Debug, Clone, Default)]
pub struct TastingScheduler {
    preferences: Preferences,
}

impl TastingScheduler {
    /// Creates a generator with the given preferences.
    pub fn new(preferences: Preferences) -> Self {
        Self { preferences }
    }

    /// The preferences this generator runs with.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Generates a schedule of `horizon` tastings starting at `start_date`.
    ///
    /// Returns an empty schedule for an empty inventory or a zero
    /// horizon; never errors.
    pub fn generate<R: Rng>(
        &self,
        bottles: &[Bottle],
        start_date: NaiveDate,
        horizon: usize,
        rng: &mut R,
    ) -> Schedule {
        if horizon == 0 || bottles.is_empty() {
            return Schedule::empty();
        }

        let mut pool = pool::build_pool(bottles, &self.preferences);
        if self.preferences.seasonal_adjustments {
            seasonal::apply_seasonal_bias(&mut pool, start_date.month());
        }

        let ordered = selection::select(pool, horizon, rng);
        let dated = dates::assign_dates(ordered, start_date, &self.preferences);
        assemble(dated)
    }

    /// Generates a schedule from a request.
    ///
    /// A missing horizon falls back to the preferences' default.
    pub fn generate_request<R: Rng>(&self, request: &ScheduleRequest, rng: &mut R) -> Schedule {
        let horizon = request.horizon.unwrap_or(self.preferences.default_horizon);
        self.generate(&request.bottles, request.start_date, horizon, rng)
    }
}

/// Maps dated candidates to schedule entries with 1-based periods.
fn assemble(dated: Vec<(NaiveDate, Candidate)>) -> Schedule {
    let entries = dated
        .into_iter()
        .enumerate()
        .map(|(index, (date, candidate))| {
            let category = candidate.category_key();
            ScheduleEntry {
                period: index + 1,
                date,
                bottle_id: candidate.bottle.id,
                bottle_name: candidate.bottle.name,
                category,
                abv: candidate.bottle.abv,
                is_repeat: candidate.is_repeat,
            }
        })
        .collect();
    Schedule::new(entries)
}
