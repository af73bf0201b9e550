//! Tasting schedule engine for a personal spirits collection.
//!
//! Takes an in-memory bottle inventory and a preference record and
//! produces a long-horizon schedule: one bottle per period, balancing
//! untasted against previously-tasted bottles, category weights,
//! blackout dates, preferred weekdays, seasonal bias, and a minimum
//! spacing between tastings of the same category.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Bottle`, `PreferencesConfig`,
//!   `Preferences`, `Schedule`, `ScheduleEntry`
//! - **`generator`**: The pipeline — candidate pool, seasonal bias,
//!   weighted selection, calendar placement, assembly
//! - **`validation`**: Advisory input integrity checks
//!
//! # Boundaries
//!
//! The crate is a pure, single-shot batch computation. Loading the
//! inventory and configuration, persisting the schedule, and every
//! user-facing surface (CLI, web, import formats) live with the caller.
//! Randomness is injected via `rand::Rng`, so tests and callers that
//! want reproducible schedules supply a seeded generator.

pub mod generator;
pub mod models;
pub mod validation;

pub use generator::{ScheduleRequest, TastingScheduler};
pub use models::{Bottle, Cadence, Preferences, PreferencesConfig, Schedule, ScheduleEntry};
