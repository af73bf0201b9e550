//! Tasting-schedule domain models.
//!
//! Provides the data types that cross the generator's boundary: the
//! inventory [`Bottle`], the raw and resolved preference records, and
//! the [`Schedule`] output aggregate.
//!
//! All models are plain serde-enabled values. The generator treats
//! bottles and preferences as read-only snapshots; persistence and
//! editing belong to external collaborators.

mod bottle;
mod preferences;
mod schedule;

pub use bottle::{Bottle, DEFAULT_CATEGORY};
pub use preferences::{
    Cadence, Preferences, PreferencesConfig, DEFAULT_FREQUENCY_DAYS, DEFAULT_HORIZON,
};
pub use schedule::{Schedule, ScheduleEntry};
