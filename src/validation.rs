//! Input validation for inventory and configuration records.
//!
//! Advisory checks the caller can run before generating a schedule.
//! Detects:
//! - Duplicate or blank bottle IDs
//! - Blank bottle names
//! - Out-of-range ABV values
//! - Configuration values the resolver would silently coerce
//!
//! The generator itself never requires validation to have run: it
//! degrades to empty or best-effort output on bad input. These checks
//! exist so a caller can surface problems to the user instead.

use std::collections::HashSet;

use crate::models::{Bottle, PreferencesConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two bottles share the same ID.
    DuplicateId,
    /// A bottle has a blank ID or name.
    MissingField,
    /// An ABV outside 0-100 percent.
    InvalidAbv,
    /// A category weight the resolver would drop.
    InvalidWeight,
    /// An interval or horizon the resolver would coerce to its default.
    InvalidInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an inventory snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_collection(bottles: &[Bottle]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for bottle in bottles {
        if bottle.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Bottle '{}' has a blank ID", bottle.name),
            ));
        } else if !seen_ids.insert(bottle.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate bottle ID: {}", bottle.id),
            ));
        }

        if bottle.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Bottle '{}' has a blank name", bottle.id),
            ));
        }

        if let Some(abv) = bottle.abv {
            if !(0.0..=100.0).contains(&abv) || !abv.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAbv,
                    format!("Bottle '{}' has ABV {abv} outside 0-100", bottle.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a raw preference record.
///
/// Flags values the resolver would silently replace with defaults, so
/// the caller can warn instead of surprising the user.
pub fn validate_config(config: &PreferencesConfig) -> ValidationResult {
    let mut errors = Vec::new();

    for (category, weight) in &config.category_preferences {
        if !weight.is_finite() || *weight <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Category '{category}' has non-positive weight {weight}"),
            ));
        }
    }

    if let Some(days) = config.custom_interval_days {
        if days <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!("Custom interval of {days} days is not positive"),
            ));
        }
    }

    if let Some(weeks) = config.default_schedule_weeks {
        if weeks == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                "Default schedule length of 0 periods".to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
