//! Input validation for induction solves.
//!
//! Checks structural integrity of the fleet snapshot and weight
//! configuration before any model construction. Detects:
//! - Duplicate trainset IDs
//! - Negative branding hours
//! - Negative or non-finite shunting costs
//! - Non-finite (NaN/infinite) objective weights
//!
//! Capacities are `usize` and therefore cannot be negative; that class of
//! configuration error is unrepresentable.

use crate::models::{FleetSnapshot, ObjectiveWeights};
use std::collections::HashSet;

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
    /// Two trainsets share the same ID.
    DuplicateId,
    /// Branding hours remaining is negative.
    NegativeBrandingHours,
    /// A shunting cost is negative.
    NegativeShuntCost,
    /// A numeric attribute or weight is NaN or infinite.
    NonFiniteValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a solve request before model construction.
///
/// Checks:
/// 1. No duplicate trainset IDs
/// 2. Branding hours are non-negative and finite
/// 3. Shunting costs are non-negative and finite
/// 4. All five objective weights are finite
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(fleet: &FleetSnapshot, weights: &ObjectiveWeights) -> ValidationResult {
    let mut errors = Vec::new();

    let mut trainset_ids = HashSet::new();
    for ts in fleet.iter() {
        if !trainset_ids.insert(ts.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate trainset ID: {}", ts.id),
            ));
        }

        if !ts.branding_hours_left.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteValue,
                format!("Trainset '{}' has non-finite branding hours", ts.id),
            ));
        } else if ts.branding_hours_left < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBrandingHours,
                format!(
                    "Trainset '{}' has negative branding hours ({})",
                    ts.id, ts.branding_hours_left
                ),
            ));
        }

        for (bay, cost) in &ts.shunt_cost_to_bays {
            if !cost.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteValue,
                    format!("Trainset '{}' has non-finite shunt cost to '{bay}'", ts.id),
                ));
            } else if *cost < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeShuntCost,
                    format!(
                        "Trainset '{}' has negative shunt cost {cost} to '{bay}'",
                        ts.id
                    ),
                ));
            }
        }
    }

    if !weights.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            "Objective weights contain a NaN or infinite value",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trainset;

    fn sample_fleet() -> FleetSnapshot {
        FleetSnapshot::new(vec![
            Trainset::new("T1")
                .with_branding_hours(12.0)
                .with_shunt_cost("Bay_1", 1.5),
            Trainset::new("T2").with_shunt_cost("Bay_1", 0.0),
        ])
    }

    #[test]
    fn test_valid_request() {
        let fleet = sample_fleet();
        assert!(validate_request(&fleet, &ObjectiveWeights::zero()).is_ok());
    }

    #[test]
    fn test_duplicate_trainset_id() {
        let fleet = FleetSnapshot::new(vec![Trainset::new("T1"), Trainset::new("T1")]);
        let errors = validate_request(&fleet, &ObjectiveWeights::zero()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_negative_branding_hours() {
        let fleet = FleetSnapshot::new(vec![Trainset::new("T1").with_branding_hours(-1.0)]);
        let errors = validate_request(&fleet, &ObjectiveWeights::zero()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeBrandingHours));
    }

    #[test]
    fn test_negative_shunt_cost() {
        let fleet = FleetSnapshot::new(vec![Trainset::new("T1").with_shunt_cost("Bay_1", -0.5)]);
        let errors = validate_request(&fleet, &ObjectiveWeights::zero()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeShuntCost));
    }

    #[test]
    fn test_non_finite_weight() {
        let fleet = sample_fleet();
        let weights = ObjectiveWeights::zero().with_shunt_cost(f64::INFINITY);
        let errors = validate_request(&fleet, &weights).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_nan_shunt_cost() {
        let fleet =
            FleetSnapshot::new(vec![Trainset::new("T1").with_shunt_cost("Bay_1", f64::NAN)]);
        let errors = validate_request(&fleet, &ObjectiveWeights::zero()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_multiple_errors() {
        let fleet = FleetSnapshot::new(vec![
            Trainset::new("T1").with_branding_hours(-2.0),
            Trainset::new("T1").with_shunt_cost("Bay_1", -1.0),
        ]);
        let errors = validate_request(&fleet, &ObjectiveWeights::zero()).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_empty_fleet_is_valid() {
        let fleet = FleetSnapshot::default();
        assert!(validate_request(&fleet, &ObjectiveWeights::zero()).is_ok());
    }
}
