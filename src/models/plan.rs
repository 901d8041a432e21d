//! Induction plan (solution) model.
//!
//! A plan is a complete disposition record for every trainset in the
//! snapshot plus the achieved objective value. Plans can re-verify the
//! capacity and exclusivity invariants after extraction; violations are
//! reported as data rather than panics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DepotCapacity;

/// Where a trainset is sent for the next operating day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Assigned to a revenue-service slot.
    Service,
    /// Assigned to a maintenance bay.
    Maintenance,
    /// Held in isolation (IBL).
    Ibl,
    /// Not assigned anywhere; remains stabled.
    Standby,
}

/// Disposition record for one trainset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Trainset identifier.
    pub trainset_id: String,
    /// Assigned disposition.
    pub disposition: Disposition,
    /// Slot or bay identifier; `"IBL"` for isolation, `None` for standby.
    pub location: Option<String>,
}

impl Assignment {
    /// Creates a service assignment.
    pub fn service(trainset_id: impl Into<String>, slot_id: impl Into<String>) -> Self {
        Self {
            trainset_id: trainset_id.into(),
            disposition: Disposition::Service,
            location: Some(slot_id.into()),
        }
    }

    /// Creates a maintenance assignment.
    pub fn maintenance(trainset_id: impl Into<String>, bay_id: impl Into<String>) -> Self {
        Self {
            trainset_id: trainset_id.into(),
            disposition: Disposition::Maintenance,
            location: Some(bay_id.into()),
        }
    }

    /// Creates an IBL assignment.
    pub fn ibl(trainset_id: impl Into<String>) -> Self {
        Self {
            trainset_id: trainset_id.into(),
            disposition: Disposition::Ibl,
            location: Some("IBL".to_string()),
        }
    }

    /// Creates a standby assignment.
    pub fn standby(trainset_id: impl Into<String>) -> Self {
        Self {
            trainset_id: trainset_id.into(),
            disposition: Disposition::Standby,
            location: None,
        }
    }
}

/// A violated plan invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanViolation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity (trainset, slot, or bay id).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of plan invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two trainsets occupy the same slot or bay.
    LocationDoubleBooked,
    /// More trainsets in IBL than the configured capacity.
    IblOverCapacity,
    /// A trainset appears in more than one assignment record.
    DuplicateTrainset,
    /// A non-standby assignment is missing its location id.
    MissingLocation,
}

/// A complete induction plan (solution to one solve invocation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InductionPlan {
    /// One disposition record per trainset, in fleet snapshot order.
    pub assignments: Vec<Assignment>,
    /// Objective value achieved by the solver. May be negative; 0.0 for a
    /// degenerate (non-optimal) outcome.
    pub objective_value: f64,
}

impl InductionPlan {
    /// Creates an empty plan with a zero objective.
    ///
    /// This is the documented degenerate outcome for non-optimal solver
    /// statuses; callers detect it by the empty assignment list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a plan from assignments and the achieved objective value.
    pub fn new(assignments: Vec<Assignment>, objective_value: f64) -> Self {
        Self {
            assignments,
            objective_value,
        }
    }

    /// Number of assignment records.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the plan has no assignment records.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finds the record for a trainset.
    pub fn assignment_for(&self, trainset_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.trainset_id == trainset_id)
    }

    /// All records with the given disposition.
    pub fn with_disposition(&self, disposition: Disposition) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.disposition == disposition)
            .collect()
    }

    /// Count of records with the given disposition.
    pub fn count(&self, disposition: Disposition) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.disposition == disposition)
            .count()
    }

    /// Re-checks the capacity and exclusivity invariants.
    ///
    /// Returns one violation per breached invariant; an empty vector means
    /// the plan is structurally sound:
    /// - every slot and bay holds at most one trainset,
    /// - at most `ibl_capacity` trainsets are in IBL,
    /// - every trainset appears exactly once,
    /// - every non-standby record names a location.
    pub fn verify(&self, capacity: &DepotCapacity) -> Vec<PlanViolation> {
        let mut violations = Vec::new();

        let mut seen_trainsets: HashMap<&str, usize> = HashMap::new();
        let mut location_counts: HashMap<&str, usize> = HashMap::new();
        let mut ibl_count = 0usize;

        for a in &self.assignments {
            *seen_trainsets.entry(a.trainset_id.as_str()).or_insert(0) += 1;

            match a.disposition {
                Disposition::Service | Disposition::Maintenance => match &a.location {
                    Some(loc) => {
                        *location_counts.entry(loc.as_str()).or_insert(0) += 1;
                    }
                    None => violations.push(PlanViolation {
                        violation_type: ViolationType::MissingLocation,
                        entity_id: a.trainset_id.clone(),
                        message: format!(
                            "Trainset '{}' assigned {:?} without a location",
                            a.trainset_id, a.disposition
                        ),
                    }),
                },
                Disposition::Ibl => ibl_count += 1,
                Disposition::Standby => {}
            }
        }

        for (id, n) in &seen_trainsets {
            if *n > 1 {
                violations.push(PlanViolation {
                    violation_type: ViolationType::DuplicateTrainset,
                    entity_id: (*id).to_string(),
                    message: format!("Trainset '{id}' appears in {n} assignment records"),
                });
            }
        }

        for (loc, n) in &location_counts {
            if *n > 1 {
                violations.push(PlanViolation {
                    violation_type: ViolationType::LocationDoubleBooked,
                    entity_id: (*loc).to_string(),
                    message: format!("Location '{loc}' holds {n} trainsets"),
                });
            }
        }

        if ibl_count > capacity.ibl_capacity {
            violations.push(PlanViolation {
                violation_type: ViolationType::IblOverCapacity,
                entity_id: "IBL".to_string(),
                message: format!(
                    "{} trainsets in IBL exceeds capacity {}",
                    ibl_count, capacity.ibl_capacity
                ),
            });
        }

        violations
    }
}
