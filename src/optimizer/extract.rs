//! Solution extraction.
//!
//! Translates solved variable values into one [`Assignment`] per trainset,
//! in fleet snapshot order. A variable counts as set when its value
//! exceeds 0.5, absorbing backend numeric tolerance; fractional values
//! never cause an error. When more than one family is structurally nonzero
//! (which the exclusivity constraints rule out for a valid solution), the
//! service family wins, then bays, then IBL.

use crate::models::{Assignment, DepotCapacity, FleetSnapshot, InductionPlan};
use crate::optimizer::solver::{SolveStatus, SolverOutcome};

/// A solved variable value above this threshold counts as 1.
pub const SET_THRESHOLD: f64 = 0.5;

/// Maps a solver outcome back into per-trainset disposition records.
///
/// A non-optimal outcome yields the documented degenerate plan: no
/// assignments and an objective of 0.0.
pub fn extract_plan(outcome: &SolverOutcome, fleet: &FleetSnapshot) -> InductionPlan {
    if outcome.status != SolveStatus::Optimal {
        return InductionPlan::empty();
    }

    let layout = &outcome.layout;
    let is_set = |var| outcome.values.get(&var).copied().unwrap_or(0.0) > SET_THRESHOLD;

    let assignments = fleet
        .iter()
        .enumerate()
        .map(|(t, ts)| {
            for slot in 0..layout.n_slots() {
                if is_set(layout.service_var(t, slot)) {
                    return Assignment::service(&ts.id, DepotCapacity::slot_id(slot));
                }
            }
            for bay in 0..layout.n_bays() {
                if is_set(layout.bay_var(t, bay)) {
                    return Assignment::maintenance(&ts.id, DepotCapacity::bay_id(bay));
                }
            }
            if is_set(layout.ibl_var(t)) {
                return Assignment::ibl(&ts.id);
            }
            Assignment::standby(&ts.id)
        })
        .collect();

    InductionPlan::new(assignments, outcome.objective_value)
}
