//! Constraint generation.
//!
//! Produces the full constraint set for one fleet snapshot and capacity
//! configuration:
//! - per-trainset exclusivity: Σ slot vars + Σ bay vars + ibl var ≤ 1,
//! - per-slot capacity: at most one trainset per service slot,
//! - per-bay capacity: at most one trainset per maintenance bay,
//! - one fleet-wide IBL capacity constraint.
//!
//! All constraints use ≤, never =, so a fleet larger than the total
//! capacity is always feasible: the excess trainsets simply take no
//! assignment and end up on standby. For N trainsets, S slots, and B bays
//! exactly N+S+B+1 constraints are generated.

use good_lp::{constraint, Constraint, Expression};

use crate::models::DepotCapacity;
use crate::optimizer::model::VariableLayout;

/// Builds the capacity and mutual-exclusivity constraint set.
pub fn build_constraints(layout: &VariableLayout, capacity: &DepotCapacity) -> Vec<Constraint> {
    let n = layout.n_trainsets();
    let s = layout.n_slots();
    let b = layout.n_bays();
    let mut constraints = Vec::with_capacity(n + s + b + 1);

    // Exclusivity: each trainset takes at most one position anywhere.
    for t in 0..n {
        let mut total = Expression::from(0.0);
        for slot in 0..s {
            total = total + layout.service_var(t, slot);
        }
        for bay in 0..b {
            total = total + layout.bay_var(t, bay);
        }
        let total = total + layout.ibl_var(t);
        constraints.push(constraint!(total <= 1.0));
    }

    // Slot capacity: at most one trainset per service slot.
    for slot in 0..s {
        let mut occupancy = Expression::from(0.0);
        for t in 0..n {
            occupancy = occupancy + layout.service_var(t, slot);
        }
        constraints.push(constraint!(occupancy <= 1.0));
    }

    // Bay capacity: at most one trainset per maintenance bay.
    for bay in 0..b {
        let mut occupancy = Expression::from(0.0);
        for t in 0..n {
            occupancy = occupancy + layout.bay_var(t, bay);
        }
        constraints.push(constraint!(occupancy <= 1.0));
    }

    // Fleet-wide IBL capacity.
    let ibl_cap = capacity.ibl_capacity as f64;
    let mut ibl_total = Expression::from(0.0);
    for t in 0..n {
        ibl_total = ibl_total + layout.ibl_var(t);
    }
    constraints.push(constraint!(ibl_total <= ibl_cap));

    constraints
}
