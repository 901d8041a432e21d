//! Induction planning domain models.
//!
//! Core data types for one nightly induction solve: the fleet snapshot
//! read by the optimizer, depot capacities, the objective weight
//! configuration, and the resulting plan.
//!
//! # Lifecycle
//!
//! A [`FleetSnapshot`] is constructed once per solve from caller-supplied
//! data and never mutated. The decision model exists only for the lifetime
//! of one solve; the returned [`InductionPlan`] is owned by the caller.

mod capacity;
mod plan;
mod trainset;
mod weights;

pub use capacity::DepotCapacity;
pub use plan::{Assignment, Disposition, InductionPlan, PlanViolation, ViolationType};
pub use trainset::{FleetSnapshot, Trainset, TrainsetStatus};
pub use weights::ObjectiveWeights;
