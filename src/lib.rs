//! Nightly trainset induction planning.
//!
//! Computes an induction plan for a fleet of trainsets: each trainset is
//! assigned to exactly one of revenue service, a maintenance bay, or
//! isolation holding (IBL) — or left on standby — subject to finite slot,
//! bay, and IBL capacity, maximizing a weighted multi-criteria objective
//! (service readiness, branding exposure, mileage balancing, shunt
//! logistics, isolation penalty).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Trainset`, `FleetSnapshot`,
//!   `DepotCapacity`, `ObjectiveWeights`, `InductionPlan`
//! - **`validation`**: Pre-solve input integrity checks
//! - **`optimizer`**: The MILP assignment engine and plan KPIs
//! - **`synthetic`**: Seeded synthetic fleet generation
//! - **`risk`**: Withdrawal-risk scoring with feature attribution
//! - **`jobs`**: Keyed job registry for asynchronous solve fronting
//!
//! # Architecture
//!
//! The optimizer delegates the combinatorial search to a MILP backend
//! behind a narrow adapter (build model → solve → status + values), so any
//! MILP-capable solver can be substituted without touching constraint or
//! objective construction. Everything around it — the HTTP layer, job
//! queuing, persistence — lives with the caller.
//!
//! # Example
//!
//! ```
//! use fleet_induction::models::{DepotCapacity, FleetSnapshot, ObjectiveWeights};
//! use fleet_induction::optimizer::InductionOptimizer;
//! use fleet_induction::synthetic::generate_fleet;
//!
//! let fleet = FleetSnapshot::new(generate_fleet(8, 4, 42));
//! let capacity = DepotCapacity::new(3, 2, 1);
//! let weights = ObjectiveWeights::zero()
//!     .with_service_ready(5.0)
//!     .with_branding(2.0)
//!     .with_shunt_cost(-1.0)
//!     .with_ibl_penalty(-10.0);
//!
//! let plan = InductionOptimizer::new()
//!     .solve(&fleet, &capacity, &weights)
//!     .unwrap();
//! assert_eq!(plan.len(), 8);
//! assert!(plan.verify(&capacity).is_empty());
//! ```

pub mod jobs;
pub mod models;
pub mod optimizer;
pub mod risk;
pub mod synthetic;
pub mod validation;
