//! Induction optimization engine.
//!
//! Turns one fleet snapshot, capacity configuration, and weight
//! configuration into an induction plan:
//!
//! 1. Validate the request (before any model construction).
//! 2. Build the three binary variable families.
//! 3. Generate capacity and exclusivity constraints, assemble the weighted
//!    objective (both read only the snapshot and are independent).
//! 4. Invoke the MILP backend.
//! 5. Extract one disposition record per trainset.
//!
//! Model construction is a pure, deterministic transformation of the
//! snapshot and configuration; the solver call is synchronous and owns its
//! model exclusively. Concurrent solves each build an independent model
//! and may share the snapshot read-only.

mod constraints;
mod extract;
mod kpi;
mod model;
mod objective;
mod solver;

pub use constraints::build_constraints;
pub use extract::{extract_plan, SET_THRESHOLD};
pub use kpi::PlanKpi;
pub use model::{DecisionModel, VariableLayout};
pub use objective::{recompute_objective, service_coefficient, ObjectiveTerms};
pub use solver::{run_solver, SolveError, SolveOptions, SolveStatus, SolverOutcome};

use tracing::{debug, info};

use crate::models::{DepotCapacity, FleetSnapshot, InductionPlan, ObjectiveWeights};
use crate::validation::validate_request;

/// Input container for one induction solve.
#[derive(Debug, Clone)]
pub struct InductionRequest {
    /// Fleet snapshot to plan.
    pub fleet: FleetSnapshot,
    /// Depot capacities.
    pub capacity: DepotCapacity,
    /// Objective weight configuration.
    pub weights: ObjectiveWeights,
}

impl InductionRequest {
    /// Creates a request with zero weights.
    pub fn new(fleet: FleetSnapshot, capacity: DepotCapacity) -> Self {
        Self {
            fleet,
            capacity,
            weights: ObjectiveWeights::zero(),
        }
    }

    /// Sets the weight configuration.
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Nightly induction optimizer.
///
/// # Example
///
/// ```
/// use fleet_induction::models::{DepotCapacity, FleetSnapshot, ObjectiveWeights, Trainset};
/// use fleet_induction::optimizer::InductionOptimizer;
///
/// let fleet = FleetSnapshot::new(vec![Trainset::new("R001"), Trainset::new("R002")]);
/// let capacity = DepotCapacity::new(1, 1, 1);
/// let weights = ObjectiveWeights::zero().with_service_ready(5.0);
///
/// let optimizer = InductionOptimizer::new();
/// let plan = optimizer.solve(&fleet, &capacity, &weights).unwrap();
/// assert_eq!(plan.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InductionOptimizer {
    options: SolveOptions,
}

impl InductionOptimizer {
    /// Creates an optimizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solver options.
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Computes an induction plan for one fleet snapshot.
    ///
    /// Returns one [`crate::models::Assignment`] per trainset in snapshot
    /// order, plus the achieved objective value. A degenerate solver status
    /// yields an empty plan with objective 0.0 (data, not an error);
    /// validation failures and backend failures are errors.
    pub fn solve(
        &self,
        fleet: &FleetSnapshot,
        capacity: &DepotCapacity,
        weights: &ObjectiveWeights,
    ) -> Result<InductionPlan, SolveError> {
        validate_request(fleet, weights).map_err(SolveError::InvalidConfiguration)?;

        if fleet.is_empty() {
            return Ok(InductionPlan::empty());
        }

        let model = DecisionModel::build(fleet, capacity);
        let constraint_set = build_constraints(model.layout(), capacity);
        let objective = ObjectiveTerms::build(model.layout(), fleet, weights);
        debug!(
            trainsets = fleet.len(),
            variables = model.layout().variable_count(),
            constraints = constraint_set.len(),
            "induction model built"
        );

        let outcome = solver::run_solver(model, constraint_set, &objective, &self.options)?;
        let plan = extract_plan(&outcome, fleet);
        info!(
            status = ?outcome.status,
            objective = plan.objective_value,
            assignments = plan.len(),
            "induction solve finished"
        );

        Ok(plan)
    }

    /// Solves from a request container.
    pub fn solve_request(&self, request: &InductionRequest) -> Result<InductionPlan, SolveError> {
        self.solve(&request.fleet, &request.capacity, &request.weights)
    }
}
