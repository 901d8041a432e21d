//! MILP backend adapter.
//!
//! Submits the assembled model to the `good_lp` backend selected at
//! compile time (the pure-Rust `microlp` by default; Cbc or HiGHS
//! substitute via Cargo features without touching model construction) and
//! maps the outcome onto the induction status contract.
//!
//! # Concurrency
//!
//! One invocation owns its model and backend instance exclusively; nothing
//! is shared or reused across solves, so concurrent solves against the
//! same read-only snapshot are safe. The call blocks until the backend
//! returns.
//!
//! # Degenerate outcomes
//!
//! Infeasible and unbounded statuses are returned as data, not errors: the
//! ≤-only constraint model is always feasible and all variables are
//! bounded, so neither should occur under normal configuration, but a
//! caller must still be able to handle them as a legitimate planning
//! outcome. Only an engine-level failure (the backend itself cannot run)
//! is fatal.

use std::collections::HashMap;
use std::time::Duration;

use good_lp::{default_solver, ResolutionError, Solution, SolverModel, Variable};
use tracing::{debug, warn};

use crate::optimizer::model::{DecisionModel, VariableLayout};
use crate::optimizer::objective::ObjectiveTerms;
use crate::validation::ValidationError;

/// Errors that abort a solve.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// The request failed pre-solve validation; no model was constructed.
    #[error("invalid configuration: {} validation error(s)", .0.len())]
    InvalidConfiguration(Vec<ValidationError>),
    /// The solver engine could not be invoked or crashed mid-solve.
    #[error("solver backend unavailable: {0}")]
    SolverUnavailable(String),
}

/// Terminal status of one solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A provably optimal 0/1 assignment was found.
    Optimal,
    /// The backend reported infeasibility (unexpected for this model).
    Infeasible,
    /// The backend reported unboundedness (cannot occur with binary
    /// variables; kept for contract completeness).
    Unbounded,
    /// The deadline expired on a backend that supports interruption.
    Cancelled,
}

/// Options for one solver invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Optional solve deadline. Honored only by backends that support
    /// interruption; the bundled microlp backend does not, in which case
    /// the limit is advisory and callers needing a hard timeout should
    /// isolate the solve on a dedicated worker.
    pub time_limit: Option<Duration>,
}

impl SolveOptions {
    /// Sets the solve deadline.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Raw result of one solver invocation.
#[derive(Debug)]
pub struct SolverOutcome {
    /// Terminal status.
    pub status: SolveStatus,
    /// Solved value per decision variable; empty unless `Optimal`.
    pub values: HashMap<Variable, f64>,
    /// Achieved objective value; 0.0 unless `Optimal`.
    pub objective_value: f64,
    /// Variable layout, for assignment extraction.
    pub layout: VariableLayout,
}

/// Runs the backend on an assembled model.
///
/// Consumes the model: each invocation owns its variable container and
/// backend instance exclusively. On a non-optimal status the outcome
/// carries no variable values and a zero objective.
pub fn run_solver(
    model: DecisionModel,
    constraints: Vec<good_lp::Constraint>,
    objective: &ObjectiveTerms,
    options: &SolveOptions,
) -> Result<SolverOutcome, SolveError> {
    let (vars, layout) = model.into_parts();

    if let Some(limit) = options.time_limit {
        debug!(?limit, "time limit requested; advisory on non-interruptible backends");
    }

    let mut problem = vars.maximise(objective.expression()).using(default_solver);
    for constraint in constraints {
        problem = problem.with(constraint);
    }

    match problem.solve() {
        Ok(solution) => {
            let values: HashMap<Variable, f64> = layout
                .iter_all()
                .map(|var| (var, solution.value(var)))
                .collect();
            let objective_value = objective.eval(&values);
            Ok(SolverOutcome {
                status: SolveStatus::Optimal,
                values,
                objective_value,
                layout,
            })
        }
        Err(ResolutionError::Infeasible) => {
            warn!("solver reported infeasible despite <=-only constraint model");
            Ok(SolverOutcome::degenerate(SolveStatus::Infeasible, layout))
        }
        Err(ResolutionError::Unbounded) => {
            warn!("solver reported unbounded on a fully-bounded binary model");
            Ok(SolverOutcome::degenerate(SolveStatus::Unbounded, layout))
        }
        Err(err) => Err(SolveError::SolverUnavailable(err.to_string())),
    }
}

impl SolverOutcome {
    fn degenerate(status: SolveStatus, layout: VariableLayout) -> Self {
        Self {
            status,
            values: HashMap::new(),
            objective_value: 0.0,
            layout,
        }
    }
}
