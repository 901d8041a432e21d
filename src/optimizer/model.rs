//! Decision-variable model.
//!
//! One solve builds exactly three binary variable families:
//! - one variable per (trainset, service slot) pair,
//! - one variable per (trainset, maintenance bay) pair,
//! - one IBL indicator per trainset.
//!
//! The IBL family is always created, even at zero IBL capacity; the
//! capacity constraint then forces it to zero. For N trainsets, S slots,
//! and B bays the model therefore holds exactly N·(S+B+1) variables.
//!
//! The model exists only for the lifetime of one solve invocation and is
//! consumed by the solver adapter.

use good_lp::{variable, variables, ProblemVariables, Variable};

use crate::models::{DepotCapacity, FleetSnapshot};

/// Handles to the three variable families, indexed by position.
///
/// Variables are cheap copyable handles into the problem; the layout stays
/// valid after the variable container has been consumed by the solver.
#[derive(Debug, Clone)]
pub struct VariableLayout {
    n_trainsets: usize,
    n_slots: usize,
    n_bays: usize,
    /// Flattened (trainset, slot) grid, row-major by trainset.
    service: Vec<Variable>,
    /// Flattened (trainset, bay) grid, row-major by trainset.
    bay: Vec<Variable>,
    /// One IBL indicator per trainset.
    ibl: Vec<Variable>,
}

impl VariableLayout {
    /// Number of trainsets in the model.
    pub fn n_trainsets(&self) -> usize {
        self.n_trainsets
    }

    /// Number of service slots in the model.
    pub fn n_slots(&self) -> usize {
        self.n_slots
    }

    /// Number of maintenance bays in the model.
    pub fn n_bays(&self) -> usize {
        self.n_bays
    }

    /// The (trainset, slot) indicator variable.
    pub fn service_var(&self, trainset: usize, slot: usize) -> Variable {
        self.service[trainset * self.n_slots + slot]
    }

    /// The (trainset, bay) indicator variable.
    pub fn bay_var(&self, trainset: usize, bay: usize) -> Variable {
        self.bay[trainset * self.n_bays + bay]
    }

    /// The IBL indicator variable for a trainset.
    pub fn ibl_var(&self, trainset: usize) -> Variable {
        self.ibl[trainset]
    }

    /// Total number of decision variables: N·(S+B+1).
    pub fn variable_count(&self) -> usize {
        self.service.len() + self.bay.len() + self.ibl.len()
    }

    /// Iterates every variable handle in the model.
    pub fn iter_all(&self) -> impl Iterator<Item = Variable> + '_ {
        self.service
            .iter()
            .chain(self.bay.iter())
            .chain(self.ibl.iter())
            .copied()
    }
}

/// The variable container plus its layout, ready for constraint and
/// objective assembly.
pub struct DecisionModel {
    vars: ProblemVariables,
    layout: VariableLayout,
}

impl DecisionModel {
    /// Builds the binary variable families for one solve.
    pub fn build(fleet: &FleetSnapshot, capacity: &DepotCapacity) -> Self {
        let n_trainsets = fleet.len();
        let n_slots = capacity.service_slots;
        let n_bays = capacity.maintenance_bays;

        let mut vars = variables!();
        let mut service = Vec::with_capacity(n_trainsets * n_slots);
        let mut bay = Vec::with_capacity(n_trainsets * n_bays);
        let mut ibl = Vec::with_capacity(n_trainsets);

        for _ in 0..n_trainsets {
            for _ in 0..n_slots {
                service.push(vars.add(variable().binary()));
            }
        }
        for _ in 0..n_trainsets {
            for _ in 0..n_bays {
                bay.push(vars.add(variable().binary()));
            }
        }
        for _ in 0..n_trainsets {
            ibl.push(vars.add(variable().binary()));
        }

        Self {
            vars,
            layout: VariableLayout {
                n_trainsets,
                n_slots,
                n_bays,
                service,
                bay,
                ibl,
            },
        }
    }

    /// The variable layout.
    pub fn layout(&self) -> &VariableLayout {
        &self.layout
    }

    /// Splits the model into the solver-consumable container and the layout.
    pub fn into_parts(self) -> (ProblemVariables, VariableLayout) {
        (self.vars, self.layout)
    }
}
