//! Objective-function assembly.
//!
//! Builds a single linear maximization expression from the weight
//! configuration:
//! - every (trainset, service slot) variable carries the trainset's
//!   service coefficient (readiness + branding + mileage balance + negated
//!   minimum shunt cost, each scaled by its weight),
//! - every IBL indicator carries the flat `ibl_penalty` weight,
//! - bay-assignment variables carry no coefficient. Maintenance itself
//!   earns no operational score; the asymmetry is deliberate and must not
//!   be "fixed" by adding a bay term.
//!
//! The fleet average mileage is computed once per solve and used as the
//! normalization constant for the mileage-balance term.

use std::collections::HashMap;

use good_lp::{Expression, Variable};

use crate::models::{Disposition, FleetSnapshot, InductionPlan, ObjectiveWeights, Trainset};
use crate::optimizer::model::VariableLayout;

/// The assembled objective: one (variable, coefficient) term per scored
/// variable.
///
/// Keeping the term list alongside the expression lets the achieved
/// objective be evaluated directly from solved variable values, independent
/// of any backend accessor.
#[derive(Debug, Clone)]
pub struct ObjectiveTerms {
    terms: Vec<(Variable, f64)>,
}

impl ObjectiveTerms {
    /// Assembles the objective terms for one solve.
    pub fn build(
        layout: &VariableLayout,
        fleet: &FleetSnapshot,
        weights: &ObjectiveWeights,
    ) -> Self {
        let avg_mileage = fleet.avg_mileage();
        let mut terms = Vec::new();

        for (t, ts) in fleet.iter().enumerate() {
            let coefficient = service_coefficient(ts, avg_mileage, weights);
            for slot in 0..layout.n_slots() {
                terms.push((layout.service_var(t, slot), coefficient));
            }
            // Bay variables intentionally carry no term.
            terms.push((layout.ibl_var(t), weights.ibl_penalty));
        }

        Self { terms }
    }

    /// Number of scored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no variable is scored.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The linear maximization expression.
    pub fn expression(&self) -> Expression {
        self.terms
            .iter()
            .fold(Expression::from(0.0), |acc, (var, coeff)| {
                acc + *coeff * *var
            })
    }

    /// Evaluates the objective against solved variable values.
    ///
    /// Variables absent from `values` contribute nothing.
    pub fn eval(&self, values: &HashMap<Variable, f64>) -> f64 {
        self.terms
            .iter()
            .map(|(var, coeff)| coeff * values.get(var).copied().unwrap_or(0.0))
            .sum()
    }
}

/// Objective coefficient of one trainset occupying any service slot.
///
/// The coefficient is slot-independent: it depends only on the trainset's
/// attributes and the fleet average mileage.
pub fn service_coefficient(ts: &Trainset, avg_mileage: f64, weights: &ObjectiveWeights) -> f64 {
    let readiness = if ts.is_on_time() {
        weights.service_ready
    } else {
        0.0
    };
    let branding = weights.branding * ts.branding_hours_left;
    // +1 guards against division by zero and caps the term at the weight.
    let mileage_gap = (ts.current_mileage as f64 - avg_mileage).abs();
    let balance = weights.mileage_balance / (mileage_gap + 1.0);
    let shunt = weights.shunt_cost * -ts.min_shunt_cost();

    readiness + branding + balance + shunt
}

/// Recomputes the objective value from an extracted plan.
///
/// Sums each trainset's contribution per its disposition: the service
/// coefficient for `Service`, the flat IBL penalty for `Ibl`, and zero for
/// `Maintenance` and `Standby`. For any optimal plan this equals the
/// solver-reported objective within floating-point tolerance, which makes
/// it the independent verification path for solve results.
pub fn recompute_objective(
    plan: &InductionPlan,
    fleet: &FleetSnapshot,
    weights: &ObjectiveWeights,
) -> f64 {
    let avg_mileage = fleet.avg_mileage();
    plan.assignments
        .iter()
        .map(|a| match a.disposition {
            Disposition::Service => fleet
                .get(&a.trainset_id)
                .map(|ts| service_coefficient(ts, avg_mileage, weights))
                .unwrap_or(0.0),
            Disposition::Ibl => weights.ibl_penalty,
            Disposition::Maintenance | Disposition::Standby => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, DepotCapacity, TrainsetStatus};
    use crate::optimizer::model::DecisionModel;

    fn sample_fleet() -> FleetSnapshot {
        FleetSnapshot::new(vec![
            Trainset::new("T1")
                .with_mileage(100)
                .with_branding_hours(10.0)
                .with_shunt_cost("Bay_1", 2.0)
                .with_shunt_cost("Bay_2", 5.0),
            Trainset::new("T2")
                .with_status(TrainsetStatus::Delayed)
                .with_mileage(300),
        ])
    }

    #[test]
    fn test_service_coefficient_components() {
        let fleet = sample_fleet();
        let avg = fleet.avg_mileage(); // 200
        let weights = ObjectiveWeights::zero()
            .with_service_ready(5.0)
            .with_branding(2.0)
            .with_mileage_balance(1.0)
            .with_shunt_cost(-1.0);

        let t1 = fleet.get("T1").unwrap();
        // readiness 5 + branding 20 + balance 1/101 + shunt -1 * -2 = 2
        let expected = 5.0 + 20.0 + 1.0 / 101.0 + 2.0;
        assert!((service_coefficient(t1, avg, &weights) - expected).abs() < 1e-10);

        // Delayed trainset earns no readiness reward
        let t2 = fleet.get("T2").unwrap();
        let expected2 = 0.0 + 0.0 + 1.0 / 101.0 + 0.0;
        assert!((service_coefficient(t2, avg, &weights) - expected2).abs() < 1e-10);
    }

    #[test]
    fn test_mileage_term_capped_at_weight() {
        let ts = Trainset::new("T1").with_mileage(500);
        let weights = ObjectiveWeights::zero().with_mileage_balance(3.0);
        // Zero gap → term equals the full weight
        assert!((service_coefficient(&ts, 500.0, &weights) - 3.0).abs() < 1e-10);
        // Any gap strictly reduces it
        assert!(service_coefficient(&ts, 400.0, &weights) < 3.0);
    }

    #[test]
    fn test_terms_cover_service_and_ibl_only() {
        let fleet = sample_fleet();
        let capacity = DepotCapacity::new(3, 2, 1);
        let model = DecisionModel::build(&fleet, &capacity);
        let weights = ObjectiveWeights::zero().with_service_ready(1.0);

        let objective = ObjectiveTerms::build(model.layout(), &fleet, &weights);
        // 2 trainsets × (3 slot terms + 1 ibl term); bay variables unscored
        assert_eq!(objective.len(), 2 * (3 + 1));
    }

    #[test]
    fn test_eval_from_values() {
        let fleet = sample_fleet();
        let capacity = DepotCapacity::new(1, 0, 1);
        let model = DecisionModel::build(&fleet, &capacity);
        let weights = ObjectiveWeights::zero()
            .with_service_ready(5.0)
            .with_ibl_penalty(-10.0);
        let objective = ObjectiveTerms::build(model.layout(), &fleet, &weights);

        // T1 into the slot, T2 into IBL
        let mut values = HashMap::new();
        values.insert(model.layout().service_var(0, 0), 1.0);
        values.insert(model.layout().ibl_var(1), 1.0);
        assert!((objective.eval(&values) - (5.0 - 10.0)).abs() < 1e-10);
    }

    #[test]
    fn test_recompute_objective() {
        let fleet = sample_fleet();
        let weights = ObjectiveWeights::zero()
            .with_service_ready(5.0)
            .with_ibl_penalty(-10.0);
        let plan = InductionPlan::new(
            vec![
                Assignment::service("T1", "Service_1"),
                Assignment::ibl("T2"),
            ],
            -5.0,
        );
        assert!((recompute_objective(&plan, &fleet, &weights) - (5.0 - 10.0)).abs() < 1e-10);
    }

    #[test]
    fn test_recompute_maintenance_and_standby_are_zero() {
        let fleet = sample_fleet();
        let weights = ObjectiveWeights::zero()
            .with_service_ready(5.0)
            .with_branding(2.0);
        let plan = InductionPlan::new(
            vec![
                Assignment::maintenance("T1", "Bay_1"),
                Assignment::standby("T2"),
            ],
            0.0,
        );
        assert_eq!(recompute_objective(&plan, &fleet, &weights), 0.0);
    }
}
