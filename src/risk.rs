//! Withdrawal-risk scoring.
//!
//! Estimates the probability that a trainset will need to be withdrawn
//! from service, plus a per-feature attribution of that estimate. Both are
//! pure, deterministic functions of the fleet snapshot — no trained model,
//! no ambient randomness — so the same snapshot always scores the same.
//!
//! The score is a fixed-weight linear combination of normalized features
//! squashed through a logistic to [0, 1]. The attribution map reports each
//! feature's signed contribution to the raw (pre-squash) score; the
//! contributions plus the bias reproduce the raw score exactly.

use std::collections::HashMap;

use crate::models::{FleetSnapshot, Trainset};

/// Feature names reported in attribution maps.
pub const RISK_FEATURES: &[&str] = &["delayed", "branding_backlog", "mileage_deviation", "shunt_cost"];

const W_DELAYED: f64 = 1.2;
const W_BRANDING: f64 = 0.8;
const W_MILEAGE: f64 = 1.0;
const W_SHUNT: f64 = 0.4;
const BIAS: f64 = -2.0;

/// Branding backlog saturates at this many hours.
const BRANDING_SCALE: f64 = 48.0;
/// Mileage deviation saturates at this distance from the fleet average.
const MILEAGE_SCALE: f64 = 50_000.0;
/// Shunt cost saturates at this value.
const SHUNT_SCALE: f64 = 10.0;

fn saturate(value: f64, scale: f64) -> f64 {
    (value / scale).clamp(0.0, 1.0)
}

fn raw_contributions(ts: &Trainset, avg_mileage: f64) -> [(f64, f64); 4] {
    let delayed = if ts.is_on_time() { 0.0 } else { 1.0 };
    let branding = saturate(ts.branding_hours_left, BRANDING_SCALE);
    let mileage = saturate((ts.current_mileage as f64 - avg_mileage).abs(), MILEAGE_SCALE);
    let shunt = saturate(ts.min_shunt_cost(), SHUNT_SCALE);

    [
        (delayed, W_DELAYED),
        (branding, W_BRANDING),
        (mileage, W_MILEAGE),
        (shunt, W_SHUNT),
    ]
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Withdrawal probability in [0, 1] for one trainset.
pub fn withdrawal_risk(ts: &Trainset, fleet: &FleetSnapshot) -> f64 {
    let raw: f64 = raw_contributions(ts, fleet.avg_mileage())
        .iter()
        .map(|(x, w)| x * w)
        .sum();
    logistic(BIAS + raw)
}

/// Withdrawal probabilities for the whole fleet, keyed by trainset id.
pub fn fleet_withdrawal_risk(fleet: &FleetSnapshot) -> HashMap<String, f64> {
    fleet
        .iter()
        .map(|ts| (ts.id.clone(), withdrawal_risk(ts, fleet)))
        .collect()
}

/// Per-feature contributions to a trainset's raw risk score.
///
/// Returns `None` for an unknown trainset id. The values are signed
/// contributions in raw-score space (pre-squash): summing them and adding
/// the model bias gives the logit of [`withdrawal_risk`].
pub fn explain_risk(fleet: &FleetSnapshot, trainset_id: &str) -> Option<HashMap<String, f64>> {
    let ts = fleet.get(trainset_id)?;
    let contributions = raw_contributions(ts, fleet.avg_mileage());

    Some(
        RISK_FEATURES
            .iter()
            .zip(contributions.iter())
            .map(|(name, (x, w))| ((*name).to_string(), x * w))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainsetStatus;

    fn sample_fleet() -> FleetSnapshot {
        FleetSnapshot::new(vec![
            Trainset::new("calm").with_mileage(100_000),
            Trainset::new("risky")
                .with_status(TrainsetStatus::Delayed)
                .with_mileage(200_000)
                .with_branding_hours(48.0)
                .with_shunt_cost("Bay_1", 12.0),
        ])
    }

    #[test]
    fn test_probability_bounds() {
        let fleet = sample_fleet();
        for ts in fleet.iter() {
            let p = withdrawal_risk(ts, &fleet);
            assert!((0.0..=1.0).contains(&p), "p={p} out of range");
        }
    }

    #[test]
    fn test_risky_scores_higher() {
        let fleet = sample_fleet();
        let calm = withdrawal_risk(fleet.get("calm").unwrap(), &fleet);
        let risky = withdrawal_risk(fleet.get("risky").unwrap(), &fleet);
        assert!(risky > calm);
    }

    #[test]
    fn test_deterministic() {
        let fleet = sample_fleet();
        let a = fleet_withdrawal_risk(&fleet);
        let b = fleet_withdrawal_risk(&fleet);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_attribution_sums_to_logit() {
        let fleet = sample_fleet();
        let p = withdrawal_risk(fleet.get("risky").unwrap(), &fleet);
        let contributions = explain_risk(&fleet, "risky").unwrap();

        let raw: f64 = contributions.values().sum();
        let reproduced = 1.0 / (1.0 + (-(BIAS + raw)).exp());
        assert!((reproduced - p).abs() < 1e-10);
        assert_eq!(contributions.len(), RISK_FEATURES.len());
    }

    #[test]
    fn test_unknown_trainset() {
        let fleet = sample_fleet();
        assert!(explain_risk(&fleet, "ghost").is_none());
    }

    #[test]
    fn test_saturation() {
        // Extreme attributes never push a feature past its weight
        let fleet = FleetSnapshot::new(vec![Trainset::new("extreme")
            .with_status(TrainsetStatus::Delayed)
            .with_mileage(10_000_000)
            .with_branding_hours(10_000.0)
            .with_shunt_cost("Bay_1", 1_000.0)]);
        let contributions = explain_risk(&fleet, "extreme").unwrap();
        assert!((contributions["branding_backlog"] - W_BRANDING).abs() < 1e-10);
        assert!((contributions["shunt_cost"] - W_SHUNT).abs() < 1e-10);
    }
}
