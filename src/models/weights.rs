//! Objective weight configuration.
//!
//! The objective is a weighted sum over five named criteria. Any weight
//! left unset contributes nothing (0.0). Negative weights are meaningful:
//! the conventional configuration uses a negative `shunt_cost` weight to
//! penalize long shunting moves and a negative `ibl_penalty` to discourage
//! isolation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named coefficients of the induction objective.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    /// Reward per on-time trainset placed into a service slot.
    #[serde(default)]
    pub service_ready: f64,
    /// Reward per remaining branding hour of a trainset placed into service.
    #[serde(default)]
    pub branding: f64,
    /// Reward scaled by closeness to the fleet average mileage.
    #[serde(default)]
    pub mileage_balance: f64,
    /// Applied to the negated minimum shunting cost of a trainset placed
    /// into service; negative values penalize long moves.
    #[serde(default)]
    pub shunt_cost: f64,
    /// Flat coefficient on every IBL assignment, independent of trainset.
    #[serde(default)]
    pub ibl_penalty: f64,
}

impl ObjectiveWeights {
    /// All-zero weights (no criterion contributes).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds weights from a name → value map.
    ///
    /// Recognized keys: `service_ready`, `branding`, `mileage_balance`,
    /// `shunt_cost`, `ibl_penalty`. Unrecognized keys are ignored; missing
    /// keys default to 0.0.
    pub fn from_map(map: &HashMap<String, f64>) -> Self {
        let get = |key: &str| map.get(key).copied().unwrap_or(0.0);
        Self {
            service_ready: get("service_ready"),
            branding: get("branding"),
            mileage_balance: get("mileage_balance"),
            shunt_cost: get("shunt_cost"),
            ibl_penalty: get("ibl_penalty"),
        }
    }

    /// Sets the service-readiness weight.
    pub fn with_service_ready(mut self, w: f64) -> Self {
        self.service_ready = w;
        self
    }

    /// Sets the branding weight.
    pub fn with_branding(mut self, w: f64) -> Self {
        self.branding = w;
        self
    }

    /// Sets the mileage-balance weight.
    pub fn with_mileage_balance(mut self, w: f64) -> Self {
        self.mileage_balance = w;
        self
    }

    /// Sets the shunt-cost weight.
    pub fn with_shunt_cost(mut self, w: f64) -> Self {
        self.shunt_cost = w;
        self
    }

    /// Sets the IBL penalty weight.
    pub fn with_ibl_penalty(mut self, w: f64) -> Self {
        self.ibl_penalty = w;
        self
    }

    /// Whether every weight is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        [
            self.service_ready,
            self.branding,
            self.mileage_balance,
            self.shunt_cost,
            self.ibl_penalty,
        ]
        .iter()
        .all(|w| w.is_finite())
    }
}
