//! Trainset model and fleet snapshot.
//!
//! A trainset is one physical train unit being scheduled for the next
//! operating day. A [`FleetSnapshot`] is the immutable view of the whole
//! fleet that one solve invocation reads; it is never mutated during a
//! solve and may be shared read-only across concurrent solves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One physical train unit.
///
/// All attributes are captured at snapshot time and stay fixed for the
/// duration of a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainset {
    /// Unique trainset identifier (e.g., "R001").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Punctuality status on the current operating day.
    pub status: TrainsetStatus,
    /// Odometer reading (km-equivalent).
    pub current_mileage: i64,
    /// Contractual sponsor-livery hours still to be run (non-negative).
    pub branding_hours_left: f64,
    /// Bay where the trainset is currently stabled.
    pub home_bay: Option<String>,
    /// Shunting cost to each maintenance bay (bay id → non-negative cost).
    pub shunt_cost_to_bays: HashMap<String, f64>,
}

/// Punctuality classification of a trainset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainsetStatus {
    /// Running to schedule; eligible for the service-readiness reward.
    OnTime,
    /// Running late; earns no service-readiness contribution.
    Delayed,
}

impl Trainset {
    /// Creates a new on-time trainset with zeroed attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            status: TrainsetStatus::OnTime,
            current_mileage: 0,
            branding_hours_left: 0.0,
            home_bay: None,
            shunt_cost_to_bays: HashMap::new(),
        }
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the punctuality status.
    pub fn with_status(mut self, status: TrainsetStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the odometer reading.
    pub fn with_mileage(mut self, mileage: i64) -> Self {
        self.current_mileage = mileage;
        self
    }

    /// Sets the remaining branding exposure hours.
    pub fn with_branding_hours(mut self, hours: f64) -> Self {
        self.branding_hours_left = hours;
        self
    }

    /// Sets the current stabling bay.
    pub fn with_home_bay(mut self, bay: impl Into<String>) -> Self {
        self.home_bay = Some(bay.into());
        self
    }

    /// Sets the shunting cost to a single bay.
    pub fn with_shunt_cost(mut self, bay: impl Into<String>, cost: f64) -> Self {
        self.shunt_cost_to_bays.insert(bay.into(), cost);
        self
    }

    /// Whether the trainset is on time.
    #[inline]
    pub fn is_on_time(&self) -> bool {
        self.status == TrainsetStatus::OnTime
    }

    /// Cheapest shunting cost over all bays.
    ///
    /// Returns 0.0 when no shunt costs are recorded, so a trainset without
    /// logistics data contributes nothing to the shunt-cost term.
    pub fn min_shunt_cost(&self) -> f64 {
        self.shunt_cost_to_bays
            .values()
            .copied()
            .fold(None, |min: Option<f64>, c| {
                Some(min.map_or(c, |m| m.min(c)))
            })
            .unwrap_or(0.0)
    }
}

/// Read-only view of the fleet for one solve invocation.
///
/// Constructed once per solve from caller-supplied data. Iteration order is
/// the caller's insertion order; output assignments follow it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    trainsets: Vec<Trainset>,
}

impl FleetSnapshot {
    /// Creates a snapshot from a list of trainsets.
    pub fn new(trainsets: Vec<Trainset>) -> Self {
        Self { trainsets }
    }

    /// Number of trainsets.
    pub fn len(&self) -> usize {
        self.trainsets.len()
    }

    /// Whether the fleet is empty.
    pub fn is_empty(&self) -> bool {
        self.trainsets.is_empty()
    }

    /// Iterates trainsets in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &Trainset> {
        self.trainsets.iter()
    }

    /// Trainsets as a slice.
    pub fn trainsets(&self) -> &[Trainset] {
        &self.trainsets
    }

    /// Finds a trainset by id.
    pub fn get(&self, id: &str) -> Option<&Trainset> {
        self.trainsets.iter().find(|t| t.id == id)
    }

    /// Fleet average odometer reading.
    ///
    /// Computed once per solve and used as the normalization constant for
    /// the mileage-balance objective term. 0.0 for an empty fleet.
    pub fn avg_mileage(&self) -> f64 {
        if self.trainsets.is_empty() {
            return 0.0;
        }
        let total: i64 = self.trainsets.iter().map(|t| t.current_mileage).sum();
        total as f64 / self.trainsets.len() as f64
    }
}
