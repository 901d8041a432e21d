//! Depot capacity configuration.
//!
//! Capacities bound the three disposition families: revenue-service slots,
//! maintenance bays, and isolation holding (IBL). All three may be zero;
//! a fleet larger than the total capacity is legal and simply leaves the
//! excess trainsets on standby.

use serde::{Deserialize, Serialize};

/// Capacity configuration for one induction solve.
///
/// Slot and bay identifiers follow a fixed 1-based scheme
/// (`Service_1..Service_S`, `Bay_1..Bay_B`) so assignment locations are
/// stable across solves with the same capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotCapacity {
    /// Number of revenue-service slots.
    pub service_slots: usize,
    /// Number of maintenance bays.
    pub maintenance_bays: usize,
    /// Maximum trainsets held in isolation (IBL).
    pub ibl_capacity: usize,
}

impl DepotCapacity {
    /// Creates a capacity configuration.
    pub fn new(service_slots: usize, maintenance_bays: usize, ibl_capacity: usize) -> Self {
        Self {
            service_slots,
            maintenance_bays,
            ibl_capacity,
        }
    }

    /// Identifier of the service slot at `index` (0-based input, 1-based id).
    pub fn slot_id(index: usize) -> String {
        format!("Service_{}", index + 1)
    }

    /// Identifier of the maintenance bay at `index` (0-based input, 1-based id).
    pub fn bay_id(index: usize) -> String {
        format!("Bay_{}", index + 1)
    }

    /// All service-slot identifiers in order.
    pub fn slot_ids(&self) -> Vec<String> {
        (0..self.service_slots).map(Self::slot_id).collect()
    }

    /// All maintenance-bay identifiers in order.
    pub fn bay_ids(&self) -> Vec<String> {
        (0..self.maintenance_bays).map(Self::bay_id).collect()
    }

    /// Total number of non-standby positions (slots + bays + IBL).
    pub fn total_positions(&self) -> usize {
        self.service_slots + self.maintenance_bays + self.ibl_capacity
    }
}
