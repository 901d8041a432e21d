//! Plan quality metrics (KPIs).
//!
//! Computes depot-level indicators from a finished induction plan and the
//! fleet snapshot it was solved against.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Disposition counts | Trainsets per Service/Maintenance/IBL/Standby |
//! | Slot utilization | Service assignments / service slots |
//! | Bay utilization | Maintenance assignments / maintenance bays |
//! | IBL utilization | IBL assignments / IBL capacity |
//! | Branding hours inducted | Σ branding hours of trainsets in service |

use crate::models::{DepotCapacity, Disposition, FleetSnapshot, InductionPlan};

/// Induction plan performance indicators.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Trainsets assigned to revenue service.
    pub service_count: usize,
    /// Trainsets assigned to maintenance bays.
    pub maintenance_count: usize,
    /// Trainsets held in IBL.
    pub ibl_count: usize,
    /// Trainsets left on standby.
    pub standby_count: usize,
    /// Fraction of service slots used (0.0..1.0; 0.0 when no slots exist).
    pub slot_utilization: f64,
    /// Fraction of maintenance bays used.
    pub bay_utilization: f64,
    /// Fraction of IBL capacity used.
    pub ibl_utilization: f64,
    /// Total branding exposure hours inducted into service.
    pub branding_hours_inducted: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan, its fleet snapshot, and the capacities.
    pub fn calculate(plan: &InductionPlan, fleet: &FleetSnapshot, capacity: &DepotCapacity) -> Self {
        let service_count = plan.count(Disposition::Service);
        let maintenance_count = plan.count(Disposition::Maintenance);
        let ibl_count = plan.count(Disposition::Ibl);
        let standby_count = plan.count(Disposition::Standby);

        let ratio = |used: usize, total: usize| {
            if total == 0 {
                0.0
            } else {
                used as f64 / total as f64
            }
        };

        let branding_hours_inducted = plan
            .with_disposition(Disposition::Service)
            .iter()
            .filter_map(|a| fleet.get(&a.trainset_id))
            .map(|ts| ts.branding_hours_left)
            .sum();

        Self {
            service_count,
            maintenance_count,
            ibl_count,
            standby_count,
            slot_utilization: ratio(service_count, capacity.service_slots),
            bay_utilization: ratio(maintenance_count, capacity.maintenance_bays),
            ibl_utilization: ratio(ibl_count, capacity.ibl_capacity),
            branding_hours_inducted,
        }
    }
}
