//! Keyed job registry for induction solves.
//!
//! The service layer that fronts the optimizer runs solves asynchronously
//! and needs per-job bookkeeping. This module provides an explicit keyed
//! store — job id → job record — with a defined lifecycle:
//! created as `Pending` on submit, moved to `Running` when a worker picks
//! the job up, and terminally `Completed` (with the plan) or `Failed`
//! (with a message). Records are never evicted automatically; owners
//! remove finished jobs explicitly.
//!
//! The store itself is not thread-safe; callers wrap it in their own
//! synchronization (e.g. a mutex in the service layer). Queuing and retry
//! policy stay with the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::InductionPlan;

/// Unique identifier of one submitted solve job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepted, not yet started.
    Pending,
    /// A worker is solving.
    Running,
    /// Finished with a plan.
    Completed,
    /// Finished with an error.
    Failed,
}

/// One job's bookkeeping record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job identifier.
    pub id: JobId,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// The finished plan; present only when `Completed`.
    pub result: Option<InductionPlan>,
    /// Failure description; present only when `Failed`.
    pub error: Option<String>,
}

/// Explicit keyed store of solve jobs.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: HashMap<JobId, JobRecord>,
}

impl JobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new pending job and returns its id.
    pub fn submit(&mut self) -> JobId {
        let id = JobId::new();
        self.jobs.insert(
            id,
            JobRecord {
                id,
                status: JobStatus::Pending,
                result: None,
                error: None,
            },
        );
        id
    }

    /// Marks a pending job as running.
    ///
    /// Returns `false` if the job is unknown or not pending.
    pub fn start(&mut self, id: JobId) -> bool {
        match self.jobs.get_mut(&id) {
            Some(job) if job.status == JobStatus::Pending => {
                job.status = JobStatus::Running;
                true
            }
            _ => false,
        }
    }

    /// Records a finished plan for a job.
    ///
    /// Returns `false` if the job is unknown or already terminal.
    pub fn complete(&mut self, id: JobId, plan: InductionPlan) -> bool {
        match self.jobs.get_mut(&id) {
            Some(job) if !is_terminal(job.status) => {
                job.status = JobStatus::Completed;
                job.result = Some(plan);
                true
            }
            _ => false,
        }
    }

    /// Records a failure for a job.
    ///
    /// Returns `false` if the job is unknown or already terminal.
    pub fn fail(&mut self, id: JobId, message: impl Into<String>) -> bool {
        match self.jobs.get_mut(&id) {
            Some(job) if !is_terminal(job.status) => {
                job.status = JobStatus::Failed;
                job.error = Some(message.into());
                true
            }
            _ => false,
        }
    }

    /// Looks up a job record.
    pub fn get(&self, id: JobId) -> Option<&JobRecord> {
        self.jobs.get(&id)
    }

    /// Removes a job record, returning it if present.
    pub fn remove(&mut self, id: JobId) -> Option<JobRecord> {
        self.jobs.remove(&id)
    }

    /// Number of tracked jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the store tracks no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn is_terminal(status: JobStatus) -> bool {
    matches!(status, JobStatus::Completed | JobStatus::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, InductionPlan};

    fn sample_plan() -> InductionPlan {
        InductionPlan::new(vec![Assignment::standby("T1")], 0.0)
    }

    #[test]
    fn test_lifecycle_happy_path() {
        let mut store = JobStore::new();
        let id = store.submit();
        assert_eq!(store.get(id).unwrap().status, JobStatus::Pending);

        assert!(store.start(id));
        assert_eq!(store.get(id).unwrap().status, JobStatus::Running);

        assert!(store.complete(id, sample_plan()));
        let job = store.get(id).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert!(job.result.is_some());
        assert!(job.error.is_none());
    }

    #[test]
    fn test_failure_path() {
        let mut store = JobStore::new();
        let id = store.submit();
        store.start(id);
        assert!(store.fail(id, "backend unavailable"));
        let job = store.get(id).unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.error.as_deref(), Some("backend unavailable"));
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut store = JobStore::new();
        let id = store.submit();
        store.complete(id, sample_plan());
        assert!(!store.fail(id, "too late"));
        assert!(!store.start(id));
        assert_eq!(store.get(id).unwrap().status, JobStatus::Completed);
    }

    #[test]
    fn test_unknown_job() {
        let mut store = JobStore::new();
        let stray = JobId::new();
        assert!(store.get(stray).is_none());
        assert!(!store.start(stray));
        assert!(store.remove(stray).is_none());
    }

    #[test]
    fn test_no_automatic_eviction() {
        let mut store = JobStore::new();
        let a = store.submit();
        let b = store.submit();
        store.complete(a, sample_plan());
        store.fail(b, "boom");
        assert_eq!(store.len(), 2);

        assert!(store.remove(a).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_distinct_ids() {
        let mut store = JobStore::new();
        let a = store.submit();
        let b = store.submit();
        assert_ne!(a, b);
    }
}
