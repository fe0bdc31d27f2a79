//! Trait abstraction for the submission collaborator to enable mocking in tests

use crate::state::FormSnapshot;
use async_trait::async_trait;

/// Result of handing a snapshot to the collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Something that delivers a contact request somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver the snapshot; every error is folded into `Failure`
    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome;
}
