//! Stand-in collaborator that fakes network latency and the odd failure

use super::traits::{SubmissionOutcome, Submitter};
use crate::state::FormSnapshot;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Default share of submissions that fail
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

pub struct SimulatedSubmitter {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_FAILURE_RATE)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            name = snapshot.name(),
            email = snapshot.email(),
            phone = snapshot.phone(),
            address = snapshot.address(),
            project_type = ?snapshot.project_type(),
            want_site_visit = snapshot.want_site_visit(),
            "Form submitted"
        );

        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            SubmissionOutcome::Failure("Simulated submission error".to_string())
        } else {
            SubmissionOutcome::Success
        }
    }
}
