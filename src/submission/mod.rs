//! Submission collaborators for the contact form

mod resend;
mod simulated;
mod traits;

pub use resend::{ResendSubmitter, DEFAULT_ENDPOINT};
pub use simulated::SimulatedSubmitter;
pub use traits::{SubmissionOutcome, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;

use crate::config::{SiteConfig, SubmitterKind};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Duration;

/// Build the collaborator selected by the configuration
pub fn from_config(config: &SiteConfig) -> Result<Arc<dyn Submitter>> {
    match config.submitter_kind() {
        SubmitterKind::Simulated => {
            let delay = config
                .simulated_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(simulated::DEFAULT_DELAY);
            let failure_rate = config
                .simulated_failure_rate
                .unwrap_or(simulated::DEFAULT_FAILURE_RATE);
            let submitter = SimulatedSubmitter::new(delay, failure_rate);
            tracing::info!(
                "Using simulated submitter ({delay:?}, failure rate {})",
                submitter.failure_rate()
            );
            Ok(Arc::new(submitter))
        }
        SubmitterKind::Resend => {
            let api_key = config
                .resend_api_key
                .clone()
                .ok_or_else(|| anyhow!("Resend submitter needs RESEND_API_KEY or resend_api_key"))?;
            let to = config
                .mail_to
                .clone()
                .ok_or_else(|| anyhow!("Resend submitter needs mail_to"))?;
            let from = config
                .mail_from
                .clone()
                .unwrap_or_else(|| "onboarding@resend.dev".to_string());
            let endpoint = config
                .resend_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
            tracing::info!("Using Resend submitter at {endpoint}");
            Ok(Arc::new(ResendSubmitter::new(endpoint, api_key, from, to)?))
        }
    }
}
