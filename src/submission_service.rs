use std::time::Duration;

use async_trait::async_trait;

use crate::domain::SubscriberEmail;
use crate::helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("The signup was rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Remote endpoint that registers interest in the launch.
///
/// Callers must treat every implementation as fallible, even
/// [`SimulatedSubmissionService`] which never fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, email: &SubscriberEmail) -> Result<(), SubmissionError>;
}

/// Stand-in for the signup API: waits for `delay`, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionService {
    delay: Duration,
}

impl SimulatedSubmissionService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionService for SimulatedSubmissionService {
    #[tracing::instrument(name = "Submitting email to the signup API", skip(self))]
    async fn submit(&self, email: &SubscriberEmail) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(subscriber_email = %email, "Email submitted.");
        Ok(())
    }
}
