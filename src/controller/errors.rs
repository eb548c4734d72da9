use crate::helpers::error_chain_fmt;
use crate::submission_service::SubmissionError;

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to submit the email to the signup service.")]
    SubmissionFailed(#[source] SubmissionError),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
