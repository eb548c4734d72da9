mod errors;
mod submission_controller;
mod types;

pub use errors::SubmitError;
pub use submission_controller::SubmissionController;
pub use types::{Phase, SubmissionState, SubmitOutcome};
