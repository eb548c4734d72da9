use crate::domain::ButtonState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Form state for the attempt currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    pub phase: Phase,
    pub input: String,
    pub button: ButtonState,
}

impl SubmissionState {
    pub fn new(button_label: &str) -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            button: ButtonState::enabled(button_label),
        }
    }
}

/// What a single activation of the submit trigger led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Subscribed,
    Rejected,
    Failed,
    /// The trigger was disabled by an outstanding attempt.
    Ignored,
}
