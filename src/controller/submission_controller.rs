use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::configuration::MessageSettings;
use crate::domain::{ButtonState, MessageKind, SubscriberEmail, is_form_whitespace};
use crate::presenter::{NotificationPresenter, PresentationPort};
use crate::store::LocalEmailStore;
use crate::submission_service::SubmissionService;

use super::errors::SubmitError;
use super::types::{Phase, SubmissionState, SubmitOutcome};

/// Drives the signup form: validation, the submit trigger, the remote call,
/// local persistence and the status message.
pub struct SubmissionController {
    service: Arc<dyn SubmissionService>,
    store: LocalEmailStore,
    presenter: NotificationPresenter,
    page: Arc<dyn PresentationPort>,
    messages: MessageSettings,
    state: Mutex<SubmissionState>,
}

/// Re-enables the trigger when dropped, whichever way the attempt ends.
struct TriggerGuard<'a> {
    controller: &'a SubmissionController,
}

impl Drop for TriggerGuard<'_> {
    fn drop(&mut self) {
        self.controller.restore_trigger();
    }
}

impl SubmissionController {
    pub fn new(
        service: Arc<dyn SubmissionService>,
        store: LocalEmailStore,
        presenter: NotificationPresenter,
        page: Arc<dyn PresentationPort>,
        messages: MessageSettings,
    ) -> Self {
        let state = SubmissionState::new(&messages.button_label);
        Self {
            service,
            store,
            presenter,
            page,
            messages,
            state: Mutex::new(state),
        }
    }

    pub fn set_input(&self, value: &str) {
        self.lock().input = value.to_owned();
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().phase == Phase::Submitting
    }

    pub fn presenter(&self) -> &NotificationPresenter {
        &self.presenter
    }

    /// Activates the trigger with whatever the input field currently holds.
    pub async fn submit_current_input(&self) -> SubmitOutcome {
        let input = self.input();
        self.handle_submit(&input).await
    }

    #[tracing::instrument(
        name = "Handling a signup submission",
        skip(self, raw_input),
        fields(
            attempt_id = %Uuid::new_v4(),
            subscriber_email = tracing::field::Empty
        )
    )]
    pub async fn handle_submit(&self, raw_input: &str) -> SubmitOutcome {
        if self.is_submitting() {
            tracing::debug!("A submission is already in flight, ignoring activation.");
            return SubmitOutcome::Ignored;
        }

        let input = raw_input.trim_matches(is_form_whitespace);
        let email = match SubscriberEmail::parse(input.to_owned()) {
            Ok(email) => email,
            Err(e) => {
                let e = SubmitError::ValidationError(e);
                tracing::info!(error.message = %e, "Rejected an invalid email address.");
                self.presenter
                    .show(MessageKind::Error, &self.messages.invalid_email);
                return SubmitOutcome::Rejected;
            }
        };
        tracing::Span::current().record("subscriber_email", tracing::field::display(&email));

        let Some(_trigger) = self.begin_submitting() else {
            return SubmitOutcome::Ignored;
        };

        match self
            .service
            .submit(&email)
            .await
            .map_err(SubmitError::SubmissionFailed)
        {
            Ok(()) => {
                self.presenter.show(MessageKind::Success, &self.messages.success);
                self.clear_input();
                self.store.add(&email);
                SubmitOutcome::Subscribed
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to submit the signup."
                );
                self.presenter.show(MessageKind::Error, &self.messages.failure);
                SubmitOutcome::Failed
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_submitting(&self) -> Option<TriggerGuard<'_>> {
        let mut state = self.lock();
        if state.phase == Phase::Submitting {
            return None;
        }
        state.phase = Phase::Submitting;
        state.button = ButtonState::busy(&self.messages.busy_label);
        self.page.render_button_state(&state.button);

        Some(TriggerGuard { controller: self })
    }

    fn restore_trigger(&self) {
        let mut state = self.lock();
        state.phase = Phase::Idle;
        state.button = ButtonState::enabled(&self.messages.button_label);
        self.page.render_button_state(&state.button);
    }

    fn clear_input(&self) {
        self.lock().input.clear();
        self.page.clear_input();
    }
}
