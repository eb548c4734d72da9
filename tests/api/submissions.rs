use std::sync::Arc;
use std::time::Duration;

use claims::assert_err;
use launchlist::controller::{Phase, SubmitOutcome};
use launchlist::domain::{ButtonState, MessageKind};
use launchlist::store::KeyValueStore;

use crate::helpers::{
    GatedService, NeverRespondingService, PanickingService, StubService, spawn_app,
    spawn_app_with,
};

#[tokio::test(start_paused = true)]
async fn a_valid_email_is_submitted_stored_and_confirmed() {
    let app = spawn_app().await;

    let outcome = app.post_signup("user@example.com").await;

    assert_eq!(outcome, SubmitOutcome::Subscribed);
    assert_eq!(app.stored_emails(), vec!["user@example.com"]);
    assert_eq!(app.controller.input(), "");
    assert_eq!(app.page.input_clears(), 1);
    assert_eq!(app.page.shown(MessageKind::Success), vec![app.messages.success.clone()]);
}

#[tokio::test(start_paused = true)]
async fn an_invalid_email_is_rejected_without_calling_the_service() {
    let service = StubService::succeeding();
    let app = spawn_app_with(service.clone()).await;

    let outcome = app.post_signup("not-an-email").await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(service.calls(), 0);
    assert!(app.stored_emails().is_empty());
    assert!(app.page.buttons().is_empty());
    assert_eq!(app.controller.input(), "not-an-email");
    assert_eq!(
        app.page.shown(MessageKind::Error),
        vec![app.messages.invalid_email.clone()]
    );
}

#[tokio::test(start_paused = true)]
async fn blank_input_is_rejected() {
    let service = StubService::succeeding();
    let app = spawn_app_with(service.clone()).await;

    let test_cases = vec![("", "empty input"), ("   \t ", "whitespace only")];

    for (input, description) in test_cases {
        let outcome = app.post_signup(input).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected,
            "The form did not reject the signup when the input was {}.",
            description
        );
    }
    assert_eq!(service.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn submitting_the_same_email_twice_stores_it_once() {
    let app = spawn_app().await;

    assert_eq!(app.post_signup("user@example.com").await, SubmitOutcome::Subscribed);
    assert_eq!(app.post_signup("user@example.com").await, SubmitOutcome::Subscribed);

    assert_eq!(app.stored_emails(), vec!["user@example.com"]);
    assert_eq!(app.page.shown(MessageKind::Success).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn distinct_emails_are_stored_in_submission_order() {
    let app = spawn_app().await;

    app.post_signup("first@example.com").await;
    app.post_signup("second@example.com").await;

    assert_eq!(
        app.stored_emails(),
        vec!["first@example.com", "second@example.com"]
    );
}

#[tokio::test(start_paused = true)]
async fn a_failed_submission_shows_an_error_and_re_enables_the_trigger() {
    let service = StubService::failing();
    let app = spawn_app_with(service.clone()).await;

    let outcome = app.post_signup("user@example.com").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(service.calls(), 1);
    assert!(app.stored_emails().is_empty());
    assert_eq!(app.storage.get(app.store.key()).unwrap(), None);
    assert_eq!(app.page.shown(MessageKind::Error), vec![app.messages.failure.clone()]);
    assert_eq!(
        app.last_button(),
        Some(ButtonState::enabled(app.messages.button_label.clone()))
    );
    assert_eq!(app.controller.input(), "user@example.com");
}

#[tokio::test(start_paused = true)]
async fn the_user_can_resubmit_after_a_failure() {
    let app = spawn_app_with(StubService::failing()).await;
    assert_eq!(app.post_signup("user@example.com").await, SubmitOutcome::Failed);

    assert_eq!(app.post_signup("user@example.com").await, SubmitOutcome::Failed);
    assert_eq!(app.page.buttons().len(), 4);
}

#[tokio::test]
async fn activations_while_a_submission_is_outstanding_are_ignored() {
    let service = Arc::new(GatedService::default());
    let app = spawn_app_with(service.clone()).await;

    let controller = app.controller.clone();
    let first = tokio::spawn(async move { controller.handle_submit("user@example.com").await });
    service.started.notified().await;

    assert!(app.controller.is_submitting());
    let messages_before = app.page.messages();
    let second = app.controller.handle_submit("other@example.com").await;

    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(service.calls(), 1);
    assert_eq!(app.page.messages(), messages_before);
    assert_eq!(
        app.page.buttons(),
        vec![ButtonState::busy(app.messages.busy_label.clone())]
    );

    service.release.notify_one();
    assert_eq!(first.await.unwrap(), SubmitOutcome::Subscribed);
    assert_eq!(app.stored_emails(), vec!["user@example.com"]);
    assert_eq!(app.controller.state().phase, Phase::Idle);
}

#[tokio::test]
async fn the_trigger_is_restored_when_the_service_panics() {
    let app = spawn_app_with(Arc::new(PanickingService)).await;

    let controller = app.controller.clone();
    let outcome = tokio::spawn(async move { controller.handle_submit("user@example.com").await }).await;

    assert_err!(outcome);
    assert!(!app.controller.is_submitting());
    assert_eq!(
        app.page.buttons(),
        vec![
            ButtonState::busy(app.messages.busy_label.clone()),
            ButtonState::enabled(app.messages.button_label.clone()),
        ]
    );
    assert!(app.stored_emails().is_empty());
}

#[tokio::test(start_paused = true)]
async fn the_trigger_is_restored_when_the_attempt_is_abandoned() {
    let app = spawn_app_with(Arc::new(NeverRespondingService)).await;

    let abandoned = tokio::time::timeout(
        Duration::from_secs(30),
        app.controller.handle_submit("user@example.com"),
    )
    .await;

    assert_err!(abandoned);
    assert_eq!(app.controller.state().phase, Phase::Idle);
    assert_eq!(app.page.buttons().len(), 2);
    assert_eq!(
        app.last_button(),
        Some(ButtonState::enabled(app.messages.button_label.clone()))
    );
}
