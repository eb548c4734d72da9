use std::time::Duration;

use launchlist::domain::{MessageKind, StatusMessage};

use crate::helpers::{StubService, spawn_app, spawn_app_with};

async fn wait(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn the_status_message_clears_itself_after_five_seconds() {
    let app = spawn_app_with(StubService::succeeding()).await;

    app.post_signup("user@example.com").await;

    wait(4_900).await;
    assert_eq!(
        app.controller.presenter().current(),
        StatusMessage::new(MessageKind::Success, app.messages.success.clone())
    );

    wait(200).await;
    assert!(app.controller.presenter().current().is_empty());
    assert_eq!(app.page.message_clears(), 1);
}

#[tokio::test(start_paused = true)]
async fn a_second_message_replaces_the_first_and_only_one_expiry_fires() {
    // The simulated service answers after one second.
    let app = spawn_app().await;

    app.post_signup("not-an-email").await;
    app.post_signup("user@example.com").await;

    // First message would have expired at t=5s; the second expires at t=6s.
    wait(4_500).await;
    assert_eq!(
        app.controller.presenter().current(),
        StatusMessage::new(MessageKind::Success, app.messages.success.clone())
    );
    assert_eq!(app.page.message_clears(), 0);

    wait(1_000).await;
    assert!(app.controller.presenter().current().is_empty());
    assert_eq!(app.page.message_clears(), 1);

    wait(10_000).await;
    assert_eq!(app.page.message_clears(), 1);
}

#[tokio::test(start_paused = true)]
async fn messages_are_not_queued() {
    let app = spawn_app_with(StubService::failing()).await;

    app.post_signup("not-an-email").await;
    app.post_signup("user@example.com").await;

    assert_eq!(
        app.controller.presenter().current(),
        StatusMessage::new(MessageKind::Error, app.messages.failure.clone())
    );

    wait(5_100).await;
    assert!(app.controller.presenter().current().is_empty());
    assert_eq!(app.page.message_clears(), 1);
}
