use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::{MessageKind, StatusMessage};

use super::page::PresentationPort;

/// Shows one status message at a time and clears it after `display_for`.
///
/// Every `show` cancels the pending expiry of the previous message, so at
/// most one expiry is ever scheduled. Must be used from within a tokio
/// runtime.
#[derive(Clone)]
pub struct NotificationPresenter {
    inner: Arc<Inner>,
}

struct Inner {
    page: Arc<dyn PresentationPort>,
    display_for: Duration,
    state: Mutex<PresenterState>,
}

#[derive(Default)]
struct PresenterState {
    current: StatusMessage,
    // Bumped on every replacement; an expiry only applies to its own message.
    generation: u64,
    expiry: Option<JoinHandle<()>>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, PresenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(&self, state: &mut PresenterState, message: StatusMessage) {
        if let Some(expiry) = state.expiry.take() {
            expiry.abort();
        }
        state.generation = state.generation.wrapping_add(1);
        state.current = message;
        self.page.render_message(&state.current);
    }

    fn expire(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation {
            return;
        }
        state.expiry = None;
        state.current = StatusMessage::default();
        self.page.render_message(&state.current);
        tracing::debug!("Status message expired.");
    }
}

impl NotificationPresenter {
    pub fn new(page: Arc<dyn PresentationPort>, display_for: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                page,
                display_for,
                state: Mutex::new(PresenterState::default()),
            }),
        }
    }

    pub fn show(&self, kind: MessageKind, text: impl Into<String>) {
        let mut state = self.inner.lock();
        self.inner
            .replace(&mut state, StatusMessage::new(kind, text));

        let generation = state.generation;
        let inner = Arc::clone(&self.inner);
        state.expiry = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.display_for).await;
            inner.expire(generation);
        }));
    }

    /// Empties the message area and drops any pending expiry.
    pub fn clear(&self) {
        let mut state = self.inner.lock();
        self.inner.replace(&mut state, StatusMessage::default());
    }

    pub fn current(&self) -> StatusMessage {
        self.inner.lock().current.clone()
    }
}
