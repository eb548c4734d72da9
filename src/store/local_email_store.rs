use std::sync::Arc;

use crate::domain::{EmailRegistry, SubscriberEmail};

use super::{errors::PersistenceError, storage::KeyValueStore};

/// Best-effort local record of every address that signed up.
///
/// The registry is read, extended and written back as a whole. There is no
/// locking across processes: two writers racing on the same key can lose an
/// update.
#[derive(Clone)]
pub struct LocalEmailStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl LocalEmailStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Records `email`, logging and swallowing any storage failure.
    #[tracing::instrument(
        name = "Saving email to local storage",
        skip(self, email),
        fields(subscriber_email = %email)
    )]
    pub fn add(&self, email: &SubscriberEmail) {
        match self.try_add(email) {
            Ok(true) => tracing::info!("Email saved to local storage."),
            Ok(false) => tracing::debug!("Email already present in local storage."),
            Err(e) => tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to save email to local storage."
            ),
        }
    }

    /// Returns whether `email` was appended. Already-present addresses leave
    /// the stored record untouched.
    pub fn try_add(&self, email: &SubscriberEmail) -> Result<bool, PersistenceError> {
        let mut registry = self.load()?;
        if !registry.insert(email.as_ref()) {
            return Ok(false);
        }

        let encoded = serde_json::to_string(&registry).map_err(PersistenceError::Encode)?;
        self.storage
            .set(&self.key, &encoded)
            .map_err(PersistenceError::Unavailable)?;

        Ok(true)
    }

    /// Current registry; an unreadable record reads as empty.
    pub fn emails(&self) -> EmailRegistry {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to read the email registry."
            );
            EmailRegistry::default()
        })
    }

    fn load(&self) -> Result<EmailRegistry, PersistenceError> {
        let raw = self
            .storage
            .get(&self.key)
            .map_err(PersistenceError::Unavailable)?;

        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(EmailRegistry::default()),
        };

        match serde_json::from_str(&raw) {
            Ok(registry) => Ok(registry),
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    key = %self.key,
                    "Stored email registry is malformed, treating it as empty."
                );
                Ok(EmailRegistry::default())
            }
        }
    }
}
