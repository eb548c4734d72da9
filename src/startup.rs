use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::configuration::{MessageSettings, Settings};
use crate::controller::SubmissionController;
use crate::presenter::{NotificationPresenter, PresentationPort, TerminalPage};
use crate::store::{FileStorage, KeyValueStore, LocalEmailStore};
use crate::submission_service::{SimulatedSubmissionService, SubmissionService};

pub struct Application {
    controller: Arc<SubmissionController>,
    store: LocalEmailStore,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        std::fs::create_dir_all(&config.storage.directory).with_context(|| {
            format!(
                "Failed to create the storage directory {}.",
                config.storage.directory.display()
            )
        })?;
        let storage = FileStorage::new(config.storage.directory);
        let service = SimulatedSubmissionService::new(config.submission.delay());

        Ok(Self::with_parts(
            config.storage.key,
            config.notification.display_for(),
            config.messages,
            Arc::new(storage),
            Arc::new(service),
            Arc::new(TerminalPage),
        ))
    }

    /// Wires the form around caller-provided ports.
    pub fn with_parts(
        storage_key: String,
        display_for: Duration,
        messages: MessageSettings,
        storage: Arc<dyn KeyValueStore>,
        service: Arc<dyn SubmissionService>,
        page: Arc<dyn PresentationPort>,
    ) -> Self {
        let store = LocalEmailStore::new(storage, storage_key);
        let presenter = NotificationPresenter::new(page.clone(), display_for);
        let controller =
            SubmissionController::new(service, store.clone(), presenter, page, messages);

        Self {
            controller: Arc::new(controller),
            store,
        }
    }

    pub fn controller(&self) -> Arc<SubmissionController> {
        Arc::clone(&self.controller)
    }

    pub fn store(&self) -> &LocalEmailStore {
        &self.store
    }

    /// Treats every line of `input` as the field value at the moment the
    /// trigger is activated. Returns once `input` is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD, so such a line is
    /// rejected as an invalid address instead of stopping the form.
    pub async fn run_until_stopped<R>(self, input: R) -> Result<(), anyhow::Error>
    where
        R: AsyncRead + Unpin,
    {
        let mut reader = BufReader::new(input);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .context("Failed to read the next activation.")?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            self.controller.set_input(&line);
            self.controller.submit_current_input().await;
        }

        tracing::info!(
            subscribers = self.store.emails().len(),
            "Input closed, shutting down."
        );
        Ok(())
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
