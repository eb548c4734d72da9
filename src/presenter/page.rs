use std::io::Write;

use crate::domain::{ButtonState, StatusMessage};

/// Rendering surface of the signup form.
pub trait PresentationPort: Send + Sync {
    fn render_message(&self, message: &StatusMessage);

    fn render_button_state(&self, button: &ButtonState);

    fn clear_input(&self);
}

/// Renders the form as plain lines on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPage;

impl TerminalPage {
    fn print(&self, line: std::fmt::Arguments<'_>) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout only loses the rendering.
        let _ = writeln!(stdout, "{line}");
    }
}

impl PresentationPort for TerminalPage {
    fn render_message(&self, message: &StatusMessage) {
        if message.is_empty() {
            return;
        }
        self.print(format_args!("[{}] {}", message.kind.as_str(), message.text));
    }

    fn render_button_state(&self, button: &ButtonState) {
        if !button.enabled {
            self.print(format_args!("{}", button.label));
        }
    }

    fn clear_input(&self) {}
}
