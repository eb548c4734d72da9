mod email_registry;
mod status_message;
mod subscriber_email;

pub use email_registry::EmailRegistry;
pub use status_message::{ButtonState, MessageKind, StatusMessage};
pub use subscriber_email::{SubscriberEmail, is_form_whitespace, is_valid_email};
