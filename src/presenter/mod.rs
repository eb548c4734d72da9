mod notification_presenter;
mod page;

pub use notification_presenter::NotificationPresenter;
pub use page::{PresentationPort, TerminalPage};
