//! User-facing notices.
//!
//! Every validation failure, submission outcome and clipboard action emits a
//! [`Notice`]. Notices are fire-and-forget: the flows never wait for them to
//! be shown and a missing listener does not affect the state machines.

pub mod channels;
pub mod types;

pub use channels::{DEFAULT_CHANNEL_BUFFER, NoticeReceiver, NoticeSender, Notifier, notice_channel};
pub use types::{Notice, NoticeKind, NoticeLevel};
