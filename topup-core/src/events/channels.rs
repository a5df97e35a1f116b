//! Notice channel factory and sending handle.

use super::types::{Notice, NoticeKind};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// Default buffer size for the notice channel.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Sender handle for notices.
pub type NoticeSender = mpsc::Sender<Notice>;
/// Receiver handle for notices.
pub type NoticeReceiver = mpsc::Receiver<Notice>;

/// Create a new notice channel.
pub fn notice_channel() -> (NoticeSender, NoticeReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}

/// Emits notices without ever blocking the caller.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: NoticeSender,
}

impl Notifier {
    pub fn new(tx: NoticeSender) -> Self {
        Self { tx }
    }

    pub fn notify(&self, kind: NoticeKind) {
        let notice = Notice::from(kind);
        match self.tx.try_send(notice) {
            Ok(()) => {}
            Err(TrySendError::Full(notice)) => {
                warn!(notice = %notice, "Notice channel full, dropping notice");
            }
            Err(TrySendError::Closed(notice)) => {
                debug!(notice = %notice, "No notice listener");
            }
        }
    }
}
