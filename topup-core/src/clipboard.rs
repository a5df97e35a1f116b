//! Clipboard seam used by the copy action on the payment screen.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Something that can hold a copied string.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
