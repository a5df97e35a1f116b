//! Notice type definitions.

/// Polarity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Nickname or amount left blank
    MissingField,
    /// Amount is not a positive integer
    InvalidAmount,
    /// The pending request could not be written
    RequestNotSaved,
    /// Request stored, moving on to payment
    RequestCreated,
    /// Payment screen opened without a pending request
    RequestNotFound,
    /// Value placed on the clipboard
    Copied,
    /// Clipboard write failed
    CopyFailed,
    /// Intake service accepted the confirmation
    Forwarded,
    /// Intake service answered with a non-2xx status
    SubmissionFailed,
    /// Intake service could not be reached
    ConnectionFailed,
}

impl NoticeKind {
    pub fn level(self) -> NoticeLevel {
        match self {
            NoticeKind::RequestCreated | NoticeKind::Copied | NoticeKind::Forwarded => {
                NoticeLevel::Success
            }
            _ => NoticeLevel::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            NoticeKind::MissingField => "Fill in all fields",
            NoticeKind::InvalidAmount => "Enter a valid amount",
            NoticeKind::RequestNotSaved => "Could not save the request",
            NoticeKind::RequestCreated => "Request created! Proceeding to payment...",
            NoticeKind::RequestNotFound => "Request not found",
            NoticeKind::Copied => "Copied to clipboard",
            NoticeKind::CopyFailed => "Could not copy to clipboard",
            NoticeKind::Forwarded => "Request sent to the administrator for review",
            NoticeKind::SubmissionFailed => "Failed to send the request",
            NoticeKind::ConnectionFailed => "Connection error",
        }
    }
}

/// A transient message for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notice {
    pub level: NoticeLevel,
    pub kind: NoticeKind,
}

impl From<NoticeKind> for Notice {
    fn from(kind: NoticeKind) -> Self {
        Self {
            level: kind.level(),
            kind,
        }
    }
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.message())
    }
}
