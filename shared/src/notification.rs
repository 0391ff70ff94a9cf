//! Transient toast shown after a mutation.

/// Toast flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The request went through.
    Success,
    /// The request failed.
    Error,
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Flavour.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// Success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// True for [`NotificationKind::Error`].
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
