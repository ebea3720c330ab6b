/// Banner shown above a page after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Blocking error the user has to read before continuing.
    Alert,
    /// Transient confirmation or validation hint.
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn alert(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Alert, message: message.into() }
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Status, message: message.into() }
    }

    pub fn role(&self) -> &'static str {
        match self.kind {
            NoticeKind::Alert => "alert",
            NoticeKind::Status => "status",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Alert => "notice notice-alert",
            NoticeKind::Status => "notice notice-status",
        }
    }
}
