use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Identity of one shown notice. Dismiss timers carry it so a late timer
/// can tell it no longer owns the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
}

/// At most one notice per form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    next_id: u64,
    current: Option<Notice>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is shown and returns the new notice's id.
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.current = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Clears the notice only if `id` is still the one shown.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
