//! Toast Notifications
//!
//! Queue of transient, user-visible notices.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast toast-success",
            NoticeLevel::Info => "toast toast-info",
            NoticeLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notices {
    /// Oldest notices are dropped past this many.
    pub const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            let overflow = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Info, "a");
        let b = notices.push(NoticeLevel::Error, "b");
        assert!(b > a);
        assert_eq!(notices.items().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Info, "a");
        notices.push(NoticeLevel::Info, "b");

        notices.dismiss(a);
        notices.dismiss(99);

        assert_eq!(notices.items().len(), 1);
        assert_eq!(notices.items()[0].message, "b");
    }

    #[test]
    fn oldest_notices_fall_off() {
        let mut notices = Notices::default();
        for i in 0..5 {
            notices.push(NoticeLevel::Success, format!("n{}", i));
        }
        let messages: Vec<&str> = notices.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["n2", "n3", "n4"]);
    }
}
