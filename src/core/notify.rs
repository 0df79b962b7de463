//! Notification sink contract
//!
//! Fire-and-forget: senders get nothing back and delivery is best effort.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait NotificationSink {
    fn notify(&mut self, kind: NoticeKind, message: String);

    fn success(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NoticeKind::Success, message.into());
    }

    fn error(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(NoticeKind::Error, message.into());
    }
}

/// Collects notices in order, for headless callers and tests
impl NotificationSink for Vec<Notice> {
    fn notify(&mut self, kind: NoticeKind, message: String) {
        self.push(Notice { kind, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<Notice> = Vec::new();
        sink.success("saved");
        sink.error("nope");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].kind, NoticeKind::Success);
        assert_eq!(sink[1].message, "nope");
        assert_eq!(NoticeKind::Error.to_string(), "error");
    }
}
