use crate::shared::tags::{resolve_tag, TagColor, TagSpec, TagTable};

pub const STATUS_TAGS: &TagTable = &[
    ("open", TagColor::Gold, "Open"),
    ("in_progress", TagColor::Blue, "In Progress"),
    ("on_hold", TagColor::Orange, "On Hold"),
    ("resolved", TagColor::Green, "Resolved"),
    ("closed", TagColor::Default, "Closed"),
];

pub const PRIORITY_TAGS: &TagTable = &[
    ("low", TagColor::Default, "Low"),
    ("medium", TagColor::Blue, "Medium"),
    ("high", TagColor::Orange, "High"),
    ("urgent", TagColor::Red, "Urgent"),
];

pub fn status_tag(status: &str) -> TagSpec {
    resolve_tag(STATUS_TAGS, status)
}

pub fn priority_tag(priority: &str) -> TagSpec {
    resolve_tag(PRIORITY_TAGS, priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_tag("resolved").color, TagColor::Green);
        assert_eq!(status_tag("on_hold").label, "On Hold");
    }

    #[test]
    fn test_unknown_fallback() {
        let spec = status_tag("escalated");
        assert_eq!(spec.color, TagColor::Default);
        assert_eq!(spec.label, "escalated");
    }
}
