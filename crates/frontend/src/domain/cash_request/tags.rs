//! Cash request status and urgency tag tables.
//!
//! Independent from the other domains on purpose; only the resolver is
//! shared.

use crate::shared::tags::{resolve_tag, TagColor, TagSpec, TagTable};

pub const STATUS_TAGS: &TagTable = &[
    ("pending_supervisor", TagColor::Gold, "Pending Supervisor"),
    ("pending_finance", TagColor::Orange, "Pending Finance"),
    ("approved", TagColor::Green, "Approved"),
    ("disbursed", TagColor::Blue, "Disbursed"),
    ("closed", TagColor::Default, "Closed"),
    ("rejected", TagColor::Red, "Rejected"),
    ("cancelled", TagColor::Default, "Cancelled"),
];

pub const URGENCY_TAGS: &TagTable = &[
    ("low", TagColor::Default, "Low"),
    ("medium", TagColor::Blue, "Medium"),
    ("high", TagColor::Orange, "High"),
    ("critical", TagColor::Red, "Critical"),
];

pub fn status_tag(status: &str) -> TagSpec {
    resolve_tag(STATUS_TAGS, status)
}

pub fn urgency_tag(urgency: &str) -> TagSpec {
    resolve_tag(URGENCY_TAGS, urgency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::cash_request::{status, urgency};

    #[test]
    fn test_every_pipeline_status_is_mapped() {
        for code in [
            status::PENDING_SUPERVISOR,
            status::PENDING_FINANCE,
            status::APPROVED,
            status::DISBURSED,
            status::CLOSED,
            status::REJECTED,
            status::CANCELLED,
        ] {
            let spec = status_tag(code);
            assert_ne!(spec.label, code, "raw fallback for known status {}", code);
        }
    }

    #[test]
    fn test_urgency_colors() {
        assert_eq!(urgency_tag(urgency::CRITICAL).color, TagColor::Red);
        assert_eq!(urgency_tag(urgency::LOW).color, TagColor::Default);
    }

    #[test]
    fn test_unknown_status_keeps_raw_string() {
        let spec = status_tag("foo_bar");
        assert_eq!(spec.color, TagColor::Default);
        assert_eq!(spec.label, "foo_bar");
    }
}
