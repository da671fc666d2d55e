use crate::shared::tags::{resolve_tag, TagColor, TagSpec, TagTable};

pub const STATUS_TAGS: &TagTable = &[
    ("pending_supervisor", TagColor::Gold, "Pending Supervisor"),
    ("pending_hr", TagColor::Orange, "Pending HR"),
    ("approved", TagColor::Green, "Approved"),
    ("rejected", TagColor::Red, "Rejected"),
    ("cancelled", TagColor::Default, "Cancelled"),
];

pub fn status_tag(status: &str) -> TagSpec {
    resolve_tag(STATUS_TAGS, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_tag("pending_hr").label, "Pending HR");
        assert_eq!(status_tag("approved").color, TagColor::Green);
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(status_tag("expired").label, "expired");
    }
}
