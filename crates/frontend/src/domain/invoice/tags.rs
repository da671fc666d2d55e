use crate::shared::tags::{resolve_tag, TagColor, TagSpec, TagTable};

pub const STATUS_TAGS: &TagTable = &[
    ("submitted", TagColor::Gold, "Submitted"),
    ("under_review", TagColor::Orange, "Under Review"),
    ("approved", TagColor::Green, "Approved"),
    ("paid", TagColor::Blue, "Paid"),
    ("disputed", TagColor::Purple, "Disputed"),
    ("rejected", TagColor::Red, "Rejected"),
];

pub fn status_tag(status: &str) -> TagSpec {
    resolve_tag(STATUS_TAGS, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_tag("paid").color, TagColor::Blue);
        assert_eq!(status_tag("under_review").label, "Under Review");
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(status_tag("written_off").label, "written_off");
    }
}
