use crate::shared::tags::{resolve_tag, TagColor, TagSpec, TagTable};

pub const STATUS_TAGS: &TagTable = &[
    ("draft", TagColor::Default, "Draft"),
    ("published", TagColor::Blue, "Published"),
    ("quotes_received", TagColor::Cyan, "Quotes Received"),
    ("under_evaluation", TagColor::Orange, "Under Evaluation"),
    ("awarded", TagColor::Green, "Awarded"),
    ("closed", TagColor::Default, "Closed"),
    ("cancelled", TagColor::Red, "Cancelled"),
];

pub fn status_tag(status: &str) -> TagSpec {
    resolve_tag(STATUS_TAGS, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_tag("awarded").color, TagColor::Green);
        assert_eq!(status_tag("under_evaluation").label, "Under Evaluation");
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(status_tag("archived").label, "archived");
        assert_eq!(status_tag("archived").color, TagColor::Default);
    }
}
