use crate::shared::tags::{resolve_tag, TagColor, TagSpec, TagTable};

pub const STATUS_TAGS: &TagTable = &[
    ("pending_supervisor", TagColor::Gold, "Pending Supervisor"),
    (
        "pending_supply_chain_review",
        TagColor::Cyan,
        "Pending Supply Chain Review",
    ),
    ("pending_finance", TagColor::Orange, "Pending Finance"),
    ("approved", TagColor::Green, "Approved"),
    ("in_procurement", TagColor::Blue, "In Procurement"),
    ("delivered", TagColor::Purple, "Delivered"),
    ("supply_chain_rejected", TagColor::Red, "Supply Chain Rejected"),
    ("finance_rejected", TagColor::Red, "Finance Rejected"),
    ("rejected", TagColor::Red, "Rejected"),
    ("cancelled", TagColor::Default, "Cancelled"),
];

pub const PRIORITY_TAGS: &TagTable = &[
    ("Low", TagColor::Default, "Low"),
    ("Medium", TagColor::Blue, "Medium"),
    ("High", TagColor::Orange, "High"),
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
    fn test_supply_chain_rejected_renders_red_label() {
        let spec = status_tag("supply_chain_rejected");
        assert_eq!(spec.color, TagColor::Red);
        assert_eq!(spec.label, "Supply Chain Rejected");
    }

    #[test]
    fn test_unknown_status_renders_literal_string() {
        let spec = status_tag("foo_bar");
        assert_eq!(spec.color, TagColor::Default);
        assert_eq!(spec.label, "foo_bar");
    }

    #[test]
    fn test_priority_table_is_independent_of_status_table() {
        // Priorities are capitalized in this domain; the status table must
        // not leak into priority resolution
        assert_eq!(priority_tag("High").color, TagColor::Orange);
        assert_eq!(priority_tag("high").color, TagColor::Default);
    }
}
