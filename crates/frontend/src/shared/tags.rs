//! Workflow status / urgency tag resolution.
//!
//! Each domain keeps its own independent lookup table; only the resolver is
//! shared. Unknown statuses resolve to a neutral tag carrying the raw string,
//! so the resolver is total and never panics on backend vocabulary drift.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Green,
    Red,
    Orange,
    Gold,
    Blue,
    Cyan,
    Purple,
    Default,
}

impl TagColor {
    pub fn as_class(&self) -> &'static str {
        match self {
            TagColor::Green => "tag--green",
            TagColor::Red => "tag--red",
            TagColor::Orange => "tag--orange",
            TagColor::Gold => "tag--gold",
            TagColor::Blue => "tag--blue",
            TagColor::Cyan => "tag--cyan",
            TagColor::Purple => "tag--purple",
            TagColor::Default => "tag--default",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagSpec {
    pub color: TagColor,
    pub label: String,
}

/// Per-domain lookup table: (status code, color, display label)
pub type TagTable = [(&'static str, TagColor, &'static str)];

pub fn resolve_tag(table: &TagTable, status: &str) -> TagSpec {
    table
        .iter()
        .find(|(code, _, _)| *code == status)
        .map(|(_, color, label)| TagSpec {
            color: *color,
            label: (*label).to_string(),
        })
        .unwrap_or_else(|| TagSpec {
            color: TagColor::Default,
            label: status.to_string(),
        })
}

/// Tag badge rendering a status string through a domain table
#[component]
pub fn StatusTag(
    #[prop(into)] status: Signal<String>,
    table: &'static TagTable,
) -> impl IntoView {
    let spec = move || resolve_tag(table, &status.get());

    view! {
        <span class=move || format!("tag {}", spec().color.as_class())>
            {move || spec().label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &TagTable = &[
        ("approved", TagColor::Green, "Approved"),
        ("rejected", TagColor::Red, "Rejected"),
    ];

    #[test]
    fn test_known_status_is_stable() {
        let first = resolve_tag(TABLE, "approved");
        let second = resolve_tag(TABLE, "approved");
        assert_eq!(first, second);
        assert_eq!(first.color, TagColor::Green);
        assert_eq!(first.label, "Approved");
    }

    #[test]
    fn test_unknown_status_falls_back_to_raw_string() {
        let spec = resolve_tag(TABLE, "foo_bar");
        assert_eq!(spec.color, TagColor::Default);
        assert_eq!(spec.label, "foo_bar");
    }

    #[test]
    fn test_empty_status() {
        let spec = resolve_tag(TABLE, "");
        assert_eq!(spec.color, TagColor::Default);
        assert_eq!(spec.label, "");
    }
}
