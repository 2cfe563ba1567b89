use chrono::{Duration, NaiveDate};

use crate::model::task::Priority;

/// Structured fields pulled out of a raw quick-entry line.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickEntry {
    pub title: String,
    pub priority: Priority,
    /// `YYYY-MM-DD` or `""`.
    pub due_date: String,
}

const P1_KEYWORDS: &[&str] = &["p1", "priority 1", "high"];
const P2_KEYWORDS: &[&str] = &["p2", "priority 2", "medium"];

/// Literal substrings removed from the title after classification. Date words
/// are deliberately absent: "call mom tomorrow" keeps its last word even
/// though it sets the due date.
const STRIPPED_KEYWORDS: &[&str] = &["p1", "p2", "high", "medium"];

/// Classify a quick-entry line by literal substring matching.
///
/// Keyword detection is case-insensitive; the subsequent title cleanup is a
/// plain case-sensitive `replace`, so "P1 call bank" keeps "P1" in the title
/// while still selecting priority P1. This is not natural-language parsing
/// and is not meant to be.
pub fn parse_quick_entry(raw: &str, today: NaiveDate) -> QuickEntry {
    let lower = raw.to_lowercase();

    let priority = if P1_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Priority::P1
    } else if P2_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Priority::P2
    } else {
        Priority::P3
    };

    let due_date = if lower.contains("today") {
        today.format("%Y-%m-%d").to_string()
    } else if lower.contains("tomorrow") {
        (today + Duration::days(1)).format("%Y-%m-%d").to_string()
    } else {
        String::new()
    };

    let mut title = raw.to_string();
    for keyword in STRIPPED_KEYWORDS {
        title = title.replace(keyword, "");
    }

    QuickEntry {
        title: title.trim().to_string(),
        priority,
        due_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn high_maps_to_p1_and_is_stripped() {
        let entry = parse_quick_entry("Buy milk high", today());
        assert_eq!(entry.priority, Priority::P1);
        assert_eq!(entry.title, "Buy milk");
        assert_eq!(entry.due_date, "");
    }

    #[test]
    fn medium_maps_to_p2() {
        let entry = parse_quick_entry("medium refactor pass", today());
        assert_eq!(entry.priority, Priority::P2);
        assert_eq!(entry.title, "refactor pass");
    }

    #[test]
    fn no_keyword_defaults_to_p3() {
        let entry = parse_quick_entry("Water the plants", today());
        assert_eq!(entry.priority, Priority::P3);
        assert_eq!(entry.title, "Water the plants");
    }

    #[test]
    fn priority_1_phrase_selects_p1_but_is_not_stripped() {
        let entry = parse_quick_entry("priority 1 tax return", today());
        assert_eq!(entry.priority, Priority::P1);
        assert_eq!(entry.title, "priority 1 tax return");
    }

    #[test]
    fn uppercase_keyword_selects_priority_but_survives_stripping() {
        // Detection lowercases, removal doesn't.
        let entry = parse_quick_entry("P2 file expenses", today());
        assert_eq!(entry.priority, Priority::P2);
        assert_eq!(entry.title, "P2 file expenses");
    }

    #[test]
    fn today_sets_due_date_and_keeps_the_word() {
        let entry = parse_quick_entry("pay rent today", today());
        assert_eq!(entry.due_date, "2026-08-25");
        assert_eq!(entry.title, "pay rent today");
    }

    #[test]
    fn tomorrow_sets_next_day_and_keeps_the_word() {
        let entry = parse_quick_entry("Call mom tomorrow", today());
        assert_eq!(entry.due_date, "2026-08-26");
        assert_eq!(entry.title, "Call mom tomorrow");
    }

    #[test]
    fn first_matching_priority_set_wins() {
        let entry = parse_quick_entry("high but also medium", today());
        assert_eq!(entry.priority, Priority::P1);
        assert_eq!(entry.title, "but also");
    }

    #[test]
    fn stripping_can_empty_the_title() {
        let entry = parse_quick_entry("p1", today());
        assert_eq!(entry.priority, Priority::P1);
        assert_eq!(entry.title, "");
    }
}
