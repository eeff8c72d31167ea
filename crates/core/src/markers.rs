#![forbid(unsafe_code)]

use std::sync::OnceLock;

use regex::Regex;

fn own_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"🆔\s*([a-zA-Z0-9]{6})").expect("own-id pattern"))
}

fn blocked_by_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"⛔\s*([a-zA-Z0-9]{6})").expect("blocked-by pattern"))
}

fn section_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"> ([^\]]+)").expect("section-label pattern"))
}

/// The task's own ID: a 6-character alphanumeric token after the 🆔 glyph,
/// with or without whitespace in between.
pub fn own_id(text: &str) -> Option<&str> {
    own_id_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The ID of the task this one is blocked by (the ⛔ glyph), same grammar
/// as [`own_id`].
pub fn blocked_by(text: &str) -> Option<&str> {
    blocked_by_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Display priority rank from the first matching priority glyph. Lower is
/// more urgent; unmarked tasks sit in the middle at rank 3.
pub fn priority_rank(text: &str) -> u8 {
    if text.contains("🔺") {
        0
    } else if text.contains("⏫") {
        1
    } else if text.contains("🔼") {
        2
    } else if text.contains("🔽") {
        4
    } else if text.contains("⏬") {
        5
    } else {
        3
    }
}

/// Whole-word containment: `word` bounded by start/end, whitespace, or
/// Unicode punctuation on both sides, case-insensitive.
pub fn word_in_text(word: &str, text: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let pattern = format!(
        r"(?i)(^|\s|\p{{P}}){}(\s|\p{{P}}|$)",
        regex::escape(word)
    );
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

/// Reduce a raw page reference ("[[Note|display]]") to the bare reference.
pub fn strip_link_ref(raw: &str) -> String {
    let unbracketed: String = raw
        .chars()
        .filter(|ch| *ch != '[' && *ch != ']')
        .collect();
    match unbracketed.split_once('|') {
        Some((head, _)) => head.to_string(),
        None => unbracketed,
    }
}

/// The section part of a "Doc > Section" identifier, or `None` for a
/// top-level identifier with no `>` separator.
pub fn section_label(section: &str) -> Option<&str> {
    section_label_re()
        .captures(section)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Drop a trailing " at ..." time-of-day suffix from a section label.
pub fn trim_time_suffix(label: &str) -> &str {
    match label.rfind(" at ") {
        Some(idx) => &label[..idx],
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_id_with_and_without_space() {
        assert_eq!(own_id("Do the thing 🆔 jyqcuu"), Some("jyqcuu"));
        assert_eq!(own_id("Do the thing 🆔jyqcuu"), Some("jyqcuu"));
        assert_eq!(own_id("No marker here"), None);
    }

    #[test]
    fn own_id_requires_six_alphanumerics() {
        assert_eq!(own_id("🆔 abc"), None);
        assert_eq!(own_id("🆔 ab12cd and more"), Some("ab12cd"));
        // A longer token still yields its first six characters.
        assert_eq!(own_id("🆔 abcdefg"), Some("abcdef"));
    }

    #[test]
    fn blocked_by_extraction() {
        assert_eq!(blocked_by("Waiting ⛔ s1d3dn"), Some("s1d3dn"));
        assert_eq!(blocked_by("Waiting ⛔s1d3dn"), Some("s1d3dn"));
        assert_eq!(blocked_by("🆔 s1d3dn only own id"), None);
    }

    #[test]
    fn priority_ranks() {
        assert_eq!(priority_rank("highest 🔺"), 0);
        assert_eq!(priority_rank("high ⏫"), 1);
        assert_eq!(priority_rank("medium 🔼"), 2);
        assert_eq!(priority_rank("plain"), 3);
        assert_eq!(priority_rank("low 🔽"), 4);
        assert_eq!(priority_rank("lowest ⏬"), 5);
    }

    #[test]
    fn priority_first_glyph_wins() {
        assert_eq!(priority_rank("🔺 and ⏬"), 0);
        assert_eq!(priority_rank("🔽 and ⏬"), 4);
    }

    #[test]
    fn word_match_is_bounded() {
        assert!(word_in_text("Project A", "Call about Project A tomorrow"));
        assert!(word_in_text("plan", "finish the plan."));
        assert!(word_in_text("plan", "plan, then do"));
        assert!(!word_in_text("plan", "planning session"));
        assert!(!word_in_text("", "anything"));
    }

    #[test]
    fn word_match_is_case_insensitive_and_unicode_aware() {
        assert!(word_in_text("projekt", "Der PROJEKT-Termin steht"));
        assert!(word_in_text("café", "meet at the café!"));
    }

    #[test]
    fn word_match_escapes_regex_metacharacters() {
        assert!(word_in_text("#projA", "Buy parts #projA today"));
        assert!(word_in_text("a+b", "compute a+b now"));
    }

    #[test]
    fn strip_link_refs() {
        assert_eq!(strip_link_ref("[[Some Note]]"), "Some Note");
        assert_eq!(strip_link_ref("[[Some Note|display]]"), "Some Note");
        assert_eq!(strip_link_ref("Plain Name"), "Plain Name");
    }

    #[test]
    fn section_labels() {
        assert_eq!(
            section_label("Daily > Monday at 9:00"),
            Some("Monday at 9:00")
        );
        assert_eq!(section_label("Daily"), None);
        assert_eq!(trim_time_suffix("Monday at 9:00"), "Monday");
        assert_eq!(trim_time_suffix("Monday"), "Monday");
    }
}
