#![forbid(unsafe_code)]
//! Line-by-line body scan: checkbox tasks with their section context and
//! start dates, inline tags, and outbound links.

use std::sync::OnceLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;
use tl_core::model::Task;

#[derive(Debug, Default)]
pub struct BodyScan {
    pub tasks: Vec<Task>,
    pub inline_tags: Vec<String>,
    pub outlinks: Vec<String>,
}

fn task_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[-*] \[(.)\]\s+(.*)$").expect("task-line pattern"))
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#{1,6}\s+(.+?)\s*$").expect("heading pattern"))
}

fn start_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"🛫\s*(\d{4}-\d{2}-\d{2})").expect("start-date pattern"))
}

fn inline_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[A-Za-z0-9_/-]+").expect("inline-tag pattern"))
}

fn outlink_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([^\]|#]+)").expect("outlink pattern"))
}

/// Scan the note body. `name` and `path` identify the owning page;
/// `first_line` is the 1-based file line of the body's first line, so task
/// line numbers stay stable whether or not the file has frontmatter.
pub fn scan_body(name: &str, path: &str, body: &str, first_line: u32) -> BodyScan {
    let mut out = BodyScan::default();
    // Before any heading, tasks sit in the top-level section, which is
    // identified by just the page name.
    let mut section = name.to_string();

    for (offset, line) in body.lines().enumerate() {
        let line_no = first_line + offset as u32;

        if let Some(caps) = heading_re().captures(line) {
            if let Some(text) = caps.get(1) {
                section = format!("{name} > {}", text.as_str());
            }
            continue;
        }

        if let Some(caps) = task_line_re().captures(line) {
            let marker = caps.get(1).map(|m| m.as_str()).unwrap_or(" ");
            let text = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();
            out.tasks.push(Task {
                text: text.to_string(),
                completed: matches!(marker, "x" | "X"),
                start: start_date(text),
                path: path.to_string(),
                section: section.clone(),
                line: line_no,
            });
        }

        for tag in inline_tag_re().find_iter(line) {
            let tag = tag.as_str().to_string();
            if !out.inline_tags.contains(&tag) {
                out.inline_tags.push(tag);
            }
        }

        for caps in outlink_re().captures_iter(line) {
            if let Some(target) = caps.get(1) {
                let target = target.as_str().trim().to_string();
                if !target.is_empty() && !out.outlinks.contains(&target) {
                    out.outlinks.push(target);
                }
            }
        }
    }

    out
}

fn start_date(text: &str) -> Option<Date> {
    let raw = start_date_re()
        .captures(text)
        .and_then(|caps| caps.get(1))?;
    let format = format_description!("[year]-[month]-[day]");
    // An unparseable date leaves the task undated rather than dropping it.
    Date::parse(raw.as_str(), &format).ok()
}
