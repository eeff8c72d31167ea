#![forbid(unsafe_code)]

use std::collections::HashSet;

use crate::diag::Diagnostics;
use crate::identity::Focus;
use crate::markers;
use crate::model::{self, Task};

/// The three sequential filters: text exclusion, source exclusion, and
/// same-batch dependency blocking. The first two share a universal
/// override: a task whose text carries the focus tag is always kept.
pub fn apply_filters(
    tasks: Vec<Task>,
    focus: &Focus,
    exclude_with: &[String],
    exclude_from: &[String],
    diag: &mut Diagnostics,
) -> Vec<Task> {
    let tasks = filter_excluded_text(tasks, focus, exclude_with, diag);
    let tasks = filter_excluded_sources(tasks, focus, exclude_from, diag);
    filter_blocked(tasks)
}

fn carries_focus_tag(task: &Task, focus: &Focus) -> bool {
    match &focus.tag {
        Some(tag) => task.text.to_lowercase().contains(&tag.to_lowercase()),
        None => false,
    }
}

fn filter_excluded_text(
    tasks: Vec<Task>,
    focus: &Focus,
    exclude_with: &[String],
    diag: &mut Diagnostics,
) -> Vec<Task> {
    if exclude_with.is_empty() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|task| {
            if carries_focus_tag(task, focus) {
                return true;
            }
            let lower = task.text.to_lowercase();
            for word in exclude_with {
                if lower.contains(&word.to_lowercase()) {
                    diag.note(format!(
                        "'{}' excluded due to ('{word}') and tag not present.",
                        task.text
                    ));
                    return false;
                }
            }
            true
        })
        .collect()
}

fn filter_excluded_sources(
    tasks: Vec<Task>,
    focus: &Focus,
    exclude_from: &[String],
    diag: &mut Diagnostics,
) -> Vec<Task> {
    if exclude_from.is_empty() {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|task| {
            if carries_focus_tag(task, focus) {
                return true;
            }
            for raw in exclude_from {
                let reference = markers::strip_link_ref(raw);
                if path_matches_ref(&task.path, &reference) {
                    diag.note(format!("'{}' excluded from {reference}", task.text));
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Exclusion entries are name-based references; match either the full
/// vault-relative path or the file stem.
fn path_matches_ref(path: &str, reference: &str) -> bool {
    path == reference || model::file_stem(path) == reference
}

/// Same-batch, single-hop blocking: a task is dropped when its ⛔ ID matches
/// the 🆔 of any task still in the candidate list. All candidates are
/// incomplete by construction, so every own ID in the batch blocks. A ⛔
/// referencing an ID outside the batch leaves the task unblocked.
fn filter_blocked(tasks: Vec<Task>) -> Vec<Task> {
    if tasks.is_empty() {
        return tasks;
    }
    let own_ids: HashSet<String> = tasks
        .iter()
        .filter_map(|task| markers::own_id(&task.text).map(str::to_string))
        .collect();
    tasks
        .into_iter()
        .filter(|task| match markers::blocked_by(&task.text) {
            Some(id) => !own_ids.contains(id),
            None => true,
        })
        .collect()
}
