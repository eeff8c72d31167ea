#![forbid(unsafe_code)]

use time::Date;

use crate::config::ViewConfig;
use crate::diag::Diagnostics;
use crate::identity::Focus;
use crate::markers;
use crate::model::{MULTI_PROJECT_TAG, Page, Task};
use crate::vault::Vault;

/// Gather the candidate multiset from every enabled source. Duplicates are
/// allowed here; the dedup stage collapses them later.
pub fn collect(
    vault: &dyn Vault,
    focal: &Page,
    focus: &Focus,
    cfg: &ViewConfig,
    today: Date,
    diag: &mut Diagnostics,
) -> Vec<Task> {
    let mut out = Vec::new();

    if cfg.tasks_from_this_page && !focal.ignores_tasks() {
        push_open_tasks(&mut out, focal, today);
    }

    if cfg.tasks_from_included_pages {
        collect_referenced(&mut out, vault, &focal.include_tasks_from, today, diag);
    }

    if cfg.tasks_from_children_pages {
        collect_referenced(&mut out, vault, &focal.children, today, diag);
    }

    if cfg.tasks_from_linked_pages {
        collect_referenced(&mut out, vault, &focal.outlinks, today, diag);
    }

    if cfg.tagged_tasks_from_anywhere {
        for page in vault.pages() {
            if page.path == focal.path || page.ignores_tasks() {
                continue;
            }
            for task in &page.tasks {
                if !is_open(task, today) {
                    continue;
                }
                if matches_focus(task, focus, cfg.if_task_tagged_then_only_if_our_tag) {
                    out.push(task.clone());
                }
            }
        }
    }

    if cfg.tasks_from_tagged_pages
        && let Some(tag) = &focus.tag
    {
        for page in vault.pages() {
            if page.path == focal.path {
                continue;
            }
            if !page.has_tag(tag) || page.has_tag(MULTI_PROJECT_TAG) || page.ignores_tasks() {
                continue;
            }
            push_open_tasks(&mut out, page, today);
        }
    }

    out
}

/// Baseline predicate shared by every source: incomplete, and not scheduled
/// to start after today.
fn is_open(task: &Task, today: Date) -> bool {
    !task.completed && task.start.is_none_or(|start| start <= today)
}

fn push_open_tasks(out: &mut Vec<Task>, page: &Page, today: Date) {
    for task in &page.tasks {
        if is_open(task, today) {
            out.push(task.clone());
        }
    }
}

fn collect_referenced(
    out: &mut Vec<Task>,
    vault: &dyn Vault,
    refs: &[String],
    today: Date,
    diag: &mut Diagnostics,
) {
    for raw in refs {
        let reference = markers::strip_link_ref(raw);
        match vault.page(&reference) {
            Some(page) => {
                if !page.ignores_tasks() {
                    push_open_tasks(out, page, today);
                }
            }
            None => diag.note(format!("(Cannot include from '{raw}', as it is not a page.)")),
        }
    }
}

/// Matching rule for the tagged-tasks-anywhere source: a task carrying any
/// tag only matches through the focus tag (when tag-exclusive matching is
/// on and a tag exists); everything else matches through a whole-word hit
/// on any alias.
fn matches_focus(task: &Task, focus: &Focus, tag_exclusive: bool) -> bool {
    if tag_exclusive
        && task.text.contains('#')
        && let Some(tag) = &focus.tag
    {
        return task.text.to_lowercase().contains(&tag.to_lowercase());
    }
    focus
        .aliases
        .iter()
        .any(|alias| markers::word_in_text(alias, &task.text))
}
