#![forbid(unsafe_code)]

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::markers;
use crate::model::Task;
use crate::vault::Vault;

/// Drop avoid-folder tasks, collapse structural duplicates (first
/// occurrence wins), and apply the composite display sort:
/// focal-page tasks first, then owning-page recency, then explicit
/// priority, then line order.
pub fn dedupe_and_sort(
    tasks: Vec<Task>,
    vault: &dyn Vault,
    focal_path: &str,
    avoid_folders: &[String],
) -> Vec<Task> {
    let mut seen: HashSet<Task> = HashSet::new();
    let mut out: Vec<Task> = Vec::new();
    for task in tasks {
        if avoid_folders
            .iter()
            .any(|folder| task.path.contains(&format!("{folder}/")))
        {
            continue;
        }
        if seen.insert(task.clone()) {
            out.push(task);
        }
    }

    out.sort_by_key(|task| sort_key(task, vault, focal_path));
    out
}

type SortKey = (u8, Reverse<i64>, u8, u32);

fn sort_key(task: &Task, vault: &dyn Vault, focal_path: &str) -> SortKey {
    let own_page = u8::from(task.path != focal_path);
    // An unresolvable owning page sorts as never modified.
    let mtime_ms = vault.page(&task.path).map_or(0, |page| page.mtime_ms);
    (
        own_page,
        Reverse(mtime_ms),
        markers::priority_rank(&task.text),
        task.line,
    )
}
