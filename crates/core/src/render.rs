#![forbid(unsafe_code)]

use crate::config::ViewConfig;
use crate::markers;
use crate::model::{self, Page, Task};
use crate::vault::Vault;

pub const BASE_HEADING_LEVEL: u8 = 2;

/// Rendering surface the pipeline emits into. The core never formats final
/// output itself; hosts provide a sink (Markdown to stdout, a recording
/// sink in tests).
pub trait Sink {
    fn heading(&mut self, level: u8, text: &str);
    fn inline(&mut self, text: &str);
    fn paragraph(&mut self, text: &str);
    fn task_group(&mut self, tasks: &[Task], group_by_file: bool);
}

/// Emit the sorted task list, grouped by page and section (or flat when
/// section grouping is off). Returns the number of tasks rendered.
pub fn render(
    tasks: &[Task],
    vault: &dyn Vault,
    focal: &Page,
    cfg: &ViewConfig,
    sink: &mut dyn Sink,
) -> usize {
    if tasks.is_empty() {
        if cfg.summary {
            sink.inline("*No available tasks*");
        }
        return 0;
    }

    if cfg.summary {
        sink.inline(&format!("*{} tasks*", tasks.len()));
    }

    if !cfg.include_section {
        sink.task_group(tasks, true);
        return tasks.len();
    }

    let mut page: Option<&str> = None;
    let mut section: Option<&str> = None;
    let mut group: Vec<Task> = Vec::new();

    for task in tasks {
        let page_changed = page != Some(task.path.as_str());
        let section_changed = section != Some(task.section.as_str());
        if !group.is_empty() && (page_changed || section_changed) {
            sink.task_group(&group, false);
            group.clear();
        }

        if page_changed {
            let name = page_name(vault, &task.path);
            let suffix = if name == focal.name { " (this page)" } else { "" };
            sink.heading(BASE_HEADING_LEVEL, &format!("{name}{suffix}"));
            page = Some(task.path.as_str());
            section = None;
        }

        if section != Some(task.section.as_str()) {
            section = Some(task.section.as_str());
            emit_section_heading(sink, vault, task);
        }

        group.push(task.clone());
    }

    if !group.is_empty() {
        sink.task_group(&group, false);
    }
    tasks.len()
}

fn page_name<'a>(vault: &'a dyn Vault, path: &'a str) -> &'a str {
    vault
        .page(path)
        .map(|page| page.name.as_str())
        .unwrap_or_else(|| model::file_stem(path))
}

/// Section sub-heading rules: a "Doc > Section" identifier yields the
/// section part with any trailing " at ..." time suffix removed plus a
/// deep link, unless the label just repeats the page name (top-level
/// section). An identifier with no ">" part gets a "No section" heading.
fn emit_section_heading(sink: &mut dyn Sink, vault: &dyn Vault, task: &Task) {
    match markers::section_label(&task.section) {
        Some(label) => {
            let name = page_name(vault, &task.path);
            if name.replace(':', " ").replace('.', " ") != label {
                let trimmed = markers::trim_time_suffix(label);
                sink.heading(
                    BASE_HEADING_LEVEL + 2,
                    &format!("{trimmed} [[{name}#{label}|→]]"),
                );
            }
        }
        None => sink.heading(BASE_HEADING_LEVEL + 1, "No section"),
    }
}
