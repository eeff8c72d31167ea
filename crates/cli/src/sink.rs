#![forbid(unsafe_code)]

use std::io::Write;

use tl_core::model::{self, Task};
use tl_core::render::Sink;

/// Renders the view as plain Markdown. Write failures are swallowed;
/// stdout going away mid-listing is not worth aborting a read-only view.
pub struct MarkdownSink<W: Write> {
    out: W,
}

impl<W: Write> MarkdownSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sink for MarkdownSink<W> {
    fn heading(&mut self, level: u8, text: &str) {
        let marks = "#".repeat(level as usize);
        let _ = writeln!(self.out, "\n{marks} {text}\n");
    }

    fn inline(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn paragraph(&mut self, text: &str) {
        let _ = writeln!(self.out, "\n{text}\n");
    }

    fn task_group(&mut self, tasks: &[Task], group_by_file: bool) {
        if group_by_file {
            let mut current: Option<&str> = None;
            for task in tasks {
                if current != Some(task.path.as_str()) {
                    current = Some(task.path.as_str());
                    let _ = writeln!(self.out, "\n**{}**", model::file_stem(&task.path));
                }
                self.write_task(task);
            }
        } else {
            for task in tasks {
                self.write_task(task);
            }
        }
    }
}

impl<W: Write> MarkdownSink<W> {
    fn write_task(&mut self, task: &Task) {
        let marker = if task.completed { "x" } else { " " };
        let _ = writeln!(self.out, "- [{marker}] {}", task.text);
    }
}
