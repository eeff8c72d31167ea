#![forbid(unsafe_code)]
//! Selection and ordering pipeline: collect candidates, filter, dedupe,
//! sort, render. Each stage consumes one sequence and produces the next;
//! nothing here holds state across runs.

mod collect;
mod filter;
mod order;

pub use collect::collect;
pub use filter::apply_filters;
pub use order::dedupe_and_sort;

use time::Date;

use crate::config::ViewConfig;
use crate::diag::Diagnostics;
use crate::identity;
use crate::render::{self, Sink};
use crate::vault::Vault;

/// How a view run ended. Both variants are normal terminations; a missing
/// target is reported inline through the sink, never as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewOutcome {
    /// Number of tasks in the rendered listing.
    pub rendered: usize,
    pub missing_target: bool,
}

/// Run the whole pipeline once and emit the view through `sink`.
pub fn run_view(
    vault: &dyn Vault,
    cfg: &ViewConfig,
    today: Date,
    sink: &mut dyn Sink,
) -> ViewOutcome {
    let target = match &cfg.page {
        Some(name) => vault.page(name),
        None => vault.current(),
    };
    let Some(page) = target else {
        let name = cfg.page.as_deref().unwrap_or("(current)");
        sink.inline(&format!("**ERROR** No page {name}"));
        return ViewOutcome {
            rendered: 0,
            missing_target: true,
        };
    };

    if cfg.page.is_some() && cfg.summary {
        let heading = if cfg.tasks_from_tagged_pages {
            format!("From {} plus tagged:", page.name)
        } else {
            format!("From {}:", page.name)
        };
        sink.heading(render::BASE_HEADING_LEVEL, &heading);
    }

    let mut warnings = Vec::new();
    let focus = identity::resolve_focus(page, &mut warnings);
    for warning in &warnings {
        sink.paragraph(warning);
    }

    let mut diag = Diagnostics::new(cfg.debug);
    diag.note(format!(
        "aliases: {:?} tag: {:?}",
        focus.aliases, focus.tag
    ));

    let candidates = collect(vault, page, &focus, cfg, today, &mut diag);

    let exclude_with = cfg
        .exclude_tasks_with
        .clone()
        .unwrap_or_else(|| page.exclude_tasks_with.clone());
    let exclude_from = cfg
        .exclude_tasks_from
        .clone()
        .unwrap_or_else(|| page.exclude_tasks_from.clone());
    let filtered = apply_filters(candidates, &focus, &exclude_with, &exclude_from, &mut diag);

    let ordered = dedupe_and_sort(filtered, vault, &page.path, &cfg.avoid_folders);

    if diag.enabled() {
        for note in diag.notes() {
            sink.paragraph(note);
        }
    }

    let rendered = render::render(&ordered, vault, page, cfg, sink);
    ViewOutcome {
        rendered,
        missing_target: false,
    }
}
