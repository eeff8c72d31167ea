#![forbid(unsafe_code)]

use serde::Deserialize;
use tl_core::config::ViewConfig;

/// JSON invocation parameters, field-for-field the documented options
/// surface. Every field is optional; absent fields leave the config
/// untouched so CLI flags and defaults still apply.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ViewParams {
    pub the_page: Option<String>,
    pub tasks_from_this_page: Option<bool>,
    pub tagged_tasks_from_anywhere: Option<bool>,
    pub tasks_from_tagged_pages: Option<bool>,
    pub tasks_from_included_pages: Option<bool>,
    pub tasks_from_children_pages: Option<bool>,
    pub tasks_from_linked_pages: Option<bool>,
    pub if_task_tagged_then_only_if_our_tag: Option<bool>,
    pub avoid_folders: Option<Vec<String>>,
    pub exclude_tasks_with: Option<Vec<String>>,
    pub exclude_tasks_from: Option<Vec<String>>,
    pub include_section: Option<bool>,
    pub summary: Option<bool>,
    pub debug: Option<bool>,
}

impl ViewParams {
    pub fn apply(self, cfg: &mut ViewConfig) {
        if let Some(page) = self.the_page {
            cfg.page = Some(page);
        }
        if let Some(value) = self.tasks_from_this_page {
            cfg.tasks_from_this_page = value;
        }
        if let Some(value) = self.tagged_tasks_from_anywhere {
            cfg.tagged_tasks_from_anywhere = value;
        }
        if let Some(value) = self.tasks_from_tagged_pages {
            cfg.tasks_from_tagged_pages = value;
        }
        if let Some(value) = self.tasks_from_included_pages {
            cfg.tasks_from_included_pages = value;
        }
        if let Some(value) = self.tasks_from_children_pages {
            cfg.tasks_from_children_pages = value;
        }
        if let Some(value) = self.tasks_from_linked_pages {
            cfg.tasks_from_linked_pages = value;
        }
        if let Some(value) = self.if_task_tagged_then_only_if_our_tag {
            cfg.if_task_tagged_then_only_if_our_tag = value;
        }
        if let Some(folders) = self.avoid_folders {
            cfg.avoid_folders = folders;
        }
        if let Some(words) = self.exclude_tasks_with {
            cfg.exclude_tasks_with = Some(words);
        }
        if let Some(pages) = self.exclude_tasks_from {
            cfg.exclude_tasks_from = Some(pages);
        }
        if let Some(value) = self.include_section {
            cfg.include_section = value;
        }
        if let Some(value) = self.summary {
            cfg.summary = value;
        }
        if let Some(value) = self.debug {
            cfg.debug = value;
        }
    }
}
