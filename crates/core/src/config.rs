#![forbid(unsafe_code)]

/// View configuration, constructed once at entry and passed by reference
/// through the pipeline. Defaults match the documented invocation surface.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Target page reference; `None` means the vault's current page.
    pub page: Option<String>,
    pub tasks_from_this_page: bool,
    pub tagged_tasks_from_anywhere: bool,
    pub tasks_from_tagged_pages: bool,
    pub tasks_from_included_pages: bool,
    pub tasks_from_children_pages: bool,
    pub tasks_from_linked_pages: bool,
    /// When a task text carries any tag and the focus has a tag, match only
    /// on that tag instead of the alias word match.
    pub if_task_tagged_then_only_if_our_tag: bool,
    /// Folder names whose pages never contribute tasks.
    pub avoid_folders: Vec<String>,
    /// `None` falls back to the focal page's own `excludeTasksWith` property.
    pub exclude_tasks_with: Option<Vec<String>>,
    /// `None` falls back to the focal page's own `excludeTasksFrom` property.
    pub exclude_tasks_from: Option<Vec<String>>,
    pub include_section: bool,
    pub summary: bool,
    pub debug: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page: None,
            tasks_from_this_page: true,
            tagged_tasks_from_anywhere: true,
            tasks_from_tagged_pages: true,
            tasks_from_included_pages: true,
            tasks_from_children_pages: true,
            tasks_from_linked_pages: false,
            if_task_tagged_then_only_if_our_tag: true,
            avoid_folders: vec!["templates".to_string(), "Health".to_string()],
            exclude_tasks_with: None,
            exclude_tasks_from: None,
            include_section: true,
            summary: true,
            debug: false,
        }
    }
}
