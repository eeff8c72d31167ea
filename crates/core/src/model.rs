#![forbid(unsafe_code)]

use time::Date;

/// A page carrying this tag contributes no tasks to any collection source.
pub const IGNORE_TASKS_TAG: &str = "#ignoretasks";
/// A page carrying this tag is skipped by the tagged-pages source.
pub const MULTI_PROJECT_TAG: &str = "#multiproject";

/// One actionable line item pulled from a page.
///
/// Structural equality is the task's identity: two reads of the same
/// position in the same page produce equal values, which is what the
/// deduplication stage relies on. ID, blocking, and priority markers are
/// embedded in `text` and extracted on demand by the `markers` functions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    pub text: String,
    pub completed: bool,
    pub start: Option<Date>,
    /// Vault-relative path of the owning page.
    pub path: String,
    /// Hierarchical section identifier, e.g. "Doc > Section".
    pub section: String,
    /// 1-based line number within the owning page.
    pub line: u32,
}

/// The `aliases:` page property as observed at the vault boundary.
///
/// The resolver needs to tell apart "no property", "a readable list that
/// may still contain empty entries", and "a property that could not be
/// read at all" — the last one degrades to the page-name-only identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AliasProperty {
    #[default]
    Missing,
    Values(Vec<String>),
    Malformed,
}

/// A node in the note graph, read once per run and never mutated.
#[derive(Clone, Debug)]
pub struct Page {
    pub path: String,
    pub name: String,
    pub aliases: AliasProperty,
    /// Searchable tag set: frontmatter tags plus inline body tags.
    pub tags: Vec<String>,
    pub include_tasks_from: Vec<String>,
    pub children: Vec<String>,
    pub outlinks: Vec<String>,
    pub exclude_tasks_with: Vec<String>,
    pub exclude_tasks_from: Vec<String>,
    /// Modification time, unix epoch milliseconds (0 when unknown).
    pub mtime_ms: i64,
    pub tasks: Vec<Task>,
}

impl Page {
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    pub fn ignores_tasks(&self) -> bool {
        self.has_tag(IGNORE_TASKS_TAG)
    }
}

/// Last path component without the `.md` suffix.
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.strip_suffix(".md").unwrap_or(name)
}
