#![forbid(unsafe_code)]
//! Markdown-backed note vault: reads a directory of `.md` files into the
//! immutable page snapshot the pipeline runs against.

mod frontmatter;
mod scan;

pub use frontmatter::PageProps;

use std::path::{Path, PathBuf};

use tl_core::model::Page;
use tl_core::vault::Vault;
use walkdir::WalkDir;

#[derive(Debug)]
pub enum VaultError {
    Io(std::io::Error),
    Walk(String),
}

impl std::fmt::Display for VaultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Walk(message) => write!(f, "walk: {message}"),
        }
    }
}

impl std::error::Error for VaultError {}

impl From<std::io::Error> for VaultError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// A read-once snapshot of every Markdown note under a root directory.
pub struct MarkdownVault {
    root: PathBuf,
    pages: Vec<Page>,
}

impl MarkdownVault {
    pub fn open(root: &Path) -> Result<Self, VaultError> {
        let mut pages = Vec::new();
        // Sorted traversal keeps page order, and with it the whole view,
        // deterministic across runs.
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|err| VaultError::Walk(err.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            pages.push(load_page(root, entry.path())?);
        }
        Ok(Self {
            root: root.to_path_buf(),
            pages,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Vault for MarkdownVault {
    fn pages(&self) -> &[Page] {
        &self.pages
    }
}

fn load_page(root: &Path, file: &Path) -> Result<Page, VaultError> {
    let raw = std::fs::read_to_string(file)?;
    let rel_path = relative_path(root, file);
    let name = tl_core::model::file_stem(&rel_path).to_string();

    let (props_block, body, body_first_line) = split_frontmatter(&raw);
    let props = match props_block {
        Some(block) => frontmatter::parse(block),
        None => PageProps::default(),
    };

    let scanned = scan::scan_body(&name, &rel_path, body, body_first_line);

    let mut tags = props.tags;
    for tag in scanned.inline_tags {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(Page {
        path: rel_path,
        name,
        aliases: props.aliases,
        tags,
        include_tasks_from: props.include_tasks_from,
        children: props.children,
        outlinks: scanned.outlinks,
        exclude_tasks_with: props.exclude_tasks_with,
        exclude_tasks_from: props.exclude_tasks_from,
        mtime_ms: mtime_ms(file),
        tasks: scanned.tasks,
    })
}

fn relative_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let parts: Vec<String> = rel
        .components()
        .map(|part| part.as_os_str().to_string_lossy().to_string())
        .collect();
    parts.join("/")
}

/// Split a leading `---` frontmatter block from the body. Returns the block
/// (without fences), the body, and the 1-based file line the body starts on.
fn split_frontmatter(raw: &str) -> (Option<&str>, &str, u32) {
    let Some(rest) = raw.strip_prefix("---\n") else {
        return (None, raw, 1);
    };
    let Some(end) = rest.find("\n---\n").map(|idx| (idx, 5)).or_else(|| {
        rest.strip_suffix("\n---")
            .map(|head| (head.len(), rest.len() - head.len()))
    }) else {
        return (None, raw, 1);
    };
    let (idx, fence_len) = end;
    let block = &rest[..idx];
    let body = &rest[idx + fence_len..];
    // Opening fence + block lines + closing fence.
    let body_first_line = 2 + block.lines().count() as u32 + 1;
    (Some(block), body, body_first_line)
}

fn mtime_ms(file: &Path) -> i64 {
    let Ok(meta) = std::fs::metadata(file) else {
        return 0;
    };
    let Ok(modified) = meta.modified() else {
        return 0;
    };
    match modified.duration_since(std::time::UNIX_EPOCH) {
        Ok(age) => {
            let ms = age.as_millis();
            if ms >= i64::MAX as u128 {
                i64::MAX
            } else {
                ms as i64
            }
        }
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_core::model::AliasProperty;

    fn temp_dir(test_name: &str) -> PathBuf {
        let base = std::env::temp_dir();
        let pid = std::process::id();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = base.join(format!("tl_vault_{test_name}_{pid}_{nonce}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn split_frontmatter_variants() {
        let (block, body, first) = split_frontmatter("---\na: 1\n---\nbody\n");
        assert_eq!(block, Some("a: 1"));
        assert_eq!(body, "body\n");
        assert_eq!(first, 4);

        let (block, body, first) = split_frontmatter("no fences\n");
        assert_eq!(block, None);
        assert_eq!(body, "no fences\n");
        assert_eq!(first, 1);

        // Unterminated fence: treat the whole file as body.
        let (block, _, _) = split_frontmatter("---\na: 1\nbody\n");
        assert_eq!(block, None);
    }

    #[test]
    fn open_reads_pages_with_properties_and_tasks() {
        let dir = temp_dir("open");
        std::fs::write(
            dir.join("Project A.md"),
            "---\naliases:\n  - \"#projA\"\ntags: [active]\n---\n## Plan\n- [ ] first step\n",
        )
        .expect("write page");
        std::fs::create_dir_all(dir.join("sub")).expect("subdir");
        std::fs::write(dir.join("sub/Notes.md"), "- [ ] loose note #projA\n")
            .expect("write note");

        let vault = MarkdownVault::open(&dir).expect("open vault");
        assert_eq!(vault.pages().len(), 2);

        let project = vault.page("Project A").expect("project page");
        assert_eq!(project.path, "Project A.md");
        assert_eq!(
            project.aliases,
            AliasProperty::Values(vec!["#projA".to_string()])
        );
        assert!(project.has_tag("#active"));
        assert_eq!(project.tasks.len(), 1);
        assert_eq!(project.tasks[0].section, "Project A > Plan");
        assert_eq!(project.tasks[0].line, 7);
        assert!(project.mtime_ms > 0);

        let notes = vault.page("sub/Notes.md").expect("notes by path");
        assert_eq!(notes.name, "Notes");
        assert!(notes.has_tag("#projA"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn pages_resolve_by_name_or_path() {
        let dir = temp_dir("resolve");
        std::fs::write(dir.join("One.md"), "- [ ] a\n").expect("write");
        let vault = MarkdownVault::open(&dir).expect("open vault");
        assert!(vault.page("One").is_some());
        assert!(vault.page("One.md").is_some());
        assert!(vault.page("Missing").is_none());
        std::fs::remove_dir_all(&dir).ok();
    }
}
