#![forbid(unsafe_code)]

use crate::model::Page;

/// Read-only capability interface over the note collection. The pipeline
/// treats the vault as an immutable snapshot for the duration of one run.
pub trait Vault {
    /// Every page in the vault, in a stable order.
    fn pages(&self) -> &[Page];

    /// Resolve a bare reference (already stripped of link syntax) to a
    /// page, by path first, then by name.
    fn page(&self, reference: &str) -> Option<&Page> {
        resolve_reference(self.pages(), reference)
    }

    /// The page a run without an explicit target operates on, if the vault
    /// has such a notion.
    fn current(&self) -> Option<&Page> {
        None
    }
}

pub fn resolve_reference<'a>(pages: &'a [Page], reference: &str) -> Option<&'a Page> {
    pages
        .iter()
        .find(|page| page.path == reference)
        .or_else(|| pages.iter().find(|page| page.name == reference))
}
