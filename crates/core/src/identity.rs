#![forbid(unsafe_code)]

use crate::model::{AliasProperty, Page};

/// The focal page's derived identity: every name it can be matched by, and
/// the first hashtag-style alias as its primary tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Focus {
    /// Never empty: always contains at least the page name.
    pub aliases: Vec<String>,
    pub tag: Option<String>,
}

/// Derive the focus from the page's alias property.
///
/// Empty alias entries and an unreadable property are data-quality issues,
/// not errors: they push a warning and the resolver continues with whatever
/// remains, degrading to the page-name-only identity in the worst case.
pub fn resolve_focus(page: &Page, warnings: &mut Vec<String>) -> Focus {
    let mut aliases: Vec<String> = Vec::new();
    match &page.aliases {
        AliasProperty::Missing => {}
        AliasProperty::Malformed => {
            warnings.push(format!(
                "Could not read the aliases of '{}'; continuing with the page name only. \
                 Make sure tags are in quotes in the `aliases:` property.",
                page.name
            ));
        }
        AliasProperty::Values(values) => {
            for value in values {
                if value.trim().is_empty() {
                    warnings.push(
                        "One of the aliases is empty; make sure tags are in quotes \
                         in the `aliases:` property."
                            .to_string(),
                    );
                    continue;
                }
                aliases.push(value.clone());
            }
        }
    }

    // First-match policy: later tag-like aliases are ignored.
    let tag = aliases
        .iter()
        .find(|alias| alias.starts_with('#'))
        .cloned();

    if !aliases.iter().any(|alias| alias == &page.name) {
        aliases.push(page.name.clone());
    }

    Focus { aliases, tag }
}
