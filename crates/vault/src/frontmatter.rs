#![forbid(unsafe_code)]
//! Permissive YAML frontmatter extraction. Notes are hand-edited, so every
//! property accepts a scalar where a list is expected and tolerates odd
//! entries; only the `aliases` key distinguishes "unreadable" from
//! "absent", because the identity resolver degrades differently for each.

use serde_yaml::Value;
use tl_core::model::AliasProperty;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageProps {
    pub aliases: AliasProperty,
    pub tags: Vec<String>,
    pub include_tasks_from: Vec<String>,
    pub children: Vec<String>,
    pub exclude_tasks_with: Vec<String>,
    pub exclude_tasks_from: Vec<String>,
}

// serde_yaml is only consulted here; the rest of the crate works on the
// extracted PageProps.
pub fn parse(block: &str) -> PageProps {
    let value: Value = match serde_yaml::from_str(block) {
        Ok(value) => value,
        Err(_) => {
            // An unreadable block means the aliases cannot be trusted
            // either; the resolver falls back to the page name.
            return PageProps {
                aliases: AliasProperty::Malformed,
                ..PageProps::default()
            };
        }
    };
    let Value::Mapping(map) = value else {
        return PageProps::default();
    };

    let aliases = match map.get("aliases") {
        None | Some(Value::Null) => AliasProperty::Missing,
        Some(value) => alias_values(value),
    };

    PageProps {
        aliases,
        tags: tag_list(map.get("tags")),
        include_tasks_from: string_list(map.get("includeTasksFrom")),
        children: string_list(map.get("children")),
        exclude_tasks_with: string_list(map.get("excludeTasksWith")),
        exclude_tasks_from: string_list(map.get("excludeTasksFrom")),
    }
}

fn alias_values(value: &Value) -> AliasProperty {
    match value {
        Value::Sequence(seq) => AliasProperty::Values(
            seq.iter()
                .map(|entry| scalar_string(entry).unwrap_or_default())
                .collect(),
        ),
        // A single non-array value becomes a one-element list.
        _ => match scalar_string(value) {
            Some(text) => AliasProperty::Values(vec![text]),
            None => AliasProperty::Malformed,
        },
    }
}

fn tag_list(value: Option<&Value>) -> Vec<String> {
    string_list(value)
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            if tag.starts_with('#') {
                tag
            } else {
                format!("#{tag}")
            }
        })
        .collect()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_string).collect(),
        Some(other) => scalar_string(other).into_iter().collect(),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        // A null entry becomes an empty string so the resolver can report
        // it as a data-quality warning instead of dropping it silently.
        Value::Null => Some(String::new()),
        _ => None,
    }
}
