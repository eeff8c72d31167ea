#![forbid(unsafe_code)]

const MAX_NOTES: usize = 200;
const MAX_NOTE_CHARS: usize = 300;

/// Bounded collector for per-run diagnostic notes. Notes are only kept when
/// debug output was requested; the pipeline emits them through the sink at
/// the end of selection.
#[derive(Debug, Default)]
pub struct Diagnostics {
    enabled: bool,
    notes: Vec<String>,
    dropped: usize,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            notes: Vec::new(),
            dropped: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn note(&mut self, text: impl Into<String>) {
        if !self.enabled {
            return;
        }
        if self.notes.len() >= MAX_NOTES {
            self.dropped += 1;
            return;
        }
        self.notes.push(truncate(&text.into(), MAX_NOTE_CHARS));
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for (idx, ch) in value.chars().enumerate() {
        if idx >= max_chars {
            break;
        }
        out.push(ch);
    }
    out
}
