//! Whole-line aliases.

/// Shorthand -> canonical command line.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("ll", "ls -la"),
    ("dir", "ls"),
    ("cls", "clear"),
    ("resume", "cat resume.pdf"),
    ("cv", "cat resume.pdf"),
];

/// Alias lookup keyed by the exact trimmed input line.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl AliasTable {
    pub fn standard() -> Self {
        Self::new(DEFAULT_ALIASES)
    }

    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Trim `raw` and substitute it if the whole line is an alias.
    /// Matching is case-sensitive and never fails.
    pub fn resolve(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        self.entries
            .iter()
            .find(|(alias, _)| *alias == trimmed)
            .map(|(_, target)| (*target).to_string())
            .unwrap_or_else(|| trimmed.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}
