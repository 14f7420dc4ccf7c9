//! Bounded command history with arrow-key traversal.

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Submitted lines, oldest first, plus a browsing cursor.
///
/// The cursor ranges over `0..=len`; `len` means "not browsing" and always
/// yields the empty string.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: usize,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Append a line, dropping the oldest past the limit, and stop browsing.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len();
    }

    /// Step back (Up arrow). Sticks at the oldest entry.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward (Down arrow). Past the newest entry this returns `""`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries[self.cursor].as_str()
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
