//! Mutable per-shell state.

use crate::history::History;
use crate::vfs::VirtualPath;

/// Everything a shell session changes as commands run. Render state lives in
/// the interpreter's renderer.
#[derive(Debug, Clone)]
pub struct Session {
    pub cwd: VirtualPath,
    pub history: History,
    pub exit_requested: bool,
}

impl Session {
    pub fn new(home: VirtualPath, history_limit: usize) -> Self {
        Self {
            cwd: home,
            history: History::new(history_limit),
            exit_requested: false,
        }
    }
}
