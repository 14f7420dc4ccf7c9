//! # shellfolio - a portfolio behind a simulated shell
//!
//! The interpreter core parses typed command lines, resolves aliases,
//! dispatches to command handlers, keeps a virtual working directory and
//! streams output through a cancellable typewriter renderer. Hosts feed it
//! key presses or lines of text and give the renderer a sink to write to.
//!
//! ## Usage as Library
//!
//! ```rust,no_run
//! use shellfolio::{BufferSink, BundledContent, Interpreter, ShellSettings};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = ShellSettings::new().with_instant(true).with_banner(false);
//!     let shell = Interpreter::new(settings, BufferSink::default(), BundledContent)?;
//!
//!     shell.submit("cd skills").await;
//!     shell.submit("pwd").await;
//!     println!("{}", shell.with_sink(|sink| sink.text()));
//!     Ok(())
//! }
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Public modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod alias;
pub mod colors;
pub mod commands;
pub mod config;
pub mod content;
pub mod format;
pub mod history;
pub mod host;
pub mod interpreter;
pub mod parser;
pub mod render;
pub mod session;
pub mod sink;
pub mod vfs;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports for convenience
// ─────────────────────────────────────────────────────────────────────────────

pub use colors::{ColorMode, Painter};
pub use config::{CliOptions, FileConfig, ResolvedParams};
pub use content::{BundledContent, ContentError, ContentProvider, ContentSource, DirectoryContent};
pub use interpreter::Interpreter;
pub use render::{LineStyle, OutputSink, Pacing, RenderOutcome, Renderer};
pub use sink::{BufferSink, StreamSink};
pub use vfs::{NavigationError, VirtualPath};

use config::{DEFAULT_HOST, DEFAULT_USER};
use history::DEFAULT_HISTORY_LIMIT;

// ─────────────────────────────────────────────────────────────────────────────
// Library-first settings builder
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for one interpreter.
///
/// ```rust
/// use shellfolio::ShellSettings;
///
/// let settings = ShellSettings::new()
///     .with_user("guest")
///     .with_host("lab")
///     .with_instant(true);
/// assert_eq!(settings.home.to_string(), "/home/amit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// User shown in the prompt (default: "oneamitj")
    pub user: String,
    /// Host shown in the prompt (default: "devops")
    pub host: String,
    /// Home directory of the virtual tree (default: /home/amit)
    pub home: VirtualPath,
    /// Typewriter pacing
    pub pacing: Pacing,
    /// History entries kept (default: 500)
    pub history_limit: usize,
    /// Render the welcome banner on boot (default: true)
    pub banner: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellSettings {
    pub fn new() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            home: VirtualPath::root().join("home").join("amit"),
            pacing: Pacing::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            banner: true,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the home directory. Paths that are not absolute, or the root
    /// itself, are ignored.
    pub fn with_home(mut self, home: &str) -> Self {
        if let Some(path) = VirtualPath::parse_absolute(home)
            && !path.is_root()
        {
            self.home = path;
        }
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Skip every typewriter delay.
    pub fn with_instant(mut self, instant: bool) -> Self {
        self.pacing.instant = instant;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}

impl From<&ResolvedParams> for ShellSettings {
    fn from(params: &ResolvedParams) -> Self {
        ShellSettings {
            user: params.user.clone(),
            host: params.host.clone(),
            home: params.home.clone(),
            pacing: params.pacing,
            history_limit: params.history_limit,
            banner: params.banner,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Version info
// ─────────────────────────────────────────────────────────────────────────────

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HOME;

    #[test]
    fn default_home_matches_constant() {
        assert_eq!(ShellSettings::new().home.to_string(), DEFAULT_HOME);
    }

    #[test]
    fn builder_ignores_invalid_home() {
        let settings = ShellSettings::new().with_home("relative").with_home("/");
        assert_eq!(settings.home.to_string(), DEFAULT_HOME);
        let settings = ShellSettings::new().with_home("/home/guest");
        assert_eq!(settings.home.to_string(), "/home/guest");
    }
}
