//! The command interpreter.
//!
//! One `Interpreter` owns everything a shell needs: session state, the
//! renderer, the command registry, the virtual filesystem and the content
//! provider. Hosts drive it through [`Interpreter::submit`],
//! [`Interpreter::interrupt`] and the history accessors.
//!
//! Submissions are ordered by a dispatch gate. Each one owns a cancellation
//! token; submitting a new line cancels the previous token, so whatever the
//! previous command still had to render stops at once. Session data sits
//! behind a synchronous mutex that is never held across an await.

mod dispatch;
mod handlers;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::ShellSettings;
use crate::alias::AliasTable;
use crate::commands::{Registry, RegistryError};
use crate::content::ContentProvider;
use crate::parser;
use crate::render::{LineStyle, OutputSink, RenderOutcome, Renderer};
use crate::session::Session;
use crate::vfs::{VirtualFs, VirtualPath};

/// Speed of the boot banner, in milliseconds per character.
pub const BANNER_SPEED_MS: u64 = 3;

pub struct Interpreter<S, C> {
    settings: ShellSettings,
    registry: Registry,
    aliases: AliasTable,
    fs: VirtualFs,
    content: C,
    renderer: Renderer<S>,
    session: Mutex<Session>,
    gate: tokio::sync::Mutex<()>,
    current: Mutex<CancellationToken>,
}

impl<S: OutputSink, C: ContentProvider> Interpreter<S, C> {
    /// Build an interpreter, validating the command registry and aliases.
    pub fn new(settings: ShellSettings, sink: S, content: C) -> Result<Self, RegistryError> {
        let registry = Registry::standard()?;
        let aliases = AliasTable::standard();
        registry.validate_aliases(&aliases)?;

        let session = Session::new(settings.home.clone(), settings.history_limit);
        info!(
            user = %settings.user,
            host = %settings.host,
            home = %settings.home,
            commands = registry.specs().len(),
            "interpreter ready"
        );
        Ok(Self {
            fs: VirtualFs::new(settings.home.clone()),
            renderer: Renderer::new(sink, settings.pacing),
            session: Mutex::new(session),
            gate: tokio::sync::Mutex::new(()),
            current: Mutex::new(CancellationToken::new()),
            settings,
            registry,
            aliases,
            content,
        })
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    /// `user@host:/path$`
    pub fn prompt(&self) -> String {
        let cwd = self.lock_session().cwd.to_string();
        format!("{}@{}:{}$", self.settings.user, self.settings.host, cwd)
    }

    pub fn cwd(&self) -> VirtualPath {
        self.lock_session().cwd.clone()
    }

    pub fn exit_requested(&self) -> bool {
        self.lock_session().exit_requested
    }

    pub fn is_rendering(&self) -> bool {
        self.renderer.is_rendering()
    }

    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        self.renderer.with_sink(f)
    }

    pub fn into_sink(self) -> S {
        self.renderer.into_sink()
    }

    /// Up arrow.
    pub fn history_previous(&self) -> Option<String> {
        self.lock_session()
            .history
            .previous()
            .map(str::to_string)
    }

    /// Down arrow.
    pub fn history_next(&self) -> String {
        self.lock_session().history.next().to_string()
    }

    pub fn history_entries(&self) -> Vec<String> {
        self.lock_session()
            .history
            .entries()
            .map(str::to_string)
            .collect()
    }

    /// Render the welcome banner, if enabled.
    pub async fn boot(&self) -> RenderOutcome {
        if !self.settings.banner {
            return RenderOutcome::Completed;
        }
        let token = self.begin_submission();
        let _turn = self.gate.lock().await;
        self.renderer.wait_idle().await;
        self.type_text(&token, shellfolio_content::pages::WELCOME, BANNER_SPEED_MS)
            .await
    }

    /// Run one typed line. Empty input is ignored.
    pub async fn submit(&self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        self.lock_session().history.push(line);
        let token = self.begin_submission();

        let _turn = self.gate.lock().await;
        self.renderer.wait_idle().await;

        let prompt = self.prompt();
        self.renderer
            .emit_line(&format!("{prompt} {line}"), LineStyle::Echo);

        let canonical = self.aliases.resolve(line);
        let parsed = parser::parse(&canonical);
        debug!(
            command = %parsed.name,
            args = parsed.args.len(),
            flags = parsed.flags.len(),
            superseded = token.is_cancelled(),
            "dispatch"
        );
        self.dispatch(&parsed, line, &token).await;
    }

    /// User interrupt (Ctrl+C). Stops the active render and leaves a `^C`
    /// marker. Returns `false` when nothing was rendering.
    pub async fn interrupt(&self) -> bool {
        if !self.renderer.is_rendering() {
            return false;
        }
        self.lock_current().cancel();
        self.renderer.preempt();
        self.renderer.wait_idle().await;
        self.renderer.emit_line("^C", LineStyle::Interrupt);
        true
    }

    /// Cancel the previous submission and hand out a token for the next.
    fn begin_submission(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = std::mem::replace(&mut *self.lock_current(), token.clone());
        previous.cancel();
        self.renderer.preempt();
        token
    }

    pub(crate) async fn type_text(
        &self,
        token: &CancellationToken,
        text: &str,
        speed_ms: u64,
    ) -> RenderOutcome {
        self.renderer.render_scoped(text, speed_ms, token).await
    }

    /// Error line, skipped once the submission is superseded.
    pub(crate) fn error_line(&self, token: &CancellationToken, message: &str) {
        if !token.is_cancelled() {
            self.renderer.emit_line(message, LineStyle::Error);
        }
    }

    pub(crate) fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_current(&self) -> MutexGuard<'_, CancellationToken> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
