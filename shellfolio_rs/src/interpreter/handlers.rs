//! Command handlers.
//!
//! Handlers render through the submission's token, so a superseded command
//! still applies its state changes but shows nothing further.

use anyhow::{Context, Result};
use chrono::{FixedOffset, Utc};
use shellfolio_content::pages;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::{BANNER_SPEED_MS, Interpreter};
use crate::commands::CommandId;
use crate::content::{ContentError, ContentKind, ContentProvider};
use crate::format;
use crate::parser::ParsedCommand;
use crate::render::OutputSink;
use crate::vfs::{DirectoryLister, FileTarget, PathResolver};

// Typewriter speeds, milliseconds per character.
pub(crate) const SPEED_DEFAULT: u64 = 15;
pub(crate) const SPEED_HELP: u64 = 10;
pub(crate) const SPEED_PAGE: u64 = 10;
pub(crate) const SPEED_LONG: u64 = 8;
pub(crate) const SPEED_DETAIL: u64 = 12;
pub(crate) const SPEED_WARNING: u64 = 12;
pub(crate) const SPEED_MATRIX: u64 = 20;

/// Nepal Time, UTC+5:45.
const NPT_OFFSET_SECS: i32 = 5 * 3600 + 45 * 60;

impl<S: OutputSink, C: ContentProvider> Interpreter<S, C> {
    pub(crate) async fn run(
        &self,
        id: CommandId,
        parsed: &ParsedCommand,
        token: &CancellationToken,
    ) -> Result<()> {
        #[cfg(test)]
        if let Some(err) = super::tests::injected_failure(id) {
            return Err(err);
        }
        match id {
            CommandId::Help => self.cmd_help(parsed, token).await,
            CommandId::About => self.page(token, pages::ABOUT, SPEED_PAGE).await,
            CommandId::Skills => self.cmd_skills(parsed, token).await,
            CommandId::Projects => self.cmd_projects(parsed, token).await,
            CommandId::Experience => self.cmd_experience(token).await,
            CommandId::Contact => self.page(token, pages::CONTACT, SPEED_PAGE).await,
            CommandId::Ls => self.cmd_ls(token).await,
            CommandId::Pwd => self.cmd_pwd(token).await,
            CommandId::Cd => self.cmd_cd(parsed, token).await,
            CommandId::Cat => self.cmd_cat(parsed, token).await,
            CommandId::Resume => self.cmd_resume(parsed, token).await,
            CommandId::Whoami => self.page(token, pages::WHOAMI, SPEED_DETAIL).await,
            CommandId::Clear => {
                if !token.is_cancelled() {
                    self.renderer.clear();
                }
                Ok(())
            }
            CommandId::Achievements => self.page(token, pages::ACHIEVEMENTS, SPEED_PAGE).await,
            CommandId::Awards => self.page(token, pages::AWARDS, SPEED_PAGE).await,
            CommandId::Certifications => {
                self.page(token, pages::CERTIFICATIONS, SPEED_PAGE).await
            }
            CommandId::LinkedIn => self.page(token, pages::LINKEDIN, SPEED_PAGE).await,
            CommandId::GitHub => self.page(token, pages::GITHUB, SPEED_PAGE).await,
            CommandId::Easter => self.page(token, pages::EASTER, SPEED_DEFAULT).await,
            CommandId::Matrix => self.page(token, pages::MATRIX, SPEED_MATRIX).await,
            CommandId::Hack => self.page(token, pages::HACK, SPEED_DEFAULT).await,
            CommandId::Sudo => self.cmd_sudo(parsed, token).await,
            CommandId::History => self.cmd_history(token).await,
            CommandId::Date => self.cmd_date(token).await,
            CommandId::Exit => self.cmd_exit(token).await,
            CommandId::Reboot => self.cmd_reboot(token).await,
        }
    }

    async fn page(&self, token: &CancellationToken, text: &str, speed_ms: u64) -> Result<()> {
        self.type_text(token, text, speed_ms).await;
        Ok(())
    }

    fn content_failed(&self, token: &CancellationToken, kind: ContentKind, err: &ContentError) {
        warn!(kind = kind.label(), error = %err, "content fetch failed");
        self.error_line(token, &format!("Error loading {kind} data"));
    }

    async fn cmd_help(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        match parsed.first_arg() {
            Some(topic) => {
                let topic = topic.to_lowercase();
                match self.registry.help_for(&topic) {
                    Some(help) => {
                        self.type_text(token, &help.render(), SPEED_HELP).await;
                    }
                    None => self.error_line(token, &format!("No help available for {topic}")),
                }
            }
            None => {
                self.type_text(token, &self.registry.overview(), SPEED_HELP)
                    .await;
            }
        }
        Ok(())
    }

    async fn cmd_skills(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        let catalog = match self.content.fetch_skills().await {
            Ok(catalog) => catalog,
            Err(err) => {
                self.content_failed(token, ContentKind::Skills, &err);
                return Ok(());
            }
        };
        match parsed.first_arg() {
            Some(category) => match catalog.get(category) {
                Some(skills) => {
                    let text = format::skill_category(category, skills);
                    self.type_text(token, &text, SPEED_DETAIL).await;
                }
                None => {
                    self.error_line(token, &format::unknown_category(category, &catalog));
                }
            },
            None => {
                self.type_text(token, &format::skills_overview(&catalog), SPEED_LONG)
                    .await;
            }
        }
        Ok(())
    }

    async fn cmd_projects(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        let catalog = match self.content.fetch_projects().await {
            Ok(catalog) => catalog,
            Err(err) => {
                self.content_failed(token, ContentKind::Projects, &err);
                return Ok(());
            }
        };
        let filter = parsed.rest();
        let text = format::projects(&catalog, filter.as_deref());
        self.type_text(token, &text, SPEED_LONG).await;
        Ok(())
    }

    async fn cmd_experience(&self, token: &CancellationToken) -> Result<()> {
        match self.content.fetch_experience().await {
            Ok(record) => {
                self.type_text(token, &format::experience(&record), SPEED_LONG)
                    .await;
            }
            Err(err) => self.content_failed(token, ContentKind::Experience, &err),
        }
        Ok(())
    }

    async fn cmd_ls(&self, token: &CancellationToken) -> Result<()> {
        let cwd = self.cwd();
        let text = format::listing(&self.fs.list(&cwd));
        self.type_text(token, &text, SPEED_PAGE).await;
        Ok(())
    }

    async fn cmd_pwd(&self, token: &CancellationToken) -> Result<()> {
        let text = format!("\n{}\n", self.cwd());
        self.type_text(token, &text, SPEED_DEFAULT).await;
        Ok(())
    }

    async fn cmd_cd(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        let target = parsed.first_arg().unwrap_or_default();
        let resolved = {
            let mut session = self.lock_session();
            let next = self.fs.change_directory(&session.cwd, target);
            if let Ok(path) = &next {
                session.cwd = path.clone();
            }
            next
        };
        match resolved {
            Ok(path) => {
                self.type_text(token, &format!("\nChanged to: {path}\n"), SPEED_DEFAULT)
                    .await;
            }
            Err(err) => {
                self.error_line(token, &err.to_string());
                self.type_text(token, &format::available_directories(), SPEED_DEFAULT)
                    .await;
            }
        }
        Ok(())
    }

    async fn cmd_cat(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        let Some(name) = parsed.first_arg() else {
            self.error_line(token, "cat: missing file operand");
            return Ok(());
        };
        let Some(target) = self.fs.resolve_file(name) else {
            self.error_line(token, &format!("cat: {name}: No such file or directory"));
            return Ok(());
        };
        let (text, speed) = match target {
            FileTarget::About => (pages::ABOUT, SPEED_PAGE),
            FileTarget::Contact => (pages::CONTACT, SPEED_PAGE),
            FileTarget::Achievements => (pages::ACHIEVEMENTS, SPEED_PAGE),
            FileTarget::Awards => (pages::AWARDS, SPEED_PAGE),
            FileTarget::Resume => (pages::RESUME_OPEN, SPEED_DEFAULT),
            FileTarget::LinkedIn => (pages::LINKEDIN, SPEED_PAGE),
            FileTarget::GitHub => (pages::GITHUB, SPEED_PAGE),
        };
        self.page(token, text, speed).await
    }

    async fn cmd_resume(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        let text = if parsed.has_flag("--download") {
            pages::RESUME_DOWNLOAD
        } else {
            pages::RESUME_OPEN
        };
        self.page(token, text, SPEED_DEFAULT).await
    }

    async fn cmd_sudo(&self, parsed: &ParsedCommand, token: &CancellationToken) -> Result<()> {
        let wants_rm = parsed.args.iter().any(|arg| arg == "rm");
        let text = if wants_rm && parsed.has_flag("-rf") {
            pages::SUDO_DANGER
        } else {
            pages::SUDO_DENIED
        };
        self.page(token, text, SPEED_WARNING).await
    }

    async fn cmd_history(&self, token: &CancellationToken) -> Result<()> {
        let text = {
            let session = self.lock_session();
            format::history(session.history.entries())
        };
        self.type_text(token, &text, SPEED_PAGE).await;
        Ok(())
    }

    async fn cmd_date(&self, token: &CancellationToken) -> Result<()> {
        let offset =
            FixedOffset::east_opt(NPT_OFFSET_SECS).context("invalid Nepal Time offset")?;
        let now = Utc::now().with_timezone(&offset);
        let text = format!(
            "\n📅 {}\n🕐 {} NPT (UTC+5:45)\n",
            now.format("%A, %B %-d %Y"),
            now.format("%H:%M:%S")
        );
        self.type_text(token, &text, SPEED_DEFAULT).await;
        Ok(())
    }

    async fn cmd_exit(&self, token: &CancellationToken) -> Result<()> {
        self.lock_session().exit_requested = true;
        self.page(token, pages::EXIT, SPEED_DEFAULT).await
    }

    async fn cmd_reboot(&self, token: &CancellationToken) -> Result<()> {
        self.lock_session().cwd = self.fs.home().clone();
        if self.type_text(token, pages::REBOOT, SPEED_DEFAULT).await
            == crate::render::RenderOutcome::Cancelled
        {
            return Ok(());
        }
        self.renderer.clear();
        self.page(token, pages::WELCOME, BANNER_SPEED_MS).await
    }
}
