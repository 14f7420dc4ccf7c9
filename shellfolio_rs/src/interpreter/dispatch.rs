//! Dispatch: help interception, registry lookup, themed refusals and error
//! containment.

use shellfolio_content::pages;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::Interpreter;
use super::handlers::{SPEED_HELP, SPEED_WARNING};
use crate::content::ContentProvider;
use crate::parser::{ParsedCommand, suggest_command};
use crate::render::OutputSink;

const FORK_BOMB: &str = ":(){:|:&};:";

/// Whether the raw line contains the classic shell fork bomb, ignoring
/// whitespace.
pub(crate) fn is_fork_bomb(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact.contains(FORK_BOMB)
}

/// Refusal page for destructive-looking commands that are not registered.
pub(crate) fn dangerous_refusal(parsed: &ParsedCommand) -> Option<&'static str> {
    let name = parsed.name.as_str();
    if name == "rm" && parsed.flags.iter().any(|flag| is_recursive_or_force(flag)) {
        return Some(pages::RECURSIVE_DELETE);
    }
    if name.starts_with("mkfs") {
        return Some(pages::FORMAT_DISK);
    }
    if name == "dd" && parsed.args.iter().any(|arg| arg.starts_with("of=/dev/")) {
        return Some(pages::DISK_WIPE);
    }
    None
}

fn is_recursive_or_force(flag: &str) -> bool {
    match flag.strip_prefix("--") {
        Some(long) => matches!(long, "recursive" | "force"),
        None => flag
            .trim_start_matches('-')
            .chars()
            .any(|c| matches!(c, 'r' | 'R' | 'f')),
    }
}

impl<S: OutputSink, C: ContentProvider> Interpreter<S, C> {
    pub(crate) async fn dispatch(
        &self,
        parsed: &ParsedCommand,
        raw: &str,
        token: &CancellationToken,
    ) {
        if is_fork_bomb(raw) {
            self.type_text(token, pages::FORK_BOMB, SPEED_WARNING).await;
            return;
        }

        if parsed.wants_help() {
            match self.registry.help_for(&parsed.name) {
                Some(help) => {
                    self.type_text(token, &help.render(), SPEED_HELP).await;
                }
                None => {
                    self.error_line(token, &format!("No help available for {}", parsed.name));
                }
            }
            return;
        }

        let Some(spec) = self.registry.lookup(&parsed.name) else {
            self.unmatched(parsed, token).await;
            return;
        };

        if let Err(err) = self.run(spec.id, parsed, token).await {
            self.report_failure(token, &parsed.name, &err);
        }
    }

    async fn unmatched(&self, parsed: &ParsedCommand, token: &CancellationToken) {
        if let Some(page) = dangerous_refusal(parsed) {
            self.type_text(token, page, SPEED_WARNING).await;
            return;
        }

        let mut message = format!(
            "Command not found: {}. Type 'help' for available commands.",
            parsed.name
        );
        if let Some(suggestion) = suggest_command(&parsed.name, self.registry.names()) {
            message.push_str(&format!(" Did you mean '{suggestion}'?"));
        }
        self.error_line(token, &message);
    }

    fn report_failure(
        &self,
        token: &CancellationToken,
        command: &str,
        err: &anyhow::Error,
    ) {
        warn!(command, error = %format!("{err:#}"), "command failed");
        self.error_line(token, &format!("Error executing command: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn fork_bomb_ignores_whitespace() {
        assert!(is_fork_bomb(":(){ :|:& };:"));
        assert!(is_fork_bomb("echo hi; : ( ) { : | : & } ; :"));
        assert!(!is_fork_bomb(":(){ echo }"));
    }

    #[test]
    fn destructive_idioms() {
        assert_eq!(dangerous_refusal(&parse("rm -rf /")), Some(pages::RECURSIVE_DELETE));
        assert_eq!(dangerous_refusal(&parse("rm -R tmp")), Some(pages::RECURSIVE_DELETE));
        assert_eq!(
            dangerous_refusal(&parse("rm --force x")),
            Some(pages::RECURSIVE_DELETE)
        );
        assert_eq!(dangerous_refusal(&parse("mkfs.ext4 /dev/sda1")), Some(pages::FORMAT_DISK));
        assert_eq!(
            dangerous_refusal(&parse("dd if=/dev/zero of=/dev/sda")),
            Some(pages::DISK_WIPE)
        );
        assert_eq!(dangerous_refusal(&parse("rm notes.txt")), None);
        assert_eq!(dangerous_refusal(&parse("dd if=a of=b")), None);
    }
}
