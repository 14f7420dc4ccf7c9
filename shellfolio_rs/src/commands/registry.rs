//! Validated command table.

use std::collections::HashSet;
use std::fmt::Write as _;

use thiserror::Error;

use super::help_texts::HELP_TABLE;
use super::id::{CommandGroup, CommandId};
use crate::alias::AliasTable;

/// Help entry for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpSpec {
    pub usage: &'static str,
    pub description: &'static str,
    /// `(flag, description)` pairs; `--help` is implied for every command.
    pub options: &'static [(&'static str, &'static str)],
    pub examples: &'static [&'static str],
}

impl HelpSpec {
    pub fn render(&self) -> String {
        let mut out = format!("\nUsage: {}\n{}\n", self.usage, self.description);
        out.push_str("\nOptions:\n");
        for (flag, description) in self.options {
            let _ = writeln!(out, "  {flag:<16} {description}");
        }
        let _ = writeln!(out, "  {:<16} {}", "-h, --help", "Show this help");
        if !self.examples.is_empty() {
            out.push_str("\nExamples:\n");
            for example in self.examples {
                let _ = writeln!(out, "  {example}");
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: CommandId,
    pub name: &'static str,
    pub summary: &'static str,
    pub help: &'static HelpSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command name '{0}' is registered twice")]
    DuplicateName(&'static str),
    #[error("command '{0}' has no help entry")]
    MissingHelp(&'static str),
    #[error("help entry '{0}' does not belong to any command")]
    OrphanHelp(&'static str),
    #[error("alias '{alias}' expands to '{target}', which is not a command")]
    DanglingAlias {
        alias: &'static str,
        target: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Registry {
    specs: Vec<CommandSpec>,
}

impl Registry {
    /// The full command set with its help table.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::build(CommandId::ALL, HELP_TABLE)
    }

    /// Build and validate: names are unique, every command has help and
    /// every help entry has a command.
    pub fn build(
        ids: &[CommandId],
        help: &'static [(&'static str, HelpSpec)],
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut specs = Vec::with_capacity(ids.len());
        for id in ids {
            let name = id.name();
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateName(name));
            }
            let (_, entry) = help
                .iter()
                .find(|(key, _)| *key == name)
                .ok_or(RegistryError::MissingHelp(name))?;
            specs.push(CommandSpec {
                id: *id,
                name,
                summary: id.summary(),
                help: entry,
            });
        }
        if let Some((orphan, _)) = help.iter().find(|(key, _)| !seen.contains(key)) {
            return Err(RegistryError::OrphanHelp(*orphan));
        }
        Ok(Self { specs })
    }

    /// Every alias must expand to a line whose first word is a command.
    pub fn validate_aliases(&self, aliases: &AliasTable) -> Result<(), RegistryError> {
        for (alias, target) in aliases.iter() {
            let head = target.split(' ').next().unwrap_or_default();
            if self.lookup(head).is_none() {
                return Err(RegistryError::DanglingAlias { alias, target });
            }
        }
        Ok(())
    }

    /// Exact lookup; callers pass the lower-cased name.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn help_for(&self, name: &str) -> Option<&'static HelpSpec> {
        self.lookup(name).map(|spec| spec.help)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Text of the `help` overview, grouped by section.
    pub fn overview(&self) -> String {
        let mut out = String::from("\nAvailable Commands:\n==================\n");
        for group in CommandGroup::ALL {
            let members: Vec<&CommandSpec> = self
                .specs
                .iter()
                .filter(|spec| spec.id.group() == *group)
                .collect();
            if members.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}", group.heading());
            for spec in members {
                let _ = writeln!(out, "   {:<19} - {}", spec.help.usage, spec.summary);
            }
            out.push('\n');
        }
        out.push_str("Tip: Use arrow keys to navigate command history\n");
        out.push_str("Tip: Add --help to any command for details\n");
        out
    }
}
