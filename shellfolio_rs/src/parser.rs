//! Command line tokenizer.
//!
//! No quoting or escaping: the line is split on single spaces and empty
//! tokens are dropped.

use strsim::levenshtein;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lower-cased.
    pub name: String,
    /// Tokens not starting with `-`, in order.
    pub args: Vec<String>,
    /// Tokens starting with `-`, in order.
    pub flags: Vec<String>,
}

impl ParsedCommand {
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    pub fn wants_help(&self) -> bool {
        self.has_flag("--help") || self.has_flag("-h")
    }

    /// Positional arguments joined by single spaces. Runs of whitespace in
    /// the original line are not preserved.
    pub fn rest(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }
}

pub fn parse(line: &str) -> ParsedCommand {
    let mut tokens = line.split(' ').filter(|token| !token.is_empty());
    let name = tokens.next().map(str::to_lowercase).unwrap_or_default();

    let mut parsed = ParsedCommand {
        name,
        ..ParsedCommand::default()
    };
    for token in tokens {
        if token.starts_with('-') {
            parsed.flags.push(token.to_string());
        } else {
            parsed.args.push(token.to_string());
        }
    }
    parsed
}

/// Suggest a similar command using Levenshtein distance.
/// Returns Some(suggestion) if a close match is found (distance <= 2).
pub fn suggest_command<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best_match: Option<(&str, usize)> = None;

    for candidate in candidates {
        let distance = levenshtein(&input_lower, candidate);
        if distance > 2 {
            continue;
        }
        match best_match {
            Some((_, best)) if best <= distance => {}
            _ => best_match = Some((candidate, distance)),
        }
    }

    best_match.map(|(cmd, _)| cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_args_and_flags() {
        let parsed = parse("LS -la projects --color x");
        assert_eq!(parsed.name, "ls");
        assert_eq!(parsed.args, vec!["projects", "x"]);
        assert_eq!(parsed.flags, vec!["-la", "--color"]);
    }

    #[test]
    fn partition_keeps_every_token() {
        let line = "projects aws -v genai --help ops";
        let parsed = parse(line);
        let total = 1 + parsed.args.len() + parsed.flags.len();
        assert_eq!(total, line.split(' ').count());
        assert!(parsed.args.iter().all(|a| !a.starts_with('-')));
        assert!(parsed.flags.iter().all(|f| f.starts_with('-')));
    }

    #[test]
    fn runs_of_spaces_are_dropped() {
        let parsed = parse("projects   machine    learning");
        assert_eq!(parsed.args, vec!["machine", "learning"]);
        assert_eq!(parsed.rest().as_deref(), Some("machine learning"));
        assert_eq!(parse("pwd").rest(), None);
    }

    #[test]
    fn help_flags() {
        assert!(parse("cd --help").wants_help());
        assert!(parse("cd -h").wants_help());
        assert!(!parse("cd home").wants_help());
    }

    #[test]
    fn suggests_close_commands() {
        let names = ["help", "skills", "projects", "whoami"];
        assert_eq!(suggest_command("skils", names), Some("skills"));
        assert_eq!(suggest_command("PROJECT", names), Some("projects"));
        assert_eq!(suggest_command("frobnicate", names), None);
    }
}
