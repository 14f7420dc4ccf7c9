//! End-to-end CLI tests for shellfolio in script mode.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with a config path that never exists and colors off, so the
/// user's own config cannot leak into the tests.
fn shellfolio() -> Command {
    let mut cmd = cargo_bin_cmd!("shellfolio");
    cmd.args(["--config", "/nonexistent/shellfolio.toml", "--color", "never"]);
    cmd
}

mod script_mode {
    use super::*;

    #[test]
    fn pwd_prints_home() {
        shellfolio()
            .args(["--exec", "pwd"])
            .assert()
            .success()
            .stdout(predicate::str::contains("oneamitj@devops:/home/amit$ pwd"))
            .stdout(predicate::str::contains("\n/home/amit\n"));
    }

    #[test]
    fn unknown_command_reports_and_succeeds() {
        shellfolio()
            .args(["--exec", "frobnicate"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Command not found: frobnicate. Type 'help' for available commands.",
            ));
    }

    #[test]
    fn cd_then_pwd() {
        shellfolio()
            .args(["--exec", "cd skills", "--exec", "pwd"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Changed to: /home/amit/skills"))
            .stdout(predicate::str::contains("oneamitj@devops:/home/amit/skills$ pwd"));
    }

    #[test]
    fn help_flag_keeps_directory() {
        shellfolio()
            .args(["--exec", "cd --help", "--exec", "pwd"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: cd"))
            .stdout(predicate::str::contains("Changed to").not())
            .stdout(predicate::str::contains("oneamitj@devops:/home/amit$ pwd"));
    }

    #[test]
    fn reads_commands_from_stdin() {
        shellfolio()
            .write_stdin("ll\nexit\nwhoami\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Total: 12 items"))
            .stdout(predicate::str::contains("Thanks for visiting"))
            .stdout(predicate::str::contains("$ whoami").not());
    }

    #[test]
    fn prompt_overrides() {
        shellfolio()
            .args(["--user", "guest", "--host", "lab", "--home", "/home/guest"])
            .args(["--exec", "pwd"])
            .assert()
            .success()
            .stdout(predicate::str::contains("guest@lab:/home/guest$ pwd"));
    }

    #[test]
    fn no_color_codes_when_disabled() {
        shellfolio()
            .args(["--exec", "nope"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

mod subcommands {
    use super::*;

    #[test]
    fn commands_lists_registry() {
        cargo_bin_cmd!("shellfolio")
            .arg("commands")
            .assert()
            .success()
            .stdout(predicate::str::contains("skills"))
            .stdout(predicate::str::contains("reboot"));
    }

    #[test]
    fn check_bundled_content() {
        cargo_bin_cmd!("shellfolio")
            .args(["check", "--config", "/nonexistent/shellfolio.toml", "--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Content source: bundled"))
            .stdout(predicate::str::contains("ok skills"));
    }

    #[test]
    fn check_fails_on_broken_content_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("skills.json"), "{ not json").unwrap();

        cargo_bin_cmd!("shellfolio")
            .args(["check", "--config", "/nonexistent/shellfolio.toml", "--color", "never"])
            .arg("--content-dir")
            .arg(dir.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("error skills"))
            .stderr(predicate::str::contains("failed to load"));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn relative_home_is_rejected() {
        shellfolio()
            .args(["--home", "relative", "--exec", "pwd"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("must be an absolute path"));
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        shellfolio()
            .args(["--log-level", "loud", "--exec", "pwd"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid log level"));
    }

    #[test]
    fn config_file_sets_prompt() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("shell.toml");
        std::fs::write(&config, "user = \"visitor\"\nhost = \"kiosk\"\n").unwrap();

        cargo_bin_cmd!("shellfolio")
            .arg("--config")
            .arg(&config)
            .args(["--color", "never", "--exec", "pwd"])
            .assert()
            .success()
            .stdout(predicate::str::contains("visitor@kiosk:/home/amit$ pwd"));
    }
}
