use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use shellfolio_content::{ExperienceRecord, ProjectCatalog, SkillCatalog};

use super::*;
use crate::commands::CommandId;
use crate::content::{BundledContent, ContentError};
use crate::render::Pacing;
use crate::sink::BufferSink;

fn settings() -> ShellSettings {
    ShellSettings::new().with_instant(true).with_banner(false)
}

fn shell() -> Interpreter<BufferSink, BundledContent> {
    Interpreter::new(settings(), BufferSink::default(), BundledContent).unwrap()
}

fn errors<C: ContentProvider>(shell: &Interpreter<BufferSink, C>) -> Vec<String> {
    shell.with_sink(|sink| {
        sink.styled(LineStyle::Error)
            .into_iter()
            .map(str::to_string)
            .collect()
    })
}

fn text<C: ContentProvider>(shell: &Interpreter<BufferSink, C>) -> String {
    shell.with_sink(|sink| sink.text())
}

thread_local! {
    static FAILING_COMMAND: Cell<Option<CommandId>> = const { Cell::new(None) };
}

/// Makes the next dispatch of `id` on this thread fail inside the handler.
fn fail_next(id: CommandId) {
    FAILING_COMMAND.with(|slot| slot.set(Some(id)));
}

pub(super) fn injected_failure(id: CommandId) -> Option<anyhow::Error> {
    FAILING_COMMAND.with(|slot| {
        if slot.get() != Some(id) {
            return None;
        }
        slot.set(None);
        Some(anyhow::anyhow!("clock stopped"))
    })
}

struct OfflineContent;

fn offline(kind: &str) -> ContentError {
    ContentError::Io {
        path: PathBuf::from(format!("/offline/{kind}.json")),
        source: io::Error::other("offline"),
    }
}

impl ContentProvider for OfflineContent {
    async fn fetch_skills(&self) -> Result<SkillCatalog, ContentError> {
        Err(offline("skills"))
    }

    async fn fetch_projects(&self) -> Result<ProjectCatalog, ContentError> {
        Err(offline("projects"))
    }

    async fn fetch_experience(&self) -> Result<ExperienceRecord, ContentError> {
        Err(offline("experience"))
    }
}

#[tokio::test]
async fn cd_round_trip_returns_home() {
    let shell = shell();
    assert_eq!(shell.cwd().to_string(), "/home/amit");

    shell.submit("cd skills").await;
    assert_eq!(shell.cwd().to_string(), "/home/amit/skills");
    assert_eq!(shell.prompt(), "oneamitj@devops:/home/amit/skills$");

    shell.submit("cd ..").await;
    assert_eq!(shell.cwd().to_string(), "/home/amit");
    assert!(text(&shell).contains("Changed to: /home/amit/skills"));
    assert!(errors(&shell).is_empty());
}

#[tokio::test]
async fn failed_cd_keeps_path_and_lists_shortcuts() {
    let shell = shell();
    shell.submit("cd nowhere").await;

    assert_eq!(shell.cwd().to_string(), "/home/amit");
    assert_eq!(errors(&shell), vec!["cd: nowhere: No such directory"]);
    let out = text(&shell);
    assert!(out.contains(
        "Available directories: ~, home, skills, projects, experience, contact, about, .., ., /"
    ));
}

#[tokio::test]
async fn help_flag_does_not_navigate() {
    let shell = shell();
    shell.submit("cd --help").await;

    assert_eq!(shell.cwd().to_string(), "/home/amit");
    assert!(text(&shell).contains("Usage: cd"));
    assert!(errors(&shell).is_empty());
}

#[tokio::test]
async fn help_topic_matches_help_flag() {
    let shell = shell();
    shell.submit("help skills").await;
    let by_topic = text(&shell);
    shell.with_sink(|sink| sink.clear());
    shell.submit("skills -h").await;
    let by_flag = text(&shell);

    let strip_echo = |s: &str| s.lines().skip(1).collect::<Vec<_>>().join("\n");
    assert_eq!(strip_echo(&by_topic), strip_echo(&by_flag));

    shell.submit("help nope").await;
    assert_eq!(errors(&shell), vec!["No help available for nope"]);
}

#[tokio::test]
async fn unknown_command_is_one_error_line() {
    let shell = shell();
    shell.submit("frobnicate").await;

    let errors = errors(&shell);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("frobnicate"));
    assert!(errors[0].contains("help"));
}

#[tokio::test]
async fn near_miss_gets_a_suggestion() {
    let shell = shell();
    shell.submit("skils").await;
    assert_eq!(
        errors(&shell),
        vec!["Command not found: skils. Type 'help' for available commands. Did you mean 'skills'?"]
    );
}

#[tokio::test]
async fn echo_uses_prompt_and_trimmed_line() {
    let shell = shell();
    shell.submit("   pwd   ").await;
    shell.submit("    ").await;

    let echoes: Vec<String> = shell.with_sink(|sink| {
        sink.styled(LineStyle::Echo)
            .into_iter()
            .map(str::to_string)
            .collect()
    });
    assert_eq!(echoes, vec!["oneamitj@devops:/home/amit$ pwd"]);
    assert_eq!(shell.history_entries(), vec!["pwd"]);
}

#[tokio::test]
async fn ll_alias_lists_home() {
    let shell = shell();
    shell.submit("ll").await;
    let out = text(&shell);
    assert!(out.contains("📁 Current directory: /home/amit"));
    assert!(out.contains("Total: 12 items"));
}

#[tokio::test]
async fn content_failure_renders_generic_line() {
    let shell = Interpreter::new(settings(), BufferSink::default(), OfflineContent).unwrap();
    shell.submit("skills").await;
    shell.submit("projects aws").await;
    shell.submit("experience").await;

    assert_eq!(
        errors(&shell),
        vec![
            "Error loading skills data",
            "Error loading projects data",
            "Error loading experience data",
        ]
    );
    assert!(!text(&shell).contains("offline"));
}

#[tokio::test]
async fn skills_views() {
    let shell = shell();
    shell.submit("skills cloud_platforms").await;
    assert!(text(&shell).contains("★★★★★"));

    shell.submit("skills underwater_basketry").await;
    let errors = errors(&shell);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("underwater_basketry"));
    assert!(errors[0].contains("cloud_platforms"));
}

#[tokio::test]
async fn projects_filter_without_match() {
    let shell = shell();
    shell.submit("projects cobol mainframe").await;
    assert!(text(&shell).contains("No projects match 'cobol mainframe'"));
}

#[tokio::test]
async fn handler_failure_is_reported_and_shell_recovers() {
    let shell = shell();
    fail_next(CommandId::Date);
    shell.submit("date").await;

    assert_eq!(errors(&shell), vec!["Error executing command: clock stopped"]);
    assert!(!text(&shell).contains("NPT"));
    assert!(!shell.is_rendering());

    shell.submit("pwd").await;
    assert_eq!(errors(&shell).len(), 1);
    assert!(shell.with_sink(|sink| sink.lines().iter().any(|line| line.text == "/home/amit")));
    assert_eq!(shell.history_entries(), vec!["date", "pwd"]);
}

#[tokio::test]
async fn cat_targets() {
    let shell = shell();
    shell.submit("cat").await;
    shell.submit("cat secrets.txt").await;
    shell.submit("cat ABOUT.TXT").await;

    assert_eq!(
        errors(&shell),
        vec!["cat: missing file operand", "cat: secrets.txt: No such file or directory"]
    );
    assert!(text(&shell).contains("ABOUT AMIT JOSHI"));
}

#[tokio::test]
async fn sudo_variants() {
    let shell = shell();
    shell.submit("sudo").await;
    let plain = text(&shell);
    shell.submit("sudo rm -rf /").await;
    let dangerous = text(&shell);

    assert!(errors(&shell).is_empty());
    assert!(plain.contains("not in the sudoers file"));
    assert!(!plain.contains("Operation not permitted"));
    assert!(dangerous.contains("sudo: rm -rf /: Operation not permitted"));
}

#[tokio::test]
async fn fork_bomb_and_rm_are_refused() {
    let shell = shell();
    shell.submit(":(){ :|:& };:").await;
    shell.submit("rm -rf /").await;

    let out = text(&shell);
    assert!(out.contains("FORK BOMB DEFUSED"));
    assert!(out.contains("rm: refusing to remove anything recursively"));
    assert!(errors(&shell).is_empty());
}

#[tokio::test]
async fn history_accessors_walk_back_and_forth() {
    let shell = shell();
    for line in ["a", "b", "c"] {
        shell.submit(line).await;
    }
    assert_eq!(shell.history_previous().as_deref(), Some("c"));
    assert_eq!(shell.history_previous().as_deref(), Some("b"));
    assert_eq!(shell.history_next(), "c");
    assert_eq!(shell.history_next(), "");

    shell.submit("history").await;
    let out = text(&shell);
    assert!(out.contains("   1  a"));
    assert!(out.contains("   4  history"));
}

#[tokio::test]
async fn exit_sets_flag() {
    let shell = shell();
    assert!(!shell.exit_requested());
    shell.submit("exit").await;
    assert!(shell.exit_requested());
    assert!(text(&shell).contains("Thanks for visiting"));
}

#[tokio::test]
async fn reboot_returns_home_and_replays_banner() {
    let shell = shell();
    shell.submit("cd projects").await;
    shell.submit("reboot").await;

    assert_eq!(shell.cwd().to_string(), "/home/amit");
    let (clears, out) = shell.with_sink(|sink| (sink.clear_count(), sink.text()));
    assert_eq!(clears, 1);
    assert!(out.contains("WELCOME TO AMIT'S SYSTEM"));
    assert!(!out.contains("Changed to"));
}

#[tokio::test]
async fn clear_empties_the_sink() {
    let shell = shell();
    shell.submit("whoami").await;
    shell.submit("cls").await;
    let (clears, lines) = shell.with_sink(|sink| (sink.clear_count(), sink.lines().len()));
    assert_eq!(clears, 1);
    assert_eq!(lines, 0);
}

#[tokio::test]
async fn boot_respects_banner_setting() {
    let quiet = shell();
    assert_eq!(quiet.boot().await, RenderOutcome::Completed);
    assert!(quiet.with_sink(|sink| sink.lines().is_empty()));

    let loud = Interpreter::new(
        settings().with_banner(true),
        BufferSink::default(),
        BundledContent,
    )
    .unwrap();
    assert_eq!(loud.boot().await, RenderOutcome::Completed);
    assert!(text(&loud).contains("Boot sequence complete"));
}

#[tokio::test(start_paused = true)]
async fn interrupt_leaves_marker() {
    let shell = Interpreter::new(
        settings().with_pacing(Pacing::default()),
        BufferSink::default(),
        BundledContent,
    )
    .unwrap();

    let (_, interrupted) = tokio::join!(shell.submit("about"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        shell.interrupt().await
    });

    assert!(interrupted);
    assert!(!shell.is_rendering());
    let marker = shell.with_sink(|sink| sink.lines().last().cloned());
    let marker = marker.unwrap();
    assert_eq!(marker.style, LineStyle::Interrupt);
    assert_eq!(marker.text, "^C");
    assert!(!text(&shell).contains("ABOUT AMIT JOSHI"));

    assert!(!shell.interrupt().await);
}

#[tokio::test(start_paused = true)]
async fn newer_submission_supersedes_older() {
    let shell = Interpreter::new(
        settings().with_pacing(Pacing::default()),
        BufferSink::default(),
        BundledContent,
    )
    .unwrap();

    tokio::join!(shell.submit("about"), shell.submit("whoami"), shell.submit("pwd"));

    let lines = shell.with_sink(|sink| sink.lines().to_vec());
    let echo_at = |cmd: &str| {
        lines
            .iter()
            .position(|line| line.style == LineStyle::Echo && line.text.ends_with(cmd))
            .unwrap()
    };
    let about = echo_at("about");
    let whoami = echo_at("whoami");
    let pwd = echo_at("pwd");

    // about was cut short, whoami rendered nothing, pwd ran to completion.
    assert!(about < whoami);
    assert_eq!(whoami + 1, pwd);
    assert!(lines.iter().all(|line| line.style != LineStyle::Interrupt));
    assert!(lines[pwd + 1..].iter().any(|line| line.text == "/home/amit"));
    assert!(!text(&shell).contains("ABOUT AMIT JOSHI"));
    assert_eq!(shell.cwd().to_string(), "/home/amit");
}
