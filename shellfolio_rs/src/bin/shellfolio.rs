//! shellfolio CLI binary
//!
//! Interactive on a terminal, script mode everywhere else. For library usage,
//! see the `shellfolio` crate documentation.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::filter::LevelFilter;

use shellfolio::commands::{CommandGroup, Registry};
use shellfolio::config::{
    CliOptions, ResolvedParams, default_config_path, load_config, resolve_params,
};
use shellfolio::content::check_all;
use shellfolio::host::{run_script, run_terminal};
use shellfolio::{ColorMode, ContentSource, Painter, ShellSettings};

/// A portfolio you explore like a shell: cd into skills, cat the resume,
/// and try not to rm -rf anything.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct RootCli {
    #[command(subcommand)]
    command: Option<CliCommand>,
    #[command(flatten)]
    run: Cli,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print every shell command with its summary.
    Commands,
    /// Load every content source and report what was found.
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
struct Cli {
    /// Optional config file (default <config dir>/shellfolio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// User shown in the prompt.
    #[arg(long)]
    user: Option<String>,
    /// Host shown in the prompt.
    #[arg(long)]
    host: Option<String>,
    /// Absolute home directory of the virtual tree.
    #[arg(long)]
    home: Option<String>,
    /// Print output at once instead of typing it out.
    #[arg(long, default_value_t = false)]
    instant: bool,
    /// Typing speed scale in percent (100 = normal, 50 = twice as fast).
    #[arg(long)]
    speed_percent: Option<u32>,
    /// Random extra delay per character, in milliseconds.
    #[arg(long)]
    jitter_ms: Option<u64>,
    /// Characters between scroll-to-bottom flushes.
    #[arg(long)]
    scroll_every: Option<usize>,
    /// History entries kept.
    #[arg(long)]
    history_limit: Option<usize>,
    /// Directory with skills.json, projects.json and experience.json.
    #[arg(long)]
    content_dir: Option<PathBuf>,
    /// Colored output (auto|always|never).
    #[arg(long)]
    color: Option<ColorMode>,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
    /// Skip the welcome banner.
    #[arg(long, default_value_t = false)]
    no_banner: bool,
    /// Run this line in script mode. Repeat for several lines.
    #[arg(long = "exec", short = 'e', value_name = "LINE")]
    exec: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct CheckArgs {
    #[command(flatten)]
    cli: Cli,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let root = RootCli::parse();

    match &root.command {
        Some(CliCommand::Commands) => {
            print_commands()?;
            return Ok(());
        }
        Some(CliCommand::Check(args)) => {
            return run_check(&args.cli).await;
        }
        None => {}
    }

    let cli = root.run;
    let params = load_params(&cli)?;
    init_tracing(&params.log_level)?;

    let painter = Painter::new(params.color);
    let content = ContentSource::from_dir(params.content_dir.clone());
    let settings = ShellSettings::from(&params);

    let interactive =
        cli.exec.is_empty() && io::stdin().is_terminal() && io::stdout().is_terminal();
    tracing::info!(
        user = params.user.as_str(),
        home = %params.home,
        content = %content.describe(),
        interactive,
        "shellfolio starting"
    );

    if interactive {
        return run_terminal(settings, content, painter).await;
    }

    let lines = if cli.exec.is_empty() {
        read_stdin_lines().await?
    } else {
        cli.exec.clone()
    };
    let settings = settings.with_instant(true).with_banner(false);
    run_script(settings, content, lines, io::stdout(), painter).await?;
    Ok(())
}

fn load_params(cli: &Cli) -> Result<ResolvedParams> {
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;
    resolve_params(cli, config.as_ref())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level = log_level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level: {log_level}"))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

async fn read_stdin_lines() -> Result<Vec<String>> {
    let mut reader = BufReader::new(tokio::io::stdin()).lines();
    let mut lines = Vec::new();
    while let Some(line) = reader.next_line().await? {
        lines.push(line);
    }
    Ok(lines)
}

fn print_commands() -> Result<()> {
    let registry = Registry::standard()?;
    for &group in CommandGroup::ALL {
        println!("{}", group.heading());
        for spec in registry.specs().iter().filter(|spec| spec.id.group() == group) {
            println!("  {:<16} {}", spec.name, spec.summary);
        }
    }
    Ok(())
}

async fn run_check(cli: &Cli) -> Result<()> {
    let params = load_params(cli)?;
    init_tracing(&params.log_level)?;

    let painter = Painter::new(params.color);
    let content = ContentSource::from_dir(params.content_dir.clone());
    println!("Content source: {}", painter.path(&content.describe()));

    let mut failures = 0usize;
    for (kind, result) in check_all(&content).await {
        match result {
            Ok(summary) => println!("  {} {kind}: {summary}", painter.ok("ok")),
            Err(err) => {
                failures += 1;
                println!("  {} {kind}: {err}", painter.error("error"));
            }
        }
    }

    if failures > 0 {
        bail!("{failures} content source(s) failed to load");
    }
    Ok(())
}

impl CliOptions for Cli {
    fn user(&self) -> Option<String> {
        self.user.clone()
    }
    fn host(&self) -> Option<String> {
        self.host.clone()
    }
    fn home(&self) -> Option<String> {
        self.home.clone()
    }
    fn instant(&self) -> bool {
        self.instant
    }
    fn speed_percent(&self) -> Option<u32> {
        self.speed_percent
    }
    fn jitter_ms(&self) -> Option<u64> {
        self.jitter_ms
    }
    fn scroll_every(&self) -> Option<usize> {
        self.scroll_every
    }
    fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }
    fn content_dir(&self) -> Option<PathBuf> {
        self.content_dir.clone()
    }
    fn color(&self) -> Option<ColorMode> {
        self.color
    }
    fn log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
    fn no_banner(&self) -> bool {
        self.no_banner
    }
}
