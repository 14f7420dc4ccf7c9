//! Configuration file loading and parameter resolution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::colors::ColorMode;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::render::Pacing;
use crate::vfs::VirtualPath;

pub const DEFAULT_USER: &str = "oneamitj";
pub const DEFAULT_HOST: &str = "devops";
pub const DEFAULT_HOME: &str = "/home/amit";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Upper bound for the per-character random delay.
pub const MAX_JITTER_MS: u64 = 10_000;

/// Shell configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub user: Option<String>,
    pub host: Option<String>,
    pub home: Option<String>,
    pub instant: Option<bool>,
    pub speed_percent: Option<u32>,
    pub jitter_ms: Option<u64>,
    pub scroll_every: Option<usize>,
    pub history_limit: Option<usize>,
    pub content_dir: Option<String>,
    pub color: Option<ColorMode>,
    pub log_level: Option<String>,
    pub banner: Option<bool>,
}

/// Resolved runtime parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedParams {
    pub user: String,
    pub host: String,
    pub home: VirtualPath,
    pub pacing: Pacing,
    pub history_limit: usize,
    pub content_dir: Option<PathBuf>,
    pub color: ColorMode,
    pub log_level: String,
    pub banner: bool,
}

/// CLI options that can override config file settings.
///
/// This trait allows the binary to pass CLI arguments to resolve_params
/// without the library depending on clap types.
pub trait CliOptions {
    fn user(&self) -> Option<String>;
    fn host(&self) -> Option<String>;
    fn home(&self) -> Option<String>;
    /// `true` only when the flag was given.
    fn instant(&self) -> bool;
    fn speed_percent(&self) -> Option<u32>;
    fn jitter_ms(&self) -> Option<u64>;
    fn scroll_every(&self) -> Option<usize>;
    fn history_limit(&self) -> Option<usize>;
    fn content_dir(&self) -> Option<PathBuf>;
    fn color(&self) -> Option<ColorMode>;
    fn log_level(&self) -> Option<String>;
    /// `true` when `--no-banner` was given.
    fn no_banner(&self) -> bool;
}

pub fn expand_path(raw: impl AsRef<str>) -> PathBuf {
    let s = raw.as_ref();
    if let Some(stripped) = s.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(s)
}

/// `<config dir>/shellfolio/config.toml`, or `~/.shellfolio.toml` when the
/// platform has no config dir.
pub fn default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("shellfolio").join("config.toml"),
        None => expand_path("~/.shellfolio.toml"),
    }
}

/// Load a config file, picking the format by extension. A missing file is
/// not an error.
pub fn load_config(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cfg: FileConfig = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse yaml config {}", path.display()))?,
        "toml" => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?,
        _ => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json config {}", path.display()))?,
    };
    Ok(Some(cfg))
}

/// Resolve runtime parameters from CLI options and config file.
///
/// CLI options take precedence over config file settings, which take
/// precedence over built-in defaults.
pub fn resolve_params<C: CliOptions>(
    cli: &C,
    config: Option<&FileConfig>,
) -> Result<ResolvedParams> {
    let file = config.cloned().unwrap_or_default();

    let user = cli
        .user()
        .or(file.user)
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let host = cli
        .host()
        .or(file.host)
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let home_raw = cli
        .home()
        .or(file.home)
        .unwrap_or_else(|| DEFAULT_HOME.to_string());
    let home = VirtualPath::parse_absolute(&home_raw)
        .ok_or_else(|| anyhow!("home '{home_raw}' must be an absolute path"))?;
    if home.is_root() {
        return Err(anyhow!("home cannot be the root directory"));
    }

    let defaults = Pacing::default();
    let scroll_every = cli
        .scroll_every()
        .or(file.scroll_every)
        .unwrap_or(defaults.scroll_every);
    if scroll_every == 0 {
        return Err(anyhow!("scroll_every must be at least 1"));
    }
    let jitter_ms = cli
        .jitter_ms()
        .or(file.jitter_ms)
        .unwrap_or(defaults.jitter_ms);
    if jitter_ms > MAX_JITTER_MS {
        return Err(anyhow!("jitter_ms must be at most {MAX_JITTER_MS}"));
    }
    let pacing = Pacing {
        instant: cli.instant() || file.instant.unwrap_or(false),
        speed_percent: cli
            .speed_percent()
            .or(file.speed_percent)
            .unwrap_or(defaults.speed_percent),
        jitter_ms,
        scroll_every,
    };

    let history_limit = cli
        .history_limit()
        .or(file.history_limit)
        .unwrap_or(DEFAULT_HISTORY_LIMIT);
    if history_limit == 0 {
        return Err(anyhow!("history_limit must be at least 1"));
    }

    let content_dir = cli
        .content_dir()
        .map(|p| p.to_str().map(expand_path).unwrap_or_else(|| p.clone()))
        .or_else(|| file.content_dir.as_deref().map(expand_path));

    let color = cli.color().or(file.color).unwrap_or_default();
    let log_level = cli
        .log_level()
        .or(file.log_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let banner = !cli.no_banner() && file.banner.unwrap_or(true);

    Ok(ResolvedParams {
        user,
        host,
        home,
        pacing,
        history_limit,
        content_dir,
        color,
        log_level,
        banner,
    })
}
