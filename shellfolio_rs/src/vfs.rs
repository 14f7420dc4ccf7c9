//! Virtual filesystem: a fixed directory tree rooted at `/` with one home.
//!
//! Nothing here touches the real filesystem. Paths only ever point at the
//! root, the home directory or one of the named shortcut directories below it.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Paths
// ============================================================================

/// Absolute path as ordered segments; the root has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse `/a/b`. Relative paths and `.`/`..` segments are rejected.
    pub fn parse_absolute(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix('/')?;
        let mut segments = Vec::new();
        for segment in rest.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return None;
            }
            segments.push(segment.to_string());
        }
        Some(Self { segments })
    }

    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Drop the last segment; the root stays the root.
    pub fn pop(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cd: {target}: No such directory")]
    UnknownTarget { target: String },
}

/// Directories reachable by name from anywhere.
pub const SHORTCUT_DIRS: &[&str] = &["skills", "projects", "experience", "contact", "about"];

/// Every token `cd` accepts, in the order they are suggested.
pub fn shortcut_tokens() -> Vec<&'static str> {
    let mut tokens = vec!["~", "home"];
    tokens.extend_from_slice(SHORTCUT_DIRS);
    tokens.extend_from_slice(&["..", ".", "/"]);
    tokens
}

/// Resolves `cd` tokens against the current path.
pub trait PathResolver {
    fn change_directory(
        &self,
        current: &VirtualPath,
        token: &str,
    ) -> Result<VirtualPath, NavigationError>;

    fn parent_of(&self, path: &VirtualPath) -> VirtualPath;
}

/// Produces the listing shown by `ls`.
pub trait DirectoryLister {
    fn list(&self, path: &VirtualPath) -> DirectoryListing;
}

// ============================================================================
// Listings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Links and launchers; shown executable.
    Link,
}

impl EntryKind {
    pub fn permissions(&self) -> &'static str {
        match self {
            EntryKind::Directory => "drwxr-xr-x",
            EntryKind::File => "-rw-r--r--",
            EntryKind::Link => "-rwxr-xr-x",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    pub name: &'static str,
    pub kind: EntryKind,
    pub icon: &'static str,
    pub description: &'static str,
}

impl DirEntry {
    const fn new(
        name: &'static str,
        kind: EntryKind,
        icon: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            icon,
            description,
        }
    }

    /// Name as shown, with a trailing `/` on directories other than `..`.
    pub fn display_name(&self) -> String {
        if self.kind == EntryKind::Directory && self.name != ".." {
            format!("{}/", self.name)
        } else {
            self.name.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub path: VirtualPath,
    pub entries: Vec<DirEntry>,
    /// Extra line shown by the generic listing.
    pub hint: Option<&'static str>,
}

use EntryKind::{Directory, File, Link};

const PARENT: DirEntry = DirEntry::new("..", Directory, "📂", "Parent directory");

const ROOT_ENTRIES: &[DirEntry] = &[
    DirEntry::new("home", Directory, "📂", "User directories"),
    DirEntry::new("usr", Directory, "📂", "System utilities"),
    DirEntry::new("var", Directory, "📂", "Variable data"),
    DirEntry::new("etc", Directory, "📂", "Configuration files"),
];

const HOME_ENTRIES: &[DirEntry] = &[
    DirEntry::new("about", Directory, "📂", "Professional summary"),
    DirEntry::new("skills", Directory, "📂", "Technical skills directory"),
    DirEntry::new("projects", Directory, "📂", "Portfolio projects"),
    DirEntry::new("experience", Directory, "📂", "Work history"),
    DirEntry::new("contact", Directory, "📂", "Contact information"),
    DirEntry::new("achievements.txt", File, "📄", "Key career achievements"),
    DirEntry::new("awards.txt", File, "📄", "Competition wins & recognition"),
    DirEntry::new("resume.pdf", File, "📄", "Download resume"),
    DirEntry::new("linkedin.url", Link, "🔗", "LinkedIn profile"),
    DirEntry::new("github.url", Link, "🔗", "GitHub repositories"),
    DirEntry::new("easter.exe", Link, "🎮", "Hidden easter egg"),
    DirEntry::new("matrix.exe", Link, "💊", "Enter the Matrix"),
];

const SKILLS_ENTRIES: &[DirEntry] = &[
    PARENT,
    DirEntry::new("cloud_platforms", File, "📄", "AWS, GCP, Azure expertise"),
    DirEntry::new("devops_tools", File, "📄", "Terraform, Docker, K8s"),
    DirEntry::new("programming", File, "📄", "Python, Bash, Go, JS"),
    DirEntry::new("genai_tech", File, "📄", "OpenAI, Claude, Bedrock"),
    DirEntry::new("monitoring", File, "📄", "Prometheus, Grafana, ELK"),
    DirEntry::new("compliance", File, "📄", "HIPAA, SOC2 standards"),
];

const PROJECTS_ENTRIES: &[DirEntry] = &[
    PARENT,
    DirEntry::new("learning-list", Directory, "📂", "GenAI Alignment Checker"),
    DirEntry::new("addy-healthcare", Directory, "📂", "HIPAA-compliant AI Platform"),
    DirEntry::new("genai-platform", Directory, "📂", "GenAI R&D Platform"),
    DirEntry::new("evoke-medical", Directory, "📂", "Remote Device Monitoring"),
    DirEntry::new("mindera-atlas", Directory, "📂", "Skin Atlas Data Warehouse"),
    DirEntry::new("blockchain-systems", Directory, "📂", "Various blockchain projects"),
];

const GENERIC_ENTRIES: &[DirEntry] = &[
    PARENT,
    DirEntry::new("info.txt", File, "📄", "Directory information"),
];

const GENERIC_HINT: &str = "💡 Use 'cd ..' to go back or 'cd ~' to go home";

// ============================================================================
// Files
// ============================================================================

/// Files `cat` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTarget {
    About,
    Contact,
    Achievements,
    Awards,
    Resume,
    LinkedIn,
    GitHub,
}

impl FileTarget {
    pub const ALL: &'static [FileTarget] = &[
        FileTarget::About,
        FileTarget::Contact,
        FileTarget::Achievements,
        FileTarget::Awards,
        FileTarget::Resume,
        FileTarget::LinkedIn,
        FileTarget::GitHub,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            FileTarget::About => "about.txt",
            FileTarget::Contact => "contact.txt",
            FileTarget::Achievements => "achievements.txt",
            FileTarget::Awards => "awards.txt",
            FileTarget::Resume => "resume.pdf",
            FileTarget::LinkedIn => "linkedin.url",
            FileTarget::GitHub => "github.url",
        }
    }

    /// Case-insensitive lookup by file name.
    pub fn resolve(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|target| target.file_name() == lower)
    }
}

// ============================================================================
// The tree
// ============================================================================

/// The static tree built around one home directory.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    home: VirtualPath,
}

impl VirtualFs {
    pub fn new(home: VirtualPath) -> Self {
        Self { home }
    }

    pub fn home(&self) -> &VirtualPath {
        &self.home
    }

    pub fn resolve_file(&self, name: &str) -> Option<FileTarget> {
        FileTarget::resolve(name)
    }

    /// Whether `path` is a node of the tree.
    pub fn contains(&self, path: &VirtualPath) -> bool {
        path.is_root()
            || *path == self.home
            || SHORTCUT_DIRS.iter().any(|dir| *path == self.home.join(dir))
    }
}

impl PathResolver for VirtualFs {
    fn change_directory(
        &self,
        current: &VirtualPath,
        token: &str,
    ) -> Result<VirtualPath, NavigationError> {
        match token {
            "" | "~" | "home" => Ok(self.home.clone()),
            dir if SHORTCUT_DIRS.contains(&dir) => Ok(self.home.join(dir)),
            ".." => Ok(self.parent_of(current)),
            "." => Ok(current.clone()),
            "/" => Ok(VirtualPath::root()),
            other => Err(NavigationError::UnknownTarget {
                target: other.to_string(),
            }),
        }
    }

    fn parent_of(&self, path: &VirtualPath) -> VirtualPath {
        if path.is_root() || *path == self.home {
            VirtualPath::root()
        } else {
            path.pop()
        }
    }
}

impl DirectoryLister for VirtualFs {
    fn list(&self, path: &VirtualPath) -> DirectoryListing {
        let (entries, hint) = if path.is_root() {
            (ROOT_ENTRIES, None)
        } else if *path == self.home {
            (HOME_ENTRIES, None)
        } else if *path == self.home.join("skills") {
            (SKILLS_ENTRIES, None)
        } else if *path == self.home.join("projects") {
            (PROJECTS_ENTRIES, None)
        } else {
            (GENERIC_ENTRIES, Some(GENERIC_HINT))
        };
        DirectoryListing {
            path: path.clone(),
            entries: entries.to_vec(),
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fs() -> VirtualFs {
        VirtualFs::new(VirtualPath::parse_absolute("/home/amit").unwrap())
    }

    #[test]
    fn path_display() {
        assert_eq!(VirtualPath::root().to_string(), "/");
        let home = VirtualPath::parse_absolute("/home//amit/").unwrap();
        assert_eq!(home.to_string(), "/home/amit");
        assert_eq!(home.join("skills").to_string(), "/home/amit/skills");
        assert!(VirtualPath::parse_absolute("home/amit").is_none());
        assert!(VirtualPath::parse_absolute("/home/../etc").is_none());
    }

    #[test]
    fn navigation_round_trip() {
        let fs = fs();
        let home = fs.home().clone();
        let skills = fs.change_directory(&home, "skills").unwrap();
        assert_eq!(skills.to_string(), "/home/amit/skills");
        assert_eq!(fs.change_directory(&skills, "..").unwrap(), home);
    }

    #[test]
    fn precedence_table() {
        let fs = fs();
        let skills = fs.home().join("skills");
        assert_eq!(fs.change_directory(&skills, "").unwrap(), *fs.home());
        assert_eq!(fs.change_directory(&skills, "~").unwrap(), *fs.home());
        assert_eq!(fs.change_directory(&skills, ".").unwrap(), skills);
        assert_eq!(
            fs.change_directory(&skills, "/").unwrap(),
            VirtualPath::root()
        );
        assert_eq!(
            fs.change_directory(&skills, "about").unwrap().to_string(),
            "/home/amit/about"
        );
    }

    #[test]
    fn parent_of_home_and_root_is_root() {
        let fs = fs();
        assert!(fs.parent_of(fs.home()).is_root());
        assert!(fs.parent_of(&VirtualPath::root()).is_root());
    }

    #[test]
    fn unknown_target_is_reported() {
        let fs = fs();
        let err = fs.change_directory(fs.home(), "Skills").unwrap_err();
        assert_eq!(err.to_string(), "cd: Skills: No such directory");
    }

    #[test]
    fn every_reachable_path_is_in_the_tree() {
        let fs = fs();
        let mut frontier = vec![VirtualPath::root()];
        let mut seen = Vec::new();
        while let Some(path) = frontier.pop() {
            if seen.contains(&path) {
                continue;
            }
            assert!(fs.contains(&path), "{path} escaped the tree");
            for token in shortcut_tokens() {
                frontier.push(fs.change_directory(&path, token).unwrap());
            }
            seen.push(path);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn listings() {
        let fs = fs();
        assert_eq!(fs.list(fs.home()).entries.len(), 12);
        assert_eq!(fs.list(&VirtualPath::root()).entries.len(), 4);
        assert_eq!(fs.list(&fs.home().join("projects")).entries.len(), 7);

        let generic = fs.list(&fs.home().join("contact"));
        assert_eq!(generic.entries.len(), 2);
        assert!(generic.hint.is_some());
    }

    #[test]
    fn cat_targets_are_case_insensitive() {
        assert_eq!(FileTarget::resolve("RESUME.PDF"), Some(FileTarget::Resume));
        assert_eq!(FileTarget::resolve("notes.txt"), None);
    }
}
