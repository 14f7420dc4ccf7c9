//! Content providers: where `skills`, `projects` and `experience` get their
//! data.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

use shellfolio_content::{
    DataError, ExperienceRecord, ProjectCatalog, SkillCatalog, bundled_experience,
    bundled_projects, bundled_skills, parse_experience, parse_projects, parse_skills,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Skills,
    Projects,
    Experience,
}

impl ContentKind {
    pub const ALL: &'static [ContentKind] = &[
        ContentKind::Skills,
        ContentKind::Projects,
        ContentKind::Experience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Skills => "skills",
            ContentKind::Projects => "projects",
            ContentKind::Experience => "experience",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ContentKind::Skills => "skills.json",
            ContentKind::Projects => "projects.json",
            ContentKind::Experience => "experience.json",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Read-only source of structured portfolio data.
pub trait ContentProvider {
    fn fetch_skills(&self) -> impl Future<Output = Result<SkillCatalog, ContentError>> + Send;

    fn fetch_projects(&self) -> impl Future<Output = Result<ProjectCatalog, ContentError>> + Send;

    fn fetch_experience(
        &self,
    ) -> impl Future<Output = Result<ExperienceRecord, ContentError>> + Send;
}

/// Data compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledContent;

impl ContentProvider for BundledContent {
    async fn fetch_skills(&self) -> Result<SkillCatalog, ContentError> {
        Ok(bundled_skills()?)
    }

    async fn fetch_projects(&self) -> Result<ProjectCatalog, ContentError> {
        Ok(bundled_projects()?)
    }

    async fn fetch_experience(&self) -> Result<ExperienceRecord, ContentError> {
        Ok(bundled_experience()?)
    }
}

/// JSON files read from a directory on every fetch, so edits show up
/// without a restart.
#[derive(Debug, Clone)]
pub struct DirectoryContent {
    root: PathBuf,
}

impl DirectoryContent {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, kind: ContentKind) -> Result<String, ContentError> {
        let path = self.root.join(kind.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ContentError::Io { path, source })
    }
}

impl ContentProvider for DirectoryContent {
    async fn fetch_skills(&self) -> Result<SkillCatalog, ContentError> {
        let raw = self.read(ContentKind::Skills).await?;
        Ok(parse_skills(&raw)?)
    }

    async fn fetch_projects(&self) -> Result<ProjectCatalog, ContentError> {
        let raw = self.read(ContentKind::Projects).await?;
        Ok(parse_projects(&raw)?)
    }

    async fn fetch_experience(&self) -> Result<ExperienceRecord, ContentError> {
        let raw = self.read(ContentKind::Experience).await?;
        Ok(parse_experience(&raw)?)
    }
}

/// Provider picked at startup from configuration.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Bundled(BundledContent),
    Directory(DirectoryContent),
}

impl ContentSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(root) => ContentSource::Directory(DirectoryContent::new(root)),
            None => ContentSource::Bundled(BundledContent),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ContentSource::Bundled(_) => "bundled".to_string(),
            ContentSource::Directory(dir) => dir.root().display().to_string(),
        }
    }
}

impl ContentProvider for ContentSource {
    async fn fetch_skills(&self) -> Result<SkillCatalog, ContentError> {
        match self {
            ContentSource::Bundled(inner) => inner.fetch_skills().await,
            ContentSource::Directory(inner) => inner.fetch_skills().await,
        }
    }

    async fn fetch_projects(&self) -> Result<ProjectCatalog, ContentError> {
        match self {
            ContentSource::Bundled(inner) => inner.fetch_projects().await,
            ContentSource::Directory(inner) => inner.fetch_projects().await,
        }
    }

    async fn fetch_experience(&self) -> Result<ExperienceRecord, ContentError> {
        match self {
            ContentSource::Bundled(inner) => inner.fetch_experience().await,
            ContentSource::Directory(inner) => inner.fetch_experience().await,
        }
    }
}

/// Fetch every kind once and summarize it, for `shellfolio check`.
pub async fn check_all<C: ContentProvider>(
    provider: &C,
) -> Vec<(ContentKind, Result<String, ContentError>)> {
    let skills = provider.fetch_skills().await.map(|catalog| {
        let total: usize = catalog.ordered().iter().map(|(_, s)| s.len()).sum();
        format!("{} categories, {total} skills", catalog.keys().count())
    });
    let projects = provider.fetch_projects().await.map(|catalog| {
        format!(
            "{} featured, {} other projects",
            catalog.featured.len(),
            catalog.other.len()
        )
    });
    let experience = provider.fetch_experience().await.map(|record| {
        format!(
            "current role '{}', {} timeline entries",
            record.current_role.title,
            record.timeline.len()
        )
    });
    vec![
        (ContentKind::Skills, skills),
        (ContentKind::Projects, projects),
        (ContentKind::Experience, experience),
    ]
}
