//! Text builders for the data-driven commands.

use std::fmt::Write as _;

use shellfolio_content::{
    ExperienceRecord, Project, ProjectCatalog, SkillCatalog, SkillEntry, category_display_name,
};

use crate::vfs::{DirectoryListing, shortcut_tokens};

const BOX_WIDTH: usize = 47;
const RULE: &str = "═════════════════════════════════════════════════";

/// Three-line box with a centered title.
pub fn header(title: &str) -> String {
    let bar = "═".repeat(BOX_WIDTH);
    let pad = BOX_WIDTH.saturating_sub(title.chars().count()) / 2;
    format!("╔{bar}╗\n║{}{title}\n╚{bar}╝", " ".repeat(pad))
}

pub fn skills_overview(catalog: &SkillCatalog) -> String {
    let mut out = format!("\n{}\n\n", header("TECHNICAL SKILLS"));
    for (key, skills) in catalog.ordered() {
        let _ = writeln!(out, "\n🔧 {}:", category_display_name(key));
        out.push_str(&"━".repeat(60));
        out.push('\n');
        for skill in skills {
            let years = skill
                .years
                .as_deref()
                .map(|y| format!(" ({y})"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{} {:<25} {}{years}",
                skill.icon,
                skill.name,
                skill.level.stars()
            );
        }
    }
    out.push_str(
        "\n💡 Skill Levels: ★★★★★ Expert | ★★★★☆ Advanced | ★★★☆☆ Intermediate | ★★☆☆☆ Beginner\n\
         📅 Years shown in parentheses indicate experience duration\n\
         🎯 Use 'skills <category>' to view specific category details",
    );
    out
}

pub fn skill_category(key: &str, skills: &[SkillEntry]) -> String {
    let mut out = format!("\n{}\n\n", header(&category_display_name(key)));
    for (index, skill) in skills.iter().enumerate() {
        let _ = writeln!(out, "{}. {} {}", index + 1, skill.icon, skill.name);
        let _ = writeln!(out, "   Level: {} {}", skill.level, skill.level.stars());
        if let Some(years) = &skill.years {
            let _ = writeln!(out, "   Experience: {years}");
        }
        out.push('\n');
    }
    out.push_str("💡 Use 'skills' to view all categories\n");
    let _ = write!(out, "🎯 Total skills in this category: {}", skills.len());
    out
}

/// Unknown category message listing the valid keys.
pub fn unknown_category(category: &str, catalog: &SkillCatalog) -> String {
    let keys: Vec<&str> = catalog.ordered().into_iter().map(|(k, _)| k).collect();
    format!(
        "Skill category '{category}' not found. Available: {}",
        keys.join(", ")
    )
}

pub fn projects(catalog: &ProjectCatalog, filter: Option<&str>) -> String {
    let matches = |p: &&Project| filter.is_none_or(|f| p.matches(f));
    let featured: Vec<&Project> = catalog.featured.iter().filter(matches).collect();
    let other: Vec<&Project> = catalog.other.iter().filter(matches).collect();

    if let Some(filter) = filter
        && featured.is_empty()
        && other.is_empty()
    {
        return format!("\nNo projects match '{filter}'\n");
    }

    let mut out = format!("\n{}\n\n", header("PORTFOLIO PROJECTS"));
    if let Some(filter) = filter {
        let _ = writeln!(out, "🔎 Filter: {filter}\n");
    }

    if !featured.is_empty() {
        let _ = write!(out, "🌟 FEATURED PROJECTS:\n{RULE}\n\n");
        for (index, project) in featured.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, project.name);
            if let Some(company) = &project.company {
                let _ = writeln!(out, "   Company: {company}");
            }
            let _ = writeln!(out, "   Period: {}", project.period);
            if let Some(category) = &project.category {
                let _ = writeln!(out, "   Category: {category}");
            }
            let _ = writeln!(out, "\n   {}", project.description);
            if !project.technologies.is_empty() {
                let _ = writeln!(out, "\n   Tech Stack: {}", project.technologies.join(", "));
            }
            if !project.achievements.is_empty() {
                out.push_str("\n   Key Achievements:\n");
                for achievement in &project.achievements {
                    let _ = writeln!(out, "   • {achievement}");
                }
            }
            out.push('\n');
            out.push_str(&"─".repeat(60));
            out.push_str("\n\n");
        }
    }

    if !other.is_empty() {
        let _ = write!(out, "\n💡 OTHER NOTABLE PROJECTS:\n{RULE}\n\n");
        for (index, project) in other.iter().enumerate() {
            let _ = writeln!(out, "{}. {} ({})", index + 1, project.name, project.period);
            let _ = writeln!(out, "   {}", project.description);
            let _ = writeln!(out, "   Tech: {}\n", project.technologies.join(", "));
        }
    }
    out
}

pub fn experience(record: &ExperienceRecord) -> String {
    let role = &record.current_role;
    let mut out = format!("\n{}\n\n", header("PROFESSIONAL EXPERIENCE"));
    let _ = write!(
        out,
        "🎯 CURRENT ROLE:\n{RULE}\n\n{}\n{} | {}\n{}\n\n{}\n\nKey Achievements:\n",
        role.title, role.company, role.period, role.location, role.description
    );
    for achievement in &role.key_achievements {
        let _ = writeln!(out, "• {achievement}");
    }

    let _ = write!(out, "\n📈 CAREER TIMELINE:\n{RULE}\n\n");
    for job in &record.timeline {
        let _ = writeln!(out, "{}", job.title);
        let _ = writeln!(
            out,
            "{} | {} ({})\n",
            job.company,
            job.period,
            job.duration_label()
        );
        out.push_str("Highlights:\n");
        for highlight in &job.highlights {
            let _ = writeln!(out, "• {highlight}");
        }
        out.push('\n');
        out.push_str(&"─".repeat(50));
        out.push_str("\n\n");
    }

    let education = &record.education;
    let _ = write!(
        out,
        "🎓 EDUCATION:\n{}\n{} ({})\nSpecialization: {}\n",
        education.degree, education.university, education.year, education.specialization
    );
    out
}

pub fn listing(listing: &DirectoryListing) -> String {
    let mut out = format!("\n📁 Current directory: {}\n{RULE}\n\n", listing.path);
    for entry in &listing.entries {
        let _ = writeln!(
            out,
            "{}  {:<17} {} {}",
            entry.kind.permissions(),
            entry.display_name(),
            entry.icon,
            entry.description
        );
    }
    if let Some(hint) = listing.hint {
        let _ = write!(out, "\n{hint}\n");
    } else {
        out.push('\n');
    }
    let _ = write!(out, "Total: {} items", listing.entries.len());
    out.push_str(
        "\n\n💡 Navigation tips:\n\
         • Use 'cd <directory>' to change directories\n\
         • Use 'cd ..' to go to parent directory\n\
         • Use 'cd ~' or 'cd' to go to home directory\n\
         • Use 'pwd' to see current path\n",
    );
    out
}

/// Hint printed after a failed `cd`.
pub fn available_directories() -> String {
    format!("\nAvailable directories: {}\n", shortcut_tokens().join(", "))
}

pub fn history<'a>(entries: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from("\n");
    for (index, entry) in entries.enumerate() {
        let _ = writeln!(out, "{:>4}  {entry}", index + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{DirectoryLister, VirtualFs, VirtualPath};
    use shellfolio_content::{bundled_experience, bundled_projects, bundled_skills};

    fn home_fs() -> VirtualFs {
        VirtualFs::new(VirtualPath::parse_absolute("/home/amit").unwrap())
    }

    #[test]
    fn header_centers_title() {
        let text = header("ABOUT");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("║                     ABOUT"));
    }

    #[test]
    fn home_listing_counts_items() {
        let fs = home_fs();
        let text = listing(&fs.list(fs.home()));
        assert!(text.contains("📁 Current directory: /home/amit"));
        assert!(text.contains("drwxr-xr-x  about/"));
        assert!(text.contains("-rwxr-xr-x  matrix.exe"));
        assert!(text.contains("Total: 12 items"));
        assert!(text.contains("Navigation tips"));
    }

    #[test]
    fn generic_listing_has_hint() {
        let fs = home_fs();
        let text = listing(&fs.list(&fs.home().join("experience")));
        assert!(text.contains("info.txt"));
        assert!(text.contains("cd ~' to go home"));
        assert!(text.contains("Total: 2 items"));
    }

    #[test]
    fn skills_views() {
        let catalog = bundled_skills().unwrap();
        let overview = skills_overview(&catalog);
        assert!(overview.contains("🔧 CLOUD PLATFORMS:"));
        assert!(overview.contains("★★★★★"));

        let cloud = catalog.get("cloud_platforms").unwrap();
        let detail = skill_category("cloud_platforms", cloud);
        assert!(detail.contains("1. "));
        assert!(detail.contains(&format!("Total skills in this category: {}", cloud.len())));

        let missing = unknown_category("quantum", &catalog);
        assert!(
            missing.starts_with("Skill category 'quantum' not found. Available: cloud_platforms")
        );
    }

    #[test]
    fn project_filter() {
        let catalog = bundled_projects().unwrap();
        let all = projects(&catalog, None);
        assert!(all.contains("FEATURED PROJECTS"));
        assert!(all.contains("OTHER NOTABLE PROJECTS"));

        let filtered = projects(&catalog, Some("bedrock"));
        assert!(filtered.contains("Filter: bedrock"));
        assert!(filtered.contains("Addy Healthcare"));
        assert!(!filtered.contains("Mindera"));

        assert_eq!(
            projects(&catalog, Some("cobol")),
            "\nNo projects match 'cobol'\n"
        );
    }

    #[test]
    fn experience_fills_missing_durations() {
        let record = bundled_experience().unwrap();
        let text = experience(&record);
        assert!(text.contains("CURRENT ROLE"));
        assert!(text.contains("2022 - Present (Current)"));
        assert!(text.contains("2016 - 2019 (3 years)"));
        assert!(text.contains("🎓 EDUCATION:"));
    }

    #[test]
    fn history_is_numbered() {
        let text = history(["help", "ls"].into_iter());
        assert_eq!(text, "\n   1  help\n   2  ls\n");
    }
}
