//! Per-command help entries, keyed by command name.

use super::registry::HelpSpec;

const NO_OPTIONS: &[(&str, &str)] = &[];
const NO_EXAMPLES: &[&str] = &[];

const fn plain(usage: &'static str, description: &'static str) -> HelpSpec {
    HelpSpec {
        usage,
        description,
        options: NO_OPTIONS,
        examples: NO_EXAMPLES,
    }
}

pub(super) const HELP_TABLE: &[(&str, HelpSpec)] = &[
    (
        "help",
        HelpSpec {
            usage: "help [command]",
            description: "Show available commands or help for a specific command",
            options: NO_OPTIONS,
            examples: &["help", "help cd"],
        },
    ),
    ("about", plain("about", "Display professional summary and biography")),
    (
        "skills",
        HelpSpec {
            usage: "skills [category]",
            description: "Show technical skills, optionally a single category in detail",
            options: NO_OPTIONS,
            examples: &["skills", "skills cloud_platforms", "skills genai_technologies"],
        },
    ),
    (
        "projects",
        HelpSpec {
            usage: "projects [filter]",
            description: "Display portfolio projects and achievements. The filter matches \
                          names, categories, companies and technologies, ignoring case",
            options: NO_OPTIONS,
            examples: &["projects", "projects bedrock", "projects healthcare"],
        },
    ),
    (
        "experience",
        plain("experience", "Show professional work history and timeline"),
    ),
    (
        "contact",
        plain("contact", "Display contact information and social links"),
    ),
    (
        "ls",
        HelpSpec {
            usage: "ls",
            description: "List directories and files in the current directory",
            options: &[("-la", "Accepted for familiarity; the listing is always long")],
            examples: &["ls", "ll"],
        },
    ),
    ("pwd", plain("pwd", "Show current directory path")),
    (
        "cd",
        HelpSpec {
            usage: "cd [dir]",
            description: "Change the current directory. Accepts ~, home, skills, projects, \
                          experience, contact, about, .., . and /. No argument goes home",
            options: NO_OPTIONS,
            examples: &["cd skills", "cd ..", "cd ~", "cd /"],
        },
    ),
    (
        "cat",
        HelpSpec {
            usage: "cat <filename>",
            description: "Display contents of a file in the home directory",
            options: NO_OPTIONS,
            examples: &["cat about.txt", "cat achievements.txt", "cat resume.pdf"],
        },
    ),
    (
        "resume",
        HelpSpec {
            usage: "resume [--download]",
            description: "Open the resume (same as 'cat resume.pdf')",
            options: &[("--download", "Show where to download the PDF")],
            examples: &["resume", "resume --download"],
        },
    ),
    ("whoami", plain("whoami", "Display current user information")),
    ("clear", plain("clear", "Clear the terminal screen")),
    (
        "achievements",
        plain("achievements", "Key career achievements and metrics"),
    ),
    ("awards", plain("awards", "Competition wins and recognition")),
    (
        "certifications",
        plain("certifications", "Professional certifications and learning"),
    ),
    ("linkedin", plain("linkedin", "Show the LinkedIn profile")),
    ("github", plain("github", "Show the GitHub profile")),
    ("easter", plain("easter", "Find the hidden easter egg")),
    ("matrix", plain("matrix", "Take the red pill")),
    ("hack", plain("hack", "Hack the mainframe (not really)")),
    (
        "sudo",
        HelpSpec {
            usage: "sudo <command>",
            description: "Try to gain admin access",
            options: NO_OPTIONS,
            examples: &["sudo su", "sudo rm -rf /"],
        },
    ),
    (
        "history",
        plain("history", "List previously submitted command lines"),
    ),
    (
        "date",
        plain("date", "Show the current date and time in Nepal Time (UTC+5:45)"),
    ),
    ("exit", plain("exit", "Log out and close the shell")),
    (
        "reboot",
        plain("reboot", "Clear the screen, go home and replay the boot banner"),
    ),
];
