//! The closed set of shell commands.

/// Every command the shell knows. The registry is built from [`CommandId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Help,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Ls,
    Pwd,
    Cd,
    Cat,
    Resume,
    Whoami,
    Clear,
    Achievements,
    Awards,
    Certifications,
    LinkedIn,
    GitHub,
    Easter,
    Matrix,
    Hack,
    Sudo,
    History,
    Date,
    Exit,
    Reboot,
}

/// Section of the `help` overview a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Navigation,
    AboutMe,
    Career,
    Links,
    System,
    Special,
}

impl CommandGroup {
    pub const ALL: &'static [CommandGroup] = &[
        CommandGroup::Navigation,
        CommandGroup::AboutMe,
        CommandGroup::Career,
        CommandGroup::Links,
        CommandGroup::System,
        CommandGroup::Special,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Navigation => "🏠 Navigation:",
            CommandGroup::AboutMe => "👨‍💻 About Me:",
            CommandGroup::Career => "🏆 Career:",
            CommandGroup::Links => "🔗 Links:",
            CommandGroup::System => "🔧 System:",
            CommandGroup::Special => "🎯 Special:",
        }
    }
}

impl CommandId {
    pub const ALL: &'static [CommandId] = &[
        CommandId::Help,
        CommandId::About,
        CommandId::Skills,
        CommandId::Projects,
        CommandId::Experience,
        CommandId::Contact,
        CommandId::Ls,
        CommandId::Pwd,
        CommandId::Cd,
        CommandId::Cat,
        CommandId::Resume,
        CommandId::Whoami,
        CommandId::Clear,
        CommandId::Achievements,
        CommandId::Awards,
        CommandId::Certifications,
        CommandId::LinkedIn,
        CommandId::GitHub,
        CommandId::Easter,
        CommandId::Matrix,
        CommandId::Hack,
        CommandId::Sudo,
        CommandId::History,
        CommandId::Date,
        CommandId::Exit,
        CommandId::Reboot,
    ];

    /// Name typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            CommandId::Help => "help",
            CommandId::About => "about",
            CommandId::Skills => "skills",
            CommandId::Projects => "projects",
            CommandId::Experience => "experience",
            CommandId::Contact => "contact",
            CommandId::Ls => "ls",
            CommandId::Pwd => "pwd",
            CommandId::Cd => "cd",
            CommandId::Cat => "cat",
            CommandId::Resume => "resume",
            CommandId::Whoami => "whoami",
            CommandId::Clear => "clear",
            CommandId::Achievements => "achievements",
            CommandId::Awards => "awards",
            CommandId::Certifications => "certifications",
            CommandId::LinkedIn => "linkedin",
            CommandId::GitHub => "github",
            CommandId::Easter => "easter",
            CommandId::Matrix => "matrix",
            CommandId::Hack => "hack",
            CommandId::Sudo => "sudo",
            CommandId::History => "history",
            CommandId::Date => "date",
            CommandId::Exit => "exit",
            CommandId::Reboot => "reboot",
        }
    }

    /// One-line summary used by the `help` overview.
    pub fn summary(&self) -> &'static str {
        match self {
            CommandId::Help => "Show this help message",
            CommandId::About => "Professional summary and bio",
            CommandId::Skills => "Technical skills and expertise",
            CommandId::Projects => "Portfolio projects and achievements",
            CommandId::Experience => "Professional work history",
            CommandId::Contact => "Contact information",
            CommandId::Ls => "List available directories and files",
            CommandId::Pwd => "Show current directory path",
            CommandId::Cd => "Change current directory",
            CommandId::Cat => "Display file contents",
            CommandId::Resume => "Open or download the resume",
            CommandId::Whoami => "Quick introduction",
            CommandId::Clear => "Clear the terminal screen",
            CommandId::Achievements => "Key career achievements and metrics",
            CommandId::Awards => "Competition wins and recognition",
            CommandId::Certifications => "Professional certifications",
            CommandId::LinkedIn => "Open LinkedIn profile",
            CommandId::GitHub => "Open GitHub profile",
            CommandId::Easter => "Find the hidden easter egg!",
            CommandId::Matrix => "Enter the Matrix",
            CommandId::Hack => "Hack the mainframe",
            CommandId::Sudo => "Try to gain admin access",
            CommandId::History => "Show command history",
            CommandId::Date => "Current time in Kathmandu",
            CommandId::Exit => "Log out of the shell",
            CommandId::Reboot => "Restart the system",
        }
    }

    pub fn group(&self) -> CommandGroup {
        match self {
            CommandId::Ls | CommandId::Pwd | CommandId::Cd | CommandId::Cat => {
                CommandGroup::Navigation
            }
            CommandId::About
            | CommandId::Whoami
            | CommandId::Skills
            | CommandId::Projects
            | CommandId::Experience
            | CommandId::Contact
            | CommandId::Resume => CommandGroup::AboutMe,
            CommandId::Achievements | CommandId::Awards | CommandId::Certifications => {
                CommandGroup::Career
            }
            CommandId::LinkedIn | CommandId::GitHub => CommandGroup::Links,
            CommandId::Clear
            | CommandId::History
            | CommandId::Date
            | CommandId::Help
            | CommandId::Reboot
            | CommandId::Exit => CommandGroup::System,
            CommandId::Easter | CommandId::Matrix | CommandId::Hack | CommandId::Sudo => {
                CommandGroup::Special
            }
        }
    }
}
