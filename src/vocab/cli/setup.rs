use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vocab",
    bin_name = "vocab",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Vocabulary registry: topics with sorted word lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Registry file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Topic,
    Word,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Topic => "Topic Commands:",
            CommandGroup::Word => "Word Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "topics" | "browse" | "insert" | "add" | "remove" | "rename" => {
                Some(CommandGroup::Topic)
            }
            "add-word" | "remove-word" | "change-word" | "search" | "starting" => {
                Some(CommandGroup::Word)
            }
            "load" | "save" => Some(CommandGroup::Data),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Topic,
            CommandGroup::Word,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the grouped top-level help as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("vocab {version}\n"));
    output.push_str("Vocabulary registry: topics with sorted word lists\n");
    output.push('\n');
    output.push_str("Usage: vocab [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("<TOPIC> is a topic number or a topic name.\n");
    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --file <PATH>  Registry file to use instead of the configured one\n");
    output.push_str("  -v, --verbose      Verbose output\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all topics
    #[command(alias = "ls", display_order = 1)]
    Topics,

    /// Show the words of a topic
    #[command(alias = "b", display_order = 2)]
    Browse {
        /// Topic number or name
        topic: String,
    },

    /// Insert a new topic before or after another one
    #[command(display_order = 3)]
    Insert {
        /// Name of the new topic
        name: String,

        /// Initial words
        words: Vec<String>,

        /// Insert before this topic
        #[arg(
            long,
            value_name = "TOPIC",
            conflicts_with = "after",
            required_unless_present = "after"
        )]
        before: Option<String>,

        /// Insert after this topic
        #[arg(long, value_name = "TOPIC")]
        after: Option<String>,
    },

    /// Append a new topic
    #[command(display_order = 4)]
    Add {
        /// Name of the new topic
        name: String,

        /// Initial words
        words: Vec<String>,
    },

    /// Delete a topic and its words
    #[command(alias = "rm", display_order = 5)]
    Remove {
        /// Topic number or name
        topic: String,
    },

    /// Rename a topic
    #[command(display_order = 6)]
    Rename {
        /// Topic number or name
        topic: String,

        /// New name
        name: String,
    },

    /// Add words to a topic
    #[command(display_order = 10)]
    AddWord {
        /// Topic number or name
        topic: String,

        /// Words to add
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Delete a word from a topic
    #[command(display_order = 11)]
    RemoveWord {
        /// Topic number or name
        topic: String,

        word: String,
    },

    /// Replace a word in a topic
    #[command(display_order = 12)]
    ChangeWord {
        /// Topic number or name
        topic: String,

        old: String,

        new: String,
    },

    /// List the topics that contain a word
    #[command(display_order = 13)]
    Search { word: String },

    /// List every word starting with a letter
    #[command(display_order = 14)]
    Starting { letter: String },

    /// Load topics from a text file
    #[command(display_order = 20)]
    Load {
        path: PathBuf,

        /// Clear the registry before loading
        #[arg(long)]
        replace: bool,
    },

    /// Save the registry to a text file
    #[command(display_order = 21)]
    Save {
        path: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (registry-file, words-per-row, column-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create an empty registry file
    #[command(display_order = 31)]
    Init,

    /// Print help for vocab or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_visible_command_has_a_group() {
        let cmd = Cli::command();
        for sc in cmd.get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn clap_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_insert_with_anchor_and_words() {
        let cli = Cli::parse_from(["vocab", "insert", "Birds", "owl", "crow", "--after", "2"]);
        match cli.command {
            Some(Commands::Insert {
                name,
                words,
                before,
                after,
            }) => {
                assert_eq!(name, "Birds");
                assert_eq!(words, vec!["owl", "crow"]);
                assert_eq!(before, None);
                assert_eq!(after.as_deref(), Some("2"));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn insert_requires_an_anchor() {
        assert!(Cli::try_parse_from(["vocab", "insert", "Birds"]).is_err());
        assert!(
            Cli::try_parse_from(["vocab", "insert", "Birds", "--before", "1", "--after", "2"])
                .is_err()
        );
    }

    #[test]
    fn global_file_option_after_subcommand() {
        let cli = Cli::parse_from(["vocab", "ls", "--file", "/tmp/words.txt"]);
        assert!(matches!(cli.command, Some(Commands::Topics)));
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/words.txt")));
    }

    #[test]
    fn kebab_case_word_commands() {
        let cli = Cli::parse_from(["vocab", "change-word", "Animals", "cat", "cow"]);
        assert!(matches!(cli.command, Some(Commands::ChangeWord { .. })));
    }

    #[test]
    fn grouped_help_lists_commands() {
        let help = get_grouped_help();
        assert!(help.contains("Topic Commands:"));
        assert!(help.contains("add-word"));
        assert!(help.contains("starting"));
    }
}
