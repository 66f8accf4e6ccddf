use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursebox", bin_name = "coursebox", version)]
#[command(
    about = "Page-aware organizer for module tasks, files, grades and notes",
    long_about = "Reads commands from stdin until 'bye' or end of input, or runs the lines given with --exec. Type 'help' inside a session for the command grammar."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $COURSEBOX_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// After navigating, print only the new route
    #[arg(long, help_heading = "Options")]
    pub route: bool,

    /// Run this line instead of reading stdin (repeatable)
    #[arg(short = 'e', long = "exec", value_name = "LINE", help_heading = "Options")]
    pub exec: Vec<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show or change configuration
    Config {
        /// Configuration key (export_dir, wrap_width, sort_on_add)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
