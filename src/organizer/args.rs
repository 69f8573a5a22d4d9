use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "organizer")]
#[command(about = "Personal organizer for contacts, birthdays and tagged notes", long_about = None)]
pub struct Cli {
    /// Directory for snapshots and config.json (default: $ORGANIZER_HOME, then the user data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command and exit, e.g. `organizer add John 0501234567`.
    /// Without it, an interactive console starts.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
