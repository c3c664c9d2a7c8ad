use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Interactive employee roster manager", long_about = None)]
pub struct Cli {
    /// Path to the employee data file (defaults to the user data directory)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
