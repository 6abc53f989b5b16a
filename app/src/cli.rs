use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "listings")]
#[command(about = "Browse property listings from the terminal.")]
pub struct CommandLine {
    /// Base URL of the listing API
    #[arg(long, env = "LISTINGS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Give up on a request after this many seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Render the listing screen once
    #[command(alias = "l")]
    List,
    /// Render the detail screen of one listing once
    #[command(alias = "s")]
    Show { id: i64 },
    /// Navigate listings interactively (default)
    #[command(alias = "b")]
    Browse,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
