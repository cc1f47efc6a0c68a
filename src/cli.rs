use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// proxytui - a price calculator for proxy rental orders
#[derive(Parser)]
#[command(name = "proxytui")]
#[command(about = "A terminal-based price calculator for proxy rental orders")]
#[command(version)]
pub struct Cli {
    /// Path to a catalog file replacing the built-in pricing tables.
    ///
    /// The file is validated before use; ids must come from the known id
    /// spaces (see `proxytui catalog --export`).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a price without entering the TUI
    Quote {
        /// Proxy type id (e.g. ipv4, ipv6, mobile)
        #[arg(short = 't', long = "proxy-type")]
        proxy_type: String,

        /// Country id (e.g. australia, uk); omit for a partial quote
        #[arg(short, long)]
        country: Option<String>,

        /// Rental period id (e.g. 1-day, 1-month); omit for a partial quote
        #[arg(short, long)]
        period: Option<String>,

        /// Number of proxies
        #[arg(short = 'n', long, default_value_t = 1.0)]
        count: f64,

        /// Print the quote as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print the active pricing tables
    Catalog {
        /// Print the tables as JSON
        #[arg(long)]
        json: bool,

        /// Write the tables to a catalog file usable with --catalog
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Validate a catalog file
    Validate {
        /// Path to the catalog file to validate
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
