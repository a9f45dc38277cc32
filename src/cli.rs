use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "outtacouch", about = "Swipe local events into your calendars")]
pub struct Cli {
    /// Database path. Defaults to ~/.outtacouch/outtacouch.db
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Emit JSON log lines instead of the human-readable format
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the bundled demo catalog into the database
    Seed,

    /// List catalog events through the explore filters
    Events {
        /// Category pill ("All" or a category label like "Music")
        #[arg(long)]
        category: Option<String>,

        /// Search box text
        #[arg(long)]
        query: Option<String>,
    },

    /// Swipe through the filtered deck interactively
    Explore {
        /// Category pill to start with
        #[arg(long)]
        category: Option<String>,

        /// Search box text to start with
        #[arg(long)]
        query: Option<String>,
    },

    /// Show saved calendar entries
    Calendar {
        /// One bucket (public, private, saved); all three when omitted
        #[arg(long)]
        bucket: Option<String>,
    },
}
