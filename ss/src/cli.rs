//! CLI argument parsing for sessionstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ss")]
#[command(author, version, about = "File-backed JSON session store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store a JSON document under a key
    Put {
        /// Session key
        #[arg(required = true)]
        key: String,

        /// Path to a JSON file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the document stored under a key
    Get {
        /// Session key
        #[arg(required = true)]
        key: String,
    },

    /// List all stored keys
    List,

    /// Delete the document stored under a key
    Delete {
        /// Session key
        #[arg(required = true)]
        key: String,
    },

    /// Print the file path backing a key
    Path {
        /// Session key
        #[arg(required = true)]
        key: String,
    },
}
