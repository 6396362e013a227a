//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// YakuLint - Extract localized strings as TxtAST
#[derive(Parser)]
#[command(name = "yklint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Options file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse files and print their TxtAST as JSON
    Parse {
        /// Files to parse (`-` reads a component from stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Locale to extract (repeatable, overrides the options file)
        #[arg(short, long = "locale")]
        locales: Vec<String>,

        /// Glob of files to read as JSON locale resources (repeatable)
        #[arg(short, long = "resource")]
        resources: Vec<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the file extensions handled by the processors
    Extensions,
}
