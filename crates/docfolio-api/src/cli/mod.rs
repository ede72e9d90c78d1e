//! CLI command definitions for the `docfolio` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod browse;
pub mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Serve, publish and preview a documentary producer's portfolio.
#[derive(Parser)]
#[command(name = "docfolio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (JSON API + built site).
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Write the seeded collections as static JSON documents.
    Export {
        /// Output directory.
        #[arg(short, long, default_value = "public/data")]
        out: PathBuf,
    },

    /// Render the home page in the terminal.
    Browse {
        /// Directory or URL of published documents, or a server URL with --api.
        #[arg(short, long, default_value = "public/data")]
        source: String,

        /// Treat --source as the base URL of a running server.
        #[arg(long)]
        api: bool,

        /// Gallery filter: "all" or a category slug.
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Number of gallery pages to reveal.
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
