//! CLI module for Tunedex
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Tunedex - music catalog with lyrics lookup and background enrichment
#[derive(Parser)]
#[command(name = "tunedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
