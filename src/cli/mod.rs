//! CLI module for the chat relay

pub mod serve;

use clap::{Parser, Subcommand};

/// Chat Relay - forwards chat messages to LLM providers and stores feedback
#[derive(Parser)]
#[command(name = "chat-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(serve::ServeArgs),
}
