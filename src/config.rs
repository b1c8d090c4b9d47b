use clap::{Parser, Subcommand};
use std::net::SocketAddr;

use crate::bot::models::DEFAULT_USER_NAME;

#[derive(Parser, Debug)]
#[command(name = "medbot", about = "Symptom advice, doctors, appointments and a pharmacy cart")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Name of the person chatting (terminal mode)
    #[arg(long, default_value = DEFAULT_USER_NAME)]
    pub name: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Chat in the terminal (default)
    Chat,
    /// Serve the chat over HTTP, one store per session
    Serve {
        #[arg(long, default_value = "0.0.0.0:8000")]
        addr: SocketAddr,

        /// Seconds a session may stay idle before it is dropped
        #[arg(long, default_value_t = 1800, value_parser = clap::value_parser!(u64).range(1..))]
        session_ttl: u64,
    },
}

impl Args {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }
}
