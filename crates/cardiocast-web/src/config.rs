//! Runtime configuration from command-line flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Heart disease prediction web front end.
#[derive(Debug, Parser)]
#[command(name = "cardiocast", version, about)]
pub struct Config {
    /// Address to serve the form on.
    #[arg(long, env = "CARDIOCAST_BIND", default_value = "127.0.0.1:7878")]
    pub bind: SocketAddr,

    /// Path to the trained classifier artifact.
    #[arg(long, env = "CARDIOCAST_MODEL", default_value = "models/heart.json")]
    pub model: PathBuf,
}
