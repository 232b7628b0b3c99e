// CLI module for shot2test
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// shot2test - turn app screenshots into manual-testing instructions
#[derive(Parser, Debug)]
#[command(name = "shot2test", version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.shot2test/config.toml)
    #[arg(long, short, env = "SHOT2TEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides `server.port`
    #[arg(long, short)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut crate::config::AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
