// shot2test - Screenshot to manual-testing instructions generator
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod groq;
pub mod imaging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod publisher;
pub mod server;
pub mod utils;
