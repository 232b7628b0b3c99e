// Groq API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::GroqClient;
