//! Prompt construction for the testing-instructions request.
//!
//! The prompt is a fixed few-shot template (a preamble naming the app and two
//! worked examples) followed by one unfilled "Feature N" block per published
//! screenshot. [`Prompt`] wraps the finished text once it has passed the
//! length gate, so only checked prompts reach the model client.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod builder;
pub mod template;

pub use builder::{build_prompt, Prompt};
