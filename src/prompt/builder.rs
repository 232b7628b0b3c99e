// Prompt assembly and length gate
// Author: kelexine (https://github.com/kelexine)

use super::template::{FEATURE_QUESTIONS, LOGIN_EXAMPLE, PREAMBLE, SETTINGS_EXAMPLE};
use crate::error::{AppError, Result};
use crate::publisher::PublishedImageUrl;
use std::fmt::Write;

// TODO: write each URL into its feature block; the model currently cannot
// tell which screenshot a block refers to.

/// Build the few-shot prompt for one submission.
///
/// One "Feature N" block is emitted per URL, numbered from 1. The URLs
/// themselves are not written into the blocks; only their count matters.
pub fn build_prompt(app_name: &str, image_urls: &[PublishedImageUrl]) -> String {
    let mut prompt = PREAMBLE.replace("{app}", app_name);
    prompt.push_str(LOGIN_EXAMPLE);
    prompt.push_str(SETTINGS_EXAMPLE);

    for (index, _url) in image_urls.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(prompt, "### Feature {}: ", index + 1);
        prompt.push_str(FEATURE_QUESTIONS);
    }

    prompt
}

/// A prompt that has passed the length gate. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Accept `text` only if it has at most `max_chars` characters.
    pub fn new(text: String, max_chars: usize) -> Result<Self> {
        let length = text.chars().count();
        if length > max_chars {
            return Err(AppError::PromptTooLarge {
                length,
                limit: max_chars,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
