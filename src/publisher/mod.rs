// Image publisher module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::{sign_upload, CloudinaryClient};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public URL of a hosted screenshot. Opaque to the rest of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishedImageUrl(String);

impl PublishedImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublishedImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
