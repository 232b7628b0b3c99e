//! Wire models for the upstream APIs.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The Groq chat-completion API (`groq`)
//! - The Cloudinary upload API (`cloudinary`)

// Author: kelexine (https://github.com/kelexine)

pub mod cloudinary;
pub mod groq;

pub use cloudinary::{UploadErrorResponse, UploadResponse};
pub use groq::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
