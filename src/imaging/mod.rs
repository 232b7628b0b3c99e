//! Screenshot preprocessing before upload.
//!
//! Uploaded screenshots are checked against the accepted formats (PNG and
//! JPEG), decoded, flattened to RGB and re-encoded as JPEG to keep uploads
//! small.
//!
//! # Submodules
//!
//! - `models`: Upload/encoded image types and validation limits.
//! - `preprocess`: Decode and re-encode logic.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod preprocess;

pub use models::{EncodedImage, ImageFormat, UploadedImage};
pub use preprocess::preprocess;
