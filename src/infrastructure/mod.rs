//! Infrastructure layer for filesystem interactions.
//!
//! Path handling for the Zellij sandbox (host filesystem mounted under
//! `/host`) and reading image files for upload.

pub mod image;
pub mod paths;

pub use image::file_to_data_url;
pub use paths::{expand_tilde, get_data_dir};
