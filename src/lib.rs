//! Tubesim - demo YouTube downloader engine
//!
//! This library provides the full engine behind the demo downloader:
//! URL validation, simulated metadata lookup, format selection and fake
//! download progress. Nothing is ever fetched from the network and no
//! file is written; the point is the interaction flow.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, logging and URL validation
//! - `media`: Format catalog, resolved details and the resolver seam
//! - `selection`: Format and quality selection rules
//! - `download`: Notices and simulated progress runs
//! - `app`: The controller tying everything together

pub mod app;
pub mod cli;
pub mod core;
pub mod download;
pub mod media;
pub mod selection;

// Re-export commonly used types for convenience
pub use app::{AppState, Controller};
pub use core::{AppError, AppResult};
