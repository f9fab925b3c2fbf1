//! dialsync - country calling code listing sync
//!
//! Keeps the web app's country listing in step with the mobile app's. The
//! Dart listing is the source of truth: its records are checked against the
//! mobile and web translation files, then rendered as a TypeScript listing
//! that carries a flag for every country.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, reconciliation and generation pipeline

pub mod cli;
pub mod config;
pub mod core;
