//! Hanseek - hardcoded Chinese text locator for Vue projects
//!
//! Hanseek is a CLI tool and library that finds hardcoded double-byte text
//! (Chinese, Japanese, Korean and other wide scripts) in Vue single-file
//! components, JavaScript and TypeScript sources. Every finding carries an
//! exact byte range into the original file, precise enough for a downstream
//! tool to replace the text in-place with an i18n lookup key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core extraction engine (segmenter, locators, dispatcher, batch)
//! - `report`: Console report formatting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod utils;
