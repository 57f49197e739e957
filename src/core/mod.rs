//! Core extraction engine.
//!
//! The engine is layered bottom-up:
//!
//! 1. `segment`: splits a raw text run into addressable double-byte sub-runs
//! 2. `template` / `script`: dialect locators walking a parsed tree
//! 3. `extract`: per-file dispatch plus the batch extractor
//!
//! All emitted ranges are byte offsets into the whole original file. Region
//! offsets (the position of a `<template>` or `<script>` block inside a
//! `.vue` file) are threaded through the locators, so consumers never have
//! to re-add them.

pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod fragment;
pub mod parsers;
pub mod script;
pub mod segment;
pub mod sfc;
pub mod template;
