//! Single-file-component block splitting.
//!
//! Finds the top-level `<template>` and `<script>` blocks of a `.vue` file
//! and returns each block's content range within the file, so the locators
//! can emit file-global offsets. Tag matching is textual, not a full parse;
//! the template block is matched depth-aware because templates may nest
//! `<template>` elements for named slots.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlocks {
    pub template: Option<Range<usize>>,
    pub script: Option<Range<usize>>,
}

pub fn split(source: &str) -> SfcBlocks {
    SfcBlocks {
        template: find_block(source, "template", true),
        script: find_block(source, "script", false),
    }
}

fn find_block(source: &str, tag: &str, nested: bool) -> Option<Range<usize>> {
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);

    // first occurrence that is a real tag, not a prefix of a longer name
    let mut search = 0;
    let tag_start = loop {
        let at = source[search..].find(&open)? + search;
        let after = source[at + open.len()..].chars().next();
        if matches!(after, Some(c) if c == '>' || c == '/' || c.is_whitespace()) {
            break at;
        }
        search = at + open.len();
    };

    let content_start = source[tag_start..].find('>')? + tag_start + 1;
    if source[..content_start].ends_with("/>") {
        // self-closing block has no content
        return None;
    }

    if !nested {
        let end = source[content_start..].find(&close)? + content_start;
        return Some(content_start..end);
    }

    let mut depth = 1;
    let mut pos = content_start;
    loop {
        let next_close = source[pos..].find(&close).map(|i| i + pos)?;
        let next_open = source[pos..].find(&open).map(|i| i + pos);
        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos = o + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(content_start..next_close);
                }
                pos = next_close + close.len();
            }
        }
    }
}
