//! Script-dialect locator.
//!
//! Walks the full script AST and collects double-byte text from string
//! literals and template literals. Plain literals are atomic; template
//! literals with placeholders are handed to the fragment segmenter so that
//! only the raw segments between `${ }` placeholders are reported.

use anyhow::Result;
use swc_common::BytePos;
use swc_ecma_ast::{Str, Tpl};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::fragment::TextFragment;
use crate::core::parsers::script::parse_script_source;
use crate::core::segment::{Origin, segment};
use crate::utils::has_double_byte;

/// Locate every double-byte fragment in `source`.
///
/// `base_offset` is the byte position of `source` within the original file
/// (non-zero for the `<script>` block of a Vue SFC); all emitted ranges are
/// file-global.
pub fn locate(source: &str, base_offset: usize, file_path: &str) -> Result<Vec<TextFragment>> {
    let parsed = parse_script_source(source, file_path)?;
    let mut locator = ScriptLocator {
        source,
        file_start: parsed.start_pos,
        base: base_offset,
        fragments: Vec::new(),
    };
    parsed.module.visit_with(&mut locator);
    Ok(locator.fragments)
}

struct ScriptLocator<'a> {
    source: &'a str,
    file_start: BytePos,
    base: usize,
    fragments: Vec<TextFragment>,
}

impl ScriptLocator<'_> {
    fn rel(&self, pos: BytePos) -> usize {
        (pos - self.file_start).0 as usize
    }
}

impl Visit for ScriptLocator<'_> {
    fn visit_str(&mut self, node: &Str) {
        if let Some(value) = node.value.as_str()
            && has_double_byte(value)
        {
            // atomic fragment: the range covers the quotes so the rewriter
            // can replace the whole literal, the text is the decoded value
            let lo = self.base + self.rel(node.span.lo);
            let hi = self.base + self.rel(node.span.hi);
            self.fragments.push(TextFragment {
                range: lo..hi,
                text: value.to_owned(),
                attribute_name: None,
                is_attribute: false,
                is_template: false,
                in_mustache: false,
                in_template_string: false,
            });
        }
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        let lo = self.rel(node.span.lo);
        let hi = self.rel(node.span.hi);
        let raw = &self.source[lo..hi];

        if node.exprs.is_empty() {
            // no placeholders: one atomic fragment, backticks excluded
            let inner = &raw[1..raw.len() - 1];
            if has_double_byte(inner) {
                self.fragments.push(TextFragment {
                    range: self.base + lo + 1..self.base + hi - 1,
                    text: inner.to_string(),
                    attribute_name: None,
                    is_attribute: false,
                    is_template: false,
                    in_mustache: false,
                    in_template_string: false,
                });
            }
        } else if has_double_byte(raw) {
            for run in segment(raw, Origin::Script) {
                let start = self.base + lo + run.offset;
                let end = start + run.text.len();
                self.fragments.push(TextFragment {
                    range: start..end,
                    text: run.text,
                    attribute_name: None,
                    is_attribute: false,
                    is_template: false,
                    in_mustache: false,
                    in_template_string: run.in_template_string,
                });
            }
        }

        // placeholders may hold further literals
        node.visit_children_with(self);
    }
}
