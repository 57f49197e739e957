//! Markup-dialect locator.
//!
//! Parses template markup and walks the tree in pre-order, collecting
//! double-byte text fragments. Mixed text nodes are re-segmented by the
//! fragment segmenter; attribute values stay atomic. Conditional branches
//! and named slot bodies are visited explicitly because the parser folds
//! them out of the ordinary child list.

pub mod ast;
pub mod parser;

pub use parser::ParseError;

use crate::core::fragment::TextFragment;
use crate::core::segment::{Origin, segment};
use crate::utils::has_double_byte;

use ast::Node;

/// Locate every double-byte fragment in `template`.
///
/// `base_offset` is the byte position of `template` within the original
/// file; all emitted ranges are file-global.
pub fn locate(template: &str, base_offset: usize) -> Result<Vec<TextFragment>, ParseError> {
    let nodes = parser::parse(template)?;
    let mut fragments = Vec::new();
    for node in &nodes {
        walk(node, base_offset, &mut fragments);
    }
    Ok(fragments)
}

fn walk(node: &Node, base: usize, out: &mut Vec<TextFragment>) {
    match node {
        Node::Text(text) => {
            if has_double_byte(&text.content) {
                for run in segment(&text.content, Origin::Template) {
                    let start = base + text.start + run.offset;
                    let end = start + run.text.len();
                    out.push(TextFragment {
                        range: start..end,
                        text: run.text,
                        attribute_name: None,
                        is_attribute: false,
                        is_template: true,
                        in_mustache: run.in_mustache,
                        in_template_string: false,
                    });
                }
            }
        }
        Node::Element(el) => {
            for attr in &el.attrs {
                if let Some(value) = &attr.value
                    && has_double_byte(value)
                {
                    out.push(TextFragment {
                        range: base + attr.start..base + attr.end,
                        text: value.clone(),
                        attribute_name: Some(attr.name.clone()),
                        is_attribute: true,
                        is_template: true,
                        in_mustache: false,
                        in_template_string: false,
                    });
                }
            }
            for branch in &el.branches {
                walk(branch, base, out);
            }
            for slot in &el.slots {
                walk(slot, base, out);
            }
            for child in &el.children {
                walk(child, base, out);
            }
        }
    }
}
