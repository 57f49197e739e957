//! Tagged node model for parsed template markup.
//!
//! Every node is one explicit variant carrying only its relevant fields, so
//! the walker dispatches on the tag instead of probing for optional fields.
//! All spans are byte offsets into the parsed template content.

/// A node in the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    /// `v-else-if` / `v-else` siblings folded onto their `v-if` head. These
    /// blocks are removed from the parent's child list, so a walker must
    /// visit them explicitly.
    pub branches: Vec<Node>,
    /// Bodies of named slots (`<template v-slot:...>`), moved out of the
    /// ordinary child list.
    pub slots: Vec<Node>,
    pub start: usize,
    pub end: usize,
}

impl Element {
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }
}

/// An attribute inside a start tag. The span covers the whole
/// `name="value"` run, closing quote included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
    pub start: usize,
    pub end: usize,
}

/// A raw text node, whitespace preserved. Interpolation expressions stay
/// embedded in `content`; the segmenter classifies them downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub start: usize,
    pub end: usize,
}
