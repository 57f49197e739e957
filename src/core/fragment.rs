use std::ops::Range;

use serde::Serialize;

/// A single hardcoded text finding.
///
/// `range` is a half-open byte interval into the original file content. For
/// re-segmented text runs `content[range] == text` holds exactly; atomic
/// fragments (attribute values, quoted string literals) cover their
/// surrounding syntax while `text` is the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    pub range: Range<usize>,
    pub text: String,
    /// Name of the attribute the value belongs to, for attribute fragments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    /// True when the fragment is an attribute value. Attribute values are
    /// atomic and never re-segmented.
    pub is_attribute: bool,
    /// True when the fragment was found in the template region, false for
    /// the script region.
    pub is_template: bool,
    /// True when the surrounding template text sits inside a `{{ }}`
    /// interpolation. Always false for script fragments.
    pub in_mustache: bool,
    /// True when the fragment sits inside the raw segments of a script
    /// template literal. Always false for template fragments.
    pub in_template_string: bool,
}

/// Per-file extraction result.
///
/// `fragments` is sorted by descending `range.start`: the downstream
/// replacement step rewrites the last fragment first so that earlier
/// offsets stay valid while it works through the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file_path: String,
    pub fragments: Vec<TextFragment>,
}
