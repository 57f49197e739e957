//! Whitespace-preserving template parser.
//!
//! A small recursive-descent parser producing the tagged node model in
//! [`super::ast`] with byte-accurate spans on every node and attribute.
//! Whitespace-only text nodes are kept; collapsing them would shift every
//! offset after them and corrupt in-place replacement.
//!
//! Malformed markup is a hard error. The script side of the engine is
//! best-effort, but a template that cannot be parsed yields ranges nobody
//! can trust, so the whole file is rejected instead.

use std::fmt;

use super::ast::{Attribute, Element, Node, Text};

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset into the parsed template content.
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.offset)
    }
}

impl std::error::Error for ParseError {}

pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    let mut parser = Parser { source, pos: 0 };
    let nodes = parser.parse_children(None)?;
    if parser.pos < source.len() {
        // parse_children only stops early on a closing tag; with no open
        // element that closing tag matches nothing
        return Err(parser.error("unexpected closing tag"));
    }
    Ok(nodes)
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// True when the cursor sits on `<` opening a real tag.
    fn at_tag_open(&self) -> bool {
        let rest = self.rest();
        rest.starts_with('<')
            && rest[1..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
    }

    fn parse_children(&mut self, parent: Option<&str>) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                if let Some(tag) = parent {
                    return Err(self.error(format!("unclosed <{}>", tag)));
                }
                break;
            }
            if rest.starts_with("</") {
                // the caller owns the closing tag; with no parent this is a
                // stray close and parse() reports it
                break;
            }
            if rest.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.at_tag_open() {
                nodes.push(self.parse_element()?);
            } else {
                nodes.push(self.parse_text());
            }
        }
        Ok(fold_branches(nodes))
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        match self.rest().find("-->") {
            Some(end) => {
                self.pos += end + 3;
                Ok(())
            }
            None => Err(self.error("unterminated comment")),
        }
    }

    fn parse_text(&mut self) -> Node {
        let start = self.pos;
        while self.pos < self.source.len() {
            let rest = self.rest();
            if rest.starts_with("{{") {
                // keep a whole interpolation inside one text node, so a `<`
                // in the expression does not end the run
                if let Some(close) = rest.find("}}") {
                    self.pos += close + 2;
                    continue;
                }
            }
            if rest.starts_with('<')
                && (self.at_tag_open() || rest.starts_with("</") || rest.starts_with("<!--"))
            {
                break;
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        Node::Text(Text {
            content: self.source[start..self.pos].to_string(),
            start,
            end: self.pos,
        })
    }

    fn parse_element(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        self.pos += 1; // '<'
        let tag = self.read_tag_name();
        if tag.is_empty() {
            return Err(self.error("expected tag name"));
        }
        let attrs = self.parse_attributes(tag)?;

        let self_closing = if self.rest().starts_with("/>") {
            self.pos += 2;
            true
        } else if self.rest().starts_with('>') {
            self.pos += 1;
            false
        } else {
            return Err(self.error(format!("malformed start tag <{}>", tag)));
        };

        let mut children = Vec::new();
        if !self_closing && !VOID_TAGS.contains(&tag) {
            children = self.parse_children(Some(tag))?;
            self.consume_closing_tag(tag)?;
        }

        // named slot bodies are addressable through the slot list, not the
        // ordinary child list
        let (slots, children): (Vec<Node>, Vec<Node>) =
            children.into_iter().partition(is_slot_template);

        Ok(Node::Element(Element {
            tag: tag.to_string(),
            attrs,
            children,
            branches: Vec::new(),
            slots,
            start,
            end: self.pos,
        }))
    }

    fn consume_closing_tag(&mut self, tag: &str) -> Result<(), ParseError> {
        if !self.rest().starts_with("</") {
            return Err(self.error(format!("unclosed <{}>", tag)));
        }
        let close_start = self.pos;
        self.pos += 2;
        let closing = self.read_tag_name();
        if closing != tag {
            self.pos = close_start;
            return Err(self.error(format!(
                "mismatched closing tag </{}> for <{}>",
                closing, tag
            )));
        }
        self.skip_whitespace();
        if !self.rest().starts_with('>') {
            return Err(self.error("malformed closing tag"));
        }
        self.pos += 1;
        Ok(())
    }

    fn read_tag_name(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .rest()
            .starts_with(|c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        {
            self.pos += 1;
        }
        &self.source[start..self.pos]
    }

    fn read_attr_name(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .rest()
            .starts_with(|c: char| {
                !c.is_whitespace() && !matches!(c, '=' | '>' | '/' | '"' | '\'' | '<')
            })
        {
            self.pos += self.rest().chars().next().map_or(1, char::len_utf8);
        }
        &self.source[start..self.pos]
    }

    fn parse_attributes(&mut self, tag: &str) -> Result<Vec<Attribute>, ParseError> {
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(self.error(format!("unexpected end of template inside <{}>", tag)));
            }
            if rest.starts_with('>') || rest.starts_with("/>") {
                return Ok(attrs);
            }

            let start = self.pos;
            let name = self.read_attr_name();
            if name.is_empty() {
                return Err(self.error(format!("expected attribute name in <{}>", tag)));
            }
            let name = name.to_string();

            self.skip_whitespace();
            let value = if self.rest().starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                Some(self.read_attr_value()?)
            } else {
                None
            };

            attrs.push(Attribute {
                name,
                value,
                start,
                end: self.pos,
            });
        }
    }

    fn read_attr_value(&mut self) -> Result<String, ParseError> {
        let rest = self.rest();
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                match self.rest().find(quote) {
                    Some(len) => {
                        let value = self.rest()[..len].to_string();
                        self.pos += len + 1;
                        Ok(value)
                    }
                    None => Err(self.error("unterminated attribute value")),
                }
            }
            Some(_) => {
                let len = rest
                    .find(|c: char| c.is_whitespace() || matches!(c, '>' | '/'))
                    .unwrap_or(rest.len());
                if len == 0 {
                    return Err(self.error("expected attribute value"));
                }
                let value = rest[..len].to_string();
                self.pos += len;
                Ok(value)
            }
            None => Err(self.error("expected attribute value")),
        }
    }
}

/// Attach `v-else-if` / `v-else` elements to the branch list of the nearest
/// preceding `v-if` element, skipping whitespace-only text between them.
/// A dangling alternate with no head stays in the child list as-is.
fn fold_branches(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::new();
    for node in nodes {
        if is_alternate_branch(&node)
            && let Some(head) = branch_head(&mut out)
        {
            head.branches.push(node);
            continue;
        }
        out.push(node);
    }
    out
}

fn is_alternate_branch(node: &Node) -> bool {
    match node {
        Node::Element(el) => el.has_attr("v-else") || el.has_attr("v-else-if"),
        Node::Text(_) => false,
    }
}

fn branch_head(out: &mut [Node]) -> Option<&mut Element> {
    for node in out.iter_mut().rev() {
        match node {
            Node::Text(text) if text.content.trim().is_empty() => continue,
            Node::Element(el) if el.has_attr("v-if") => return Some(el),
            _ => return None,
        }
    }
    None
}

fn is_slot_template(node: &Node) -> bool {
    match node {
        Node::Element(el) => {
            el.tag == "template"
                && el.attrs.iter().any(|a| {
                    a.name.starts_with("v-slot") || a.name.starts_with('#') || a.name == "slot-scope"
                })
        }
        Node::Text(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_one(source: &str) -> Element {
        let nodes = parse(source).expect("parse failed");
        let elements: Vec<Element> = nodes
            .into_iter()
            .filter_map(|n| match n {
                Node::Element(el) => Some(el),
                Node::Text(_) => None,
            })
            .collect();
        assert_eq!(elements.len(), 1, "expected exactly one root element");
        elements.into_iter().next().unwrap()
    }

    #[test]
    fn test_element_span_covers_whole_tag() {
        let source = "<div>text</div>";
        let el = parse_one(source);
        assert_eq!(el.tag, "div");
        assert_eq!((el.start, el.end), (0, source.len()));
    }

    #[test]
    fn test_text_node_preserves_whitespace_and_span() {
        let source = "<div>  你好  </div>";
        let el = parse_one(source);
        assert_eq!(el.children.len(), 1);
        let Node::Text(text) = &el.children[0] else {
            panic!("expected text node");
        };
        assert_eq!(text.content, "  你好  ");
        assert_eq!(&source[text.start..text.end], text.content);
    }

    #[test]
    fn test_attribute_span_includes_quotes() {
        let source = r#"<img alt="图片">"#;
        let el = parse_one(source);
        assert_eq!(el.attrs.len(), 1);
        let attr = &el.attrs[0];
        assert_eq!(attr.name, "alt");
        assert_eq!(attr.value.as_deref(), Some("图片"));
        assert_eq!(&source[attr.start..attr.end], r#"alt="图片""#);
    }

    #[test]
    fn test_bare_and_unquoted_attributes() {
        let el = parse_one("<input disabled type=text>");
        assert_eq!(el.attrs.len(), 2);
        assert_eq!(el.attrs[0].name, "disabled");
        assert_eq!(el.attrs[0].value, None);
        assert_eq!(el.attrs[1].value.as_deref(), Some("text"));
    }

    #[test]
    fn test_directive_attribute_names() {
        let el = parse_one(r#"<a :href="url" @click.stop="go" v-bind:title="t"></a>"#);
        let names: Vec<&str> = el.attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec![":href", "@click.stop", "v-bind:title"]);
    }

    #[test]
    fn test_void_and_self_closing_elements() {
        let nodes = parse("<br><img src=\"a.png\"/><span>x</span>").expect("parse failed");
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_mustache_may_contain_less_than() {
        let source = "<div>{{ a < b }}</div>";
        let el = parse_one(source);
        assert_eq!(el.children.len(), 1);
        let Node::Text(text) = &el.children[0] else {
            panic!("expected text node");
        };
        assert_eq!(text.content, "{{ a < b }}");
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "<div><!-- 注释 -->文案</div>";
        let el = parse_one(source);
        assert_eq!(el.children.len(), 1);
        let Node::Text(text) = &el.children[0] else {
            panic!("expected text node");
        };
        assert_eq!(text.content, "文案");
        assert_eq!(&source[text.start..text.end], "文案");
    }

    #[test]
    fn test_else_branches_fold_onto_if_head() {
        let source = r#"<div>
  <p v-if="a">甲</p>
  <p v-else-if="b">乙</p>
  <p v-else>丙</p>
</div>"#;
        let el = parse_one(source);
        // only the v-if head (plus whitespace text) stays in children
        let element_children: Vec<&Element> = el
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            })
            .collect();
        assert_eq!(element_children.len(), 1);
        let head = element_children[0];
        assert!(head.has_attr("v-if"));
        assert_eq!(head.branches.len(), 2);
    }

    #[test]
    fn test_dangling_else_stays_in_children() {
        let el = parse_one(r#"<div><p v-else>孤</p></div>"#);
        let element_children: Vec<&Element> = el
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            })
            .collect();
        assert_eq!(element_children.len(), 1);
        assert!(element_children[0].branches.is_empty());
    }

    #[test]
    fn test_slot_templates_move_to_slot_list() {
        let source = r#"<list><template v-slot:header><h1>标题</h1></template><li>项</li></list>"#;
        let el = parse_one(source);
        assert_eq!(el.slots.len(), 1);
        let element_children: Vec<&Element> = el
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            })
            .collect();
        assert_eq!(element_children.len(), 1);
        assert_eq!(element_children[0].tag, "li");
    }

    #[test]
    fn test_shorthand_slot_syntax() {
        let el = parse_one(r#"<list><template #footer>尾部</template></list>"#);
        assert_eq!(el.slots.len(), 1);
        assert!(el.children.is_empty());
    }

    #[test]
    fn test_unclosed_element_is_an_error() {
        let err = parse("<div><span>文").unwrap_err();
        assert!(err.message.contains("unclosed"));
    }

    #[test]
    fn test_mismatched_closing_tag_is_an_error() {
        let err = parse("<div><span>文</div></span>").unwrap_err();
        assert!(err.message.contains("mismatched"));
    }

    #[test]
    fn test_stray_closing_tag_is_an_error() {
        let err = parse("text</div>").unwrap_err();
        assert!(err.message.contains("unexpected closing tag"));
    }

    #[test]
    fn test_unterminated_attribute_is_an_error() {
        let err = parse("<div title=\"oops></div>").unwrap_err();
        assert!(err.message.contains("unterminated"));
    }
}
