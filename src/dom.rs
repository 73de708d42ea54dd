//! Element tree produced by rendering a view
//!
//! Views return owned [`Node`] values. The host decides how to present them;
//! `Display` renders markup, which is what the logs and tests look at.

use std::fmt;

/// Element kinds the views produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    H1,
    H2,
    Img,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::Img => "img",
        }
    }

    /// Void elements never carry children
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Img)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct children that are elements with the given tag
    pub fn children_with_tag(&self, tag: Tag) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(move |child| match child {
            Node::Element(element) if element.tag == tag => Some(element),
            _ => None,
        })
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants, in document order
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(element) => collect_text(&element.children, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

fn escape(text: &str, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => formatter.write_str("&amp;")?,
            '<' => formatter.write_str("&lt;")?,
            '>' => formatter.write_str("&gt;")?,
            '"' => formatter.write_str("&quot;")?,
            _ => write!(formatter, "{c}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<{}", self.tag.name())?;
        for (name, value) in &self.attributes {
            write!(formatter, " {name}=\"")?;
            escape(value, formatter)?;
            formatter.write_str("\"")?;
        }
        if self.tag.is_void() {
            return formatter.write_str("/>");
        }
        formatter.write_str(">")?;
        for child in &self.children {
            write!(formatter, "{child}")?;
        }
        write!(formatter, "</{}>", self.tag.name())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write!(formatter, "{element}"),
            Node::Text(text) => escape(text, formatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new(Tag::Div)
            .child(Element::new(Tag::H2).text("Title"))
            .child(Element::new(Tag::Img).attr("src", "a.jpg").attr("alt", "A"))
            .text("tail ")
            .text("text")
            .into()
    }

    #[test]
    fn text_content_concatenates_in_order() {
        assert_eq!(sample().text_content(), "Titletail text");
    }

    #[test]
    fn markup_renders_void_elements_and_attributes() {
        assert_eq!(
            sample().to_string(),
            r#"<div><h2>Title</h2><img src="a.jpg" alt="A"/>tail text</div>"#
        );
    }

    #[test]
    fn markup_escapes_text_and_attributes() {
        let node: Node = Element::new(Tag::H1)
            .attr("alt", "\"quoted\"")
            .text("Fish & <Chips>")
            .into();
        assert_eq!(
            node.to_string(),
            "<h1 alt=\"&quot;quoted&quot;\">Fish &amp; &lt;Chips&gt;</h1>"
        );
    }

    #[test]
    fn children_with_tag_skips_other_nodes() {
        let node = sample();
        let div = node.as_element().unwrap();
        assert_eq!(div.children_with_tag(Tag::H2).count(), 1);
        assert_eq!(div.children_with_tag(Tag::Img).count(), 1);
        assert_eq!(div.children_with_tag(Tag::H1).count(), 0);

        let img = div.children_with_tag(Tag::Img).next().unwrap();
        assert_eq!(img.attribute("src"), Some("a.jpg"));
        assert_eq!(img.attribute("title"), None);
    }
}
