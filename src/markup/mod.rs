//! Markup tree construction and serialization.
//!
//! # Responsibilities
//! - Build an element tree (tag, ordered attributes, children, text slots)
//!   from a fluent call pattern
//! - Serialize the tree to markup text with escaping
//!
//! # Design Decisions
//! - Explicit tag-name parameter instead of reflection-style constructors
//! - Text placement follows document-tree semantics: text before the first
//!   child lands in the element's leading slot, text after a child becomes
//!   that child's trailing slot
//! - Absent children ([`Content::Empty`], `None`) are silently dropped so
//!   callers can express conditional fragments inline
//! - Childless, text-less elements serialize self-closed (`<br />`)

/// A single argument to [`Element::child`]: another element, a run of text,
/// or nothing at all.
#[derive(Debug, Clone)]
pub enum Content {
    Element(Element),
    Text(String),
    /// Absent marker; appending it is a no-op.
    Empty,
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Content::Empty,
        }
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    /// Text before the first child.
    text: String,
    children: Vec<Child>,
}

#[derive(Debug, Clone)]
struct Child {
    element: Element,
    /// Text between this child and the next sibling.
    tail: String,
}

/// Shorthand constructor, `el("form")` reads better in page handlers than
/// `Element::new("form")`.
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Leading/trailing underscores are stripped from the
    /// name so reserved words can be written as `for_`, `type_`, etc.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs
            .push((name.trim_matches('_').to_string(), value.into()));
        self
    }

    /// Append one child argument following the text-slot rules.
    pub fn child(mut self, content: impl Into<Content>) -> Self {
        self.append(content.into());
        self
    }

    /// Append a sequence of child arguments.
    pub fn children<I, C>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        for item in items {
            self.append(item.into());
        }
        self
    }

    fn append(&mut self, content: Content) {
        match content {
            Content::Empty => {}
            Content::Element(element) => self.children.push(Child {
                element,
                tail: String::new(),
            }),
            Content::Text(text) => match self.children.last_mut() {
                Some(last) => last.tail = text,
                None => self.text.push_str(&text),
            },
        }
    }

    /// Serialize the tree to markup text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.text.is_empty() && self.children.is_empty() {
            out.push_str(" />");
            return;
        }
        out.push('>');
        out.push_str(&escape_text(&self.text));
        for child in &self.children {
            child.element.write(out);
            out.push_str(&escape_text(&child.tail));
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_before_first_child_is_leading_text() {
        let elem = el("p").child("hello ").child(el("b").child("world"));
        assert_eq!(elem.render(), "<p>hello <b>world</b></p>");
    }

    #[test]
    fn text_after_child_becomes_trailing_text() {
        let elem = el("p")
            .child(el("b").child("one"))
            .child(" middle ")
            .child(el("i").child("two"));
        assert_eq!(elem.render(), "<p><b>one</b> middle <i>two</i></p>");
    }

    #[test]
    fn leading_text_concatenates() {
        let elem = el("p").child("a").child("b");
        assert_eq!(elem.render(), "<p>ab</p>");
    }

    #[test]
    fn absent_children_are_dropped() {
        let maybe: Option<Element> = None;
        let elem = el("div").child(maybe).child(Some(el("br")));
        assert_eq!(elem.render(), "<div><br /></div>");
    }

    #[test]
    fn childless_element_self_closes() {
        let elem = el("input").attr("type", "text").attr("value", "x");
        assert_eq!(elem.render(), "<input type=\"text\" value=\"x\" />");
    }

    #[test]
    fn attribute_underscores_trimmed() {
        let elem = el("label").attr("for_", "username").child("Username");
        assert_eq!(elem.render(), "<label for=\"username\">Username</label>");
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let elem = el("input")
            .attr("id", "a")
            .attr("name", "a")
            .attr("type", "text");
        assert_eq!(elem.render(), "<input id=\"a\" name=\"a\" type=\"text\" />");
    }

    #[test]
    fn text_is_escaped_in_all_positions() {
        let elem = el("p")
            .child("a < b")
            .child(el("b").child("x & y"))
            .child("> z");
        assert_eq!(
            elem.render(),
            "<p>a &lt; b<b>x &amp; y</b>&gt; z</p>"
        );
    }

    #[test]
    fn attribute_values_escape_quotes() {
        let elem = el("input").attr("value", "say \"hi\" & <go>");
        assert_eq!(
            elem.render(),
            "<input value=\"say &quot;hi&quot; &amp; &lt;go&gt;\" />"
        );
    }
}
