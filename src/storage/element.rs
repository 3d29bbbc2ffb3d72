/// An XML element: a name, insertion-ordered attributes, optional text, and
/// child elements.
///
/// Characters are stored unescaped; escaping happens in [`Element::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element with the given (possibly prefixed) name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets an attribute, returning the element.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets an attribute.
    ///
    /// An existing attribute of the same name keeps its position and has its
    /// value replaced; otherwise the attribute is appended.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some((_, existing)) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            *existing = value;
            return;
        }
        self.attributes.push((name, value));
    }

    /// Sets the text content, returning the element.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element, returning the element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// The element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the named attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// The attributes, in the order they were first set.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The child elements, in order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// The first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Renders the element and its descendants as XML text.
    ///
    /// Each child is placed on its own line, indented by `indent` spaces per
    /// level of nesting. Elements without children keep their text inline,
    /// and elements with neither text nor children are self-closing.
    #[must_use]
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0, indent);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize, indent: usize) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }

        let text = self.text.as_deref().filter(|text| !text.is_empty());
        if text.is_none() && self.children.is_empty() {
            out.push_str(" />");
            return;
        }

        out.push('>');
        if let Some(text) = text {
            escape_text(text, out);
        }
        if !self.children.is_empty() {
            for child in &self.children {
                newline(out, depth + 1, indent);
                child.render_into(out, depth + 1, indent);
            }
            newline(out, depth, indent);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

fn newline(out: &mut String, depth: usize, indent: usize) {
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', depth * indent));
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\r' => out.push_str("&#13;"),
            '\n' => out.push_str("&#10;"),
            '\t' => out.push_str("&#09;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_is_self_closing() {
        assert_eq!(Element::new("ids:material").render(2), "<ids:material />");
        assert_eq!(
            Element::new("ids:material").with_text("").render(2),
            "<ids:material />"
        );
    }

    #[test]
    fn leaf_text_is_inline() {
        let element = Element::new("ids:title").with_text("Example");
        assert_eq!(element.render(2), "<ids:title>Example</ids:title>");
    }

    #[test]
    fn children_are_indented() {
        let element = Element::new("ids:info")
            .with_child(Element::new("ids:title").with_text("Example"))
            .with_child(
                Element::new("ids:nested")
                    .with_child(Element::new("ids:leaf").with_attribute("name", "x")),
            );

        let expected = "<ids:info>
  <ids:title>Example</ids:title>
  <ids:nested>
    <ids:leaf name=\"x\" />
  </ids:nested>
</ids:info>";
        assert_eq!(element.render(2), expected);
    }

    #[test]
    fn indent_width_is_configurable() {
        let element = Element::new("a").with_child(Element::new("b"));
        assert_eq!(element.render(4), "<a>\n    <b />\n</a>");
        assert_eq!(element.render(0), "<a>\n<b />\n</a>");
    }

    #[test]
    fn text_is_escaped() {
        let element = Element::new("ids:simpleValue").with_text("a < b && c > \"d\"");
        assert_eq!(
            element.render(2),
            "<ids:simpleValue>a &lt; b &amp;&amp; c &gt; \"d\"</ids:simpleValue>"
        );
    }

    #[test]
    fn attributes_are_escaped() {
        let element = Element::new("ids:specification")
            .with_attribute("description", "say \"hi\" & <wave>\nnext\tline");
        assert_eq!(
            element.render(2),
            "<ids:specification description=\"say &quot;hi&quot; &amp; &lt;wave&gt;&#10;next&#09;line\" />"
        );
    }

    #[test]
    fn set_attribute_replaces_in_place() {
        let mut element = Element::new("e")
            .with_attribute("first", "1")
            .with_attribute("second", "2");
        element.set_attribute("first", "one");

        let attributes: Vec<_> = element.attributes().collect();
        assert_eq!(attributes, vec![("first", "one"), ("second", "2")]);
        assert_eq!(element.attribute("first"), Some("one"));
        assert_eq!(element.attribute("third"), None);
    }

    #[test]
    fn set_attribute_appends_unknown_name() {
        let mut element = Element::new("e").with_attribute("first", "1");
        element.set_attribute("second", "2");
        element.set_attribute("first", "one");
        element.set_attribute("third", "3");

        let attributes: Vec<_> = element.attributes().collect();
        assert_eq!(
            attributes,
            vec![("first", "one"), ("second", "2"), ("third", "3")]
        );
        assert_eq!(element.render(2), r#"<e first="one" second="2" third="3" />"#);
    }
}
