//! Minimal XML element tree and pretty printer.
//!
//! Output layout: declaration line, one element per line, four spaces per
//! depth, text-only elements kept on a single line.

const INDENT: &str = "    ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    /// Written in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Only written when the element has no children.
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Sets an attribute, replacing the value in place if the key exists.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    #[cfg(test)]
    pub(crate) fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Pretty-printed document including the XML declaration.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" ?>\n");
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for (k, v) in &self.attributes {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            out.push_str(&escape_attr(v));
            out.push('"');
        }

        if !self.children.is_empty() {
            out.push_str(">\n");
            for c in &self.children {
                c.write_pretty(out, depth + 1);
            }
            out.push_str(&pad);
            out.push_str("</");
            out.push_str(&self.name);
            out.push_str(">\n");
            return;
        }

        match self.text.as_deref().filter(|t| !t.is_empty()) {
            Some(t) => {
                out.push('>');
                out.push_str(&escape_text(t));
                out.push_str("</");
                out.push_str(&self.name);
                out.push_str(">\n");
            }
            None => out.push_str("/>\n"),
        }
    }
}

pub fn escape_text(s: &str) -> String {
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

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}
