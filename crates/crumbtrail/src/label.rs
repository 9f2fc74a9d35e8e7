use maud::{html, Markup, Render};
use serde::{Serialize, Serializer};

/// Display content for a breadcrumb entry.
///
/// A label is either plain text (escaped on render) or an opaque renderable
/// node such as an inline icon (emitted verbatim). Modeling the two cases as
/// a tagged variant keeps the contract explicit instead of overloading a
/// single stringly-typed field.
#[derive(Debug, Clone)]
pub enum Label {
    /// Plain text, HTML-escaped when rendered.
    Text(String),
    /// Pre-built markup, rendered as-is.
    Node(Markup),
}

// Manual impl because `Markup` (`PreEscaped<String>`) does not derive
// `PartialEq`; variants compare equal when their backing strings match.
impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Label::Text(a), Label::Text(b)) => a == b,
            (Label::Node(a), Label::Node(b)) => a.0 == b.0,
            _ => false,
        }
    }
}

impl Label {
    /// Returns the raw text backing this label.
    ///
    /// For `Node` labels this is the markup source, which is what JSON
    /// surfaces serialize.
    pub fn as_str(&self) -> &str {
        match self {
            Label::Text(text) => text,
            Label::Node(markup) => &markup.0,
        }
    }
}

impl Render for Label {
    fn render(&self) -> Markup {
        match self {
            Label::Text(text) => html! { (text) },
            Label::Node(markup) => markup.clone(),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

impl From<Markup> for Label {
    fn from(markup: Markup) -> Self {
        Label::Node(markup)
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_label_escapes() {
        let label = Label::from("<b>Bold</b>");
        let html = label.render().into_string();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_node_label_passes_through() {
        let label = Label::from(html! { em { "Detail" } });
        assert_eq!(label.render().into_string(), "<em>Detail</em>");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Label::from("Users").as_str(), "Users");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Label::from("Users")).unwrap();
        assert_eq!(json, "\"Users\"");
    }
}
