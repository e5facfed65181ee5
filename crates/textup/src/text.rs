//! Inline text node representation.
//!
//! `TextNode` is the intermediate representation between inline
//! Markdown and markup: one span of text, its semantic role, and an
//! optional URL for links and images.

use std::str::FromStr;

use crate::TextupError;

/// The semantic role of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Regular text
    Text,
    /// Bold text (`**text**`)
    Bold,
    /// Italic text (`_text_`)
    Italic,
    /// Code text (`` `text` ``)
    Code,
    /// Link text (`[text](url)`)
    Link,
    /// Image text (`![alt](url)`)
    Image,
}

impl TextType {
    /// Stable lowercase tag name for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl FromStr for TextType {
    type Err = TextupError;

    /// Parse a type tag, e.g. from a deserialized document.
    ///
    /// This is where an out-of-range type value surfaces: the closed
    /// enum makes the converter's own match exhaustive, so unknown tags
    /// can only arrive as strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TextType::Text),
            "bold" => Ok(TextType::Bold),
            "italic" => Ok(TextType::Italic),
            "code" => Ok(TextType::Code),
            "link" => Ok(TextType::Link),
            "image" => Ok(TextType::Image),
            other => Err(TextupError::UnsupportedType(other.to_string())),
        }
    }
}

/// One inline span of source text plus its semantic role.
///
/// Immutable value type with structural equality across all three
/// fields. `url` is semantically required for `Link`/`Image` but not
/// enforced here; the producing lexer owns that guarantee, and an
/// absent URL flows downstream as an empty attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// The text content of the span
    pub text: String,

    /// The semantic role of the span
    pub text_type: TextType,

    /// Target URL for links, source URL for images
    pub url: Option<String>,
}

impl TextNode {
    /// Create a text node without a URL
    pub fn new(text: &str, text_type: TextType) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: None,
        }
    }

    /// Create a text node with a URL (links and images)
    pub fn with_url(text: &str, text_type: TextType, url: &str) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: Some(url.to_string()),
        }
    }
}
