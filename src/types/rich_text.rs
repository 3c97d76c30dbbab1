// src/types/rich_text.rs
//! Decorated text runs as returned in `title` and rich-text properties.

use super::Color;
use serde::{Deserialize, Serialize};

/// A run of text with formatting annotations.
///
/// `text` is only present for runs of type `"text"`; mentions and
/// equations carry their rendering in `plain_text` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<Text>,
    pub annotations: Annotation,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichText {
    /// Create a plain text run with default annotations.
    ///
    /// ```
    /// # use notion_items::RichText;
    /// let run = RichText::plain("hello");
    /// assert_eq!(run.plain_text, "hello");
    /// ```
    pub fn plain(text: &str) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(Text {
                content: text.to_string(),
                link: None,
            }),
            annotations: Annotation::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }
}

/// Literal content of a text run. The API nests the link target as
/// `{"url": ...}`; it is flattened to the URL itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default, with = "link_url")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Concatenates the plain text of every run, in order.
pub fn flatten_plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

mod link_url {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Link {
        url: String,
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Link>::deserialize(deserializer)?.map(|link| link.url))
    }

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value
            .as_ref()
            .map(|url| Link { url: url.clone() })
            .serialize(serializer)
    }
}
