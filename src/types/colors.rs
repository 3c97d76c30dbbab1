// src/types/colors.rs
use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color tag carried by rich-text annotations.
///
/// Serialized as the API's own tag (`"red"`, `"red_background"`, ...).
/// Tags outside the known palette deserialize into [`Color::Other`] and
/// serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    /// A tag this crate does not know, kept verbatim.
    Other(String),
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    /// Strict parse: only tags from the known palette are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Color::from_tag(s) {
            Color::Other(tag) => Err(ValidationError::InvalidColor(tag)),
            known => Ok(known),
        }
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        match Color::from_tag(&value) {
            Color::Other(_) => Color::Other(value),
            known => known,
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Color {
    /// Maps a wire tag to a color, falling back to [`Color::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "default" => Color::Default,
            "gray" => Color::Gray,
            "brown" => Color::Brown,
            "red" => Color::Red,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "purple" => Color::Purple,
            "pink" => Color::Pink,
            "gray_background" => Color::GrayBackground,
            "brown_background" => Color::BrownBackground,
            "red_background" => Color::RedBackground,
            "orange_background" => Color::OrangeBackground,
            "yellow_background" => Color::YellowBackground,
            "green_background" => Color::GreenBackground,
            "blue_background" => Color::BlueBackground,
            "purple_background" => Color::PurpleBackground,
            "pink_background" => Color::PinkBackground,
            other => Color::Other(other.to_string()),
        }
    }

    /// The tag as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
            Color::Other(tag) => tag,
        }
    }

    pub fn is_background(&self) -> bool {
        self.as_str().ends_with("_background")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
