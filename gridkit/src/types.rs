//! Appearance enums shared by the field and the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Control size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Ok(Size::Small),
            "medium" | "md" => Ok(Size::Medium),
            "large" | "lg" => Ok(Size::Large),
            _ => Err(ParseError::UnknownSize(s.to_string())),
        }
    }
}

/// Visual variant of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Outlined,
    Filled,
    Underlined,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Outlined => "outlined",
            Variant::Filled => "filled",
            Variant::Underlined => "underlined",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outlined" => Ok(Variant::Outlined),
            "filled" => Ok(Variant::Filled),
            "underlined" => Ok(Variant::Underlined),
            _ => Err(ParseError::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parse_accepts_short_names() {
        assert_eq!("sm".parse::<Size>(), Ok(Size::Small));
        assert_eq!(" Large ".parse::<Size>(), Ok(Size::Large));
        assert_eq!(
            "huge".parse::<Size>(),
            Err(ParseError::UnknownSize("huge".to_string()))
        );
    }

    #[test]
    fn test_variant_display_round_trips_through_parse() {
        for variant in [Variant::Outlined, Variant::Filled, Variant::Underlined] {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        assert!("ghost".parse::<Variant>().is_err());
    }
}
