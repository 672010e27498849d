use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Kind of text the field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }

    /// Whether typed characters are masked.
    pub fn is_masked(self) -> bool {
        self == InputType::Password
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(InputType::Text),
            "password" => Ok(InputType::Password),
            "email" => Ok(InputType::Email),
            "number" => Ok(InputType::Number),
            "search" => Ok(InputType::Search),
            "tel" => Ok(InputType::Tel),
            "url" => Ok(InputType::Url),
            _ => Err(ParseError::UnknownInputType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_type() {
        assert_eq!("Password".parse::<InputType>(), Ok(InputType::Password));
        assert_eq!(
            "date".parse::<InputType>(),
            Err(ParseError::UnknownInputType("date".to_string()))
        );
    }
}
