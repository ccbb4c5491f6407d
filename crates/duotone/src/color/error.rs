//! Color parsing errors.

/// Error returned when a CSS color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or only whitespace
    Empty,
    /// A hash color without 3, 4, 6 or 8 hex digits
    InvalidHex { value: String },
    /// A keyword that is not a supported color name
    UnknownName { name: String },
    /// Anything else the color grammar rejects
    Syntax { input: String },
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorParseError::Empty => write!(f, "empty color value"),
            ColorParseError::InvalidHex { value } => {
                write!(f, "invalid hex color '#{}'", value)
            }
            ColorParseError::UnknownName { name } => write!(f, "unknown color name '{}'", name),
            ColorParseError::Syntax { input } => write!(f, "invalid color '{}'", input),
        }
    }
}

impl std::error::Error for ColorParseError {}
