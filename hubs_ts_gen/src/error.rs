use std::error;
use std::fmt;

/// Names of the string-valued knobs the option decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    /// `--optionalMembers`
    OptionalMembers,
    /// `--notNullableTypes`
    NotNullableTypes,
    /// `--includeTypes`
    IncludeTypes,
    /// `--enumMemberNames`
    EnumMemberNames,
}

impl OptionName {
    /// The long command-line flag for this knob, without leading dashes.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::OptionalMembers => "optionalMembers",
            Self::NotNullableTypes => "notNullableTypes",
            Self::IncludeTypes => "includeTypes",
            Self::EnumMemberNames => "enumMemberNames",
        }
    }

    /// Human-readable description used in error messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OptionalMembers => "optional member discovery",
            Self::NotNullableTypes => "not-nullable type discovery",
            Self::IncludeTypes => "included types discovery",
            Self::EnumMemberNames => "enum member name mapping mode",
        }
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Error type for option decoding and plan output.
#[derive(Debug)]
pub enum TsGenError {
    /// A non-empty knob value did not match any keyword known for that knob.
    UnsupportedOption {
        /// The knob that was being decoded.
        option: OptionName,
        /// The raw value exactly as supplied.
        value: String,
    },

    /// I/O error (e.g., writing the plan file).
    IoError(std::io::Error),

    /// JSON serialization error.
    JsonError(serde_json::Error),
}

impl error::Error for TsGenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::UnsupportedOption { .. } => None,
            Self::IoError(io_error) => Some(io_error),
            Self::JsonError(json_error) => Some(json_error),
        }
    }
}

impl fmt::Display for TsGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOption { option, value } => write!(
                f,
                "Specified {} option is not supported (--{option}): {value}",
                option.description()
            ),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
        }
    }
}

impl From<std::io::Error> for TsGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for TsGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}
