use std::fmt;

/// Failure of an asynchronous clipboard write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No window or clipboard to write to.
    Unavailable,
    /// The write promise rejected (permission denied, insecure context, ...).
    WriteRejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => f.write_str("clipboard is not available"),
            ClipboardError::WriteRejected(reason) => {
                write!(f, "clipboard write was rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Failure to read or write a generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(reason) => write!(f, "failed to parse config: {reason}"),
            ConfigError::Serialize(reason) => write!(f, "failed to serialize config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::Serialize(error.to_string())
    }
}
