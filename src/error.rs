// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Image(String),
    Config(String),
}

impl Error {
    /// Returns the i18n key of the toast shown when loading a photo fails
    /// with this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-load-error-io",
            Error::Svg(_) | Error::Image(_) => "notification-load-error-format",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Svg(e) => write!(f, "SVG Error: {e}"),
            Error::Image(e) => write!(f, "Image Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
