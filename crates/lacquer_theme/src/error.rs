use thiserror::Error;

/// Errors produced while deriving a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A derivative stage failed. The whole map-token build is aborted;
    /// no partial theme is ever returned.
    #[error("derivative '{name}' failed: {source}")]
    Derivative {
        name: &'static str,
        #[source]
        source: Box<ThemeError>,
    },

    #[error("missing token '{key}'")]
    MissingToken { key: String },

    #[error("token '{key}' is not a {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },

    #[error("invalid color value '{value}'")]
    InvalidColor { value: String },

    #[error("invalid seed config: {0}")]
    Config(#[from] toml::de::Error),
}

impl ThemeError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::MissingToken { key: key.into() }
    }

    pub(crate) fn mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
        }
    }
}
