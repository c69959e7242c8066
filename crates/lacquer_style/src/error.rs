use thiserror::Error;

use lacquer_theme::ThemeError;

/// Errors produced while generating component styles.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error(transparent)]
    Token(#[from] ThemeError),

    /// The component's style function failed. Other components are not
    /// affected; no partial CSS is returned for this one.
    #[error("style function for '{component}' failed: {source}")]
    StyleFn {
        component: String,
        #[source]
        source: Box<StyleError>,
    },

    /// The component's token function failed.
    #[error("token function for '{component}' failed: {source}")]
    TokenFn {
        component: String,
        #[source]
        source: Box<StyleError>,
    },

    /// Escape hatch for caller-authored style closures.
    #[error("{0}")]
    Custom(String),
}

impl StyleError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
