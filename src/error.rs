use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Layout parameters were rejected before any plan was produced.
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(swatch::config))]
    InvalidConfiguration {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A colour with no displayable model. Batch planners never return this;
    /// they degrade the single entry to the "None" sentinel instead.
    #[error("Unrepresentable colour: {model}")]
    #[diagnostic(code(swatch::colour))]
    UnrepresentableColor { model: String },

    #[error("Selection error: {message}")]
    #[diagnostic(code(swatch::select))]
    Selection {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SwatchError {
    /// Shorthand for an `InvalidConfiguration` without help text.
    pub fn config(message: impl Into<String>) -> Self {
        SwatchError::InvalidConfiguration {
            message: message.into(),
            help: None,
        }
    }

    /// True when the error means "stop": no layout can be produced at all.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SwatchError::UnrepresentableColor { .. })
    }
}

pub type Result<T> = std::result::Result<T, SwatchError>;
