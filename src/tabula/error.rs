use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabulaError {
    #[error("Unknown border style: {0}")]
    UnknownBorder(String),

    #[error("Unknown border glyph: {0}")]
    UnknownGlyph(String),

    #[error("Invalid glyph for {name}: {value:?} (expected at most one character)")]
    InvalidGlyph { name: String, value: String },

    #[error("Unknown justification: {0} (expected left, right or center)")]
    UnknownJustify(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TabulaError {
    /// True for errors raised while resolving table options, as opposed to I/O failures.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TabulaError::UnknownBorder(_)
                | TabulaError::UnknownGlyph(_)
                | TabulaError::InvalidGlyph { .. }
                | TabulaError::UnknownJustify(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TabulaError>;
