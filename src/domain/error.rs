use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("Vector for '{word}' has dimension {found}, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("No comparable sections between the two texts")]
    NoComparableSections,

    #[error("Embedding source error: {0}")]
    Source(String),
}

impl From<String> for SimilarityError {
    fn from(s: String) -> Self {
        SimilarityError::Source(s)
    }
}
