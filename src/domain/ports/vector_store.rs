use serde::Serialize;

/// Read-only lookup over a word-embedding table.
///
/// Lookups return `Option` because absence is a first-class signal consumed
/// by the similarity engine's fallback logic, never an error. Every vector
/// in a store shares one dimensionality, and norms are computed once at
/// construction time.
pub trait VectorStore: Send + Sync {
    fn vector_of(&self, word: &str) -> Option<&[f32]>;

    /// Euclidean norm cached when the store was built.
    fn norm_of(&self, word: &str) -> Option<f64>;

    /// Shared dimensionality of the stored vectors; 0 for an empty store.
    fn dimension(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Summary of a store's contents.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub words: usize,
    pub dimension: usize,
}
