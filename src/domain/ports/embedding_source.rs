use std::collections::HashMap;

/// Supplies a completed word → vector mapping from some external origin
/// (a file, a test fixture). Loading happens once, before any scoring.
pub trait EmbeddingSource: Send + Sync {
    fn load(&self) -> Result<HashMap<String, Vec<f32>>, String>;
}
