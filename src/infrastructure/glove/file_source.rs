use crate::domain::ports::embedding_source::EmbeddingSource;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// Reads the plain-text embedding format: one word per line, followed by
/// its whitespace-separated float components.
pub struct GloveFileSource {
    path: PathBuf,
}

impl GloveFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EmbeddingSource for GloveFileSource {
    fn load(&self) -> Result<HashMap<String, Vec<f32>>, String> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read {}: {e}", self.path.display()))?;

        let mut mapping = HashMap::new();
        for (number, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else { continue };
            let vector = fields
                .map(|field| {
                    field.parse::<f32>().map_err(|e| {
                        format!("Line {}: invalid component '{field}': {e}", number + 1)
                    })
                })
                .collect::<Result<Vec<f32>, String>>()?;
            mapping.insert(word.to_string(), vector);
        }

        info!(words = mapping.len(), "loaded embeddings from {}", self.path.display());
        Ok(mapping)
    }
}
