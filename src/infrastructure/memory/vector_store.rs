use crate::domain::error::SimilarityError;
use crate::domain::ports::vector_store::VectorStore;
use std::collections::HashMap;

/// In-memory embedding table, immutable after construction.
///
/// Euclidean norms are computed once here and never recomputed.
pub struct InMemoryVectorStore {
    vectors: HashMap<String, Vec<f32>>,
    norms: HashMap<String, f64>,
    dimension: usize,
}

impl InMemoryVectorStore {
    /// Builds the store from an externally loaded mapping, rejecting any
    /// vector whose dimensionality differs from the rest.
    pub fn from_mapping(mapping: HashMap<String, Vec<f32>>) -> Result<Self, SimilarityError> {
        let mut dimension: Option<usize> = None;
        for (word, vector) in &mapping {
            match dimension {
                None => dimension = Some(vector.len()),
                Some(expected) if vector.len() != expected => {
                    return Err(SimilarityError::DimensionMismatch {
                        word: word.clone(),
                        expected,
                        found: vector.len(),
                    });
                }
                Some(_) => {}
            }
        }

        let norms = mapping
            .iter()
            .map(|(word, vector)| (word.clone(), euclidean_norm(vector)))
            .collect();

        let dimension = dimension.unwrap_or(0);
        tracing::debug!(words = mapping.len(), dimension, "vector store built");
        Ok(Self {
            vectors: mapping,
            norms,
            dimension,
        })
    }

    /// A store with no vectors; every lookup misses, so scoring always
    /// falls back to string distance.
    pub fn empty() -> Self {
        Self {
            vectors: HashMap::new(),
            norms: HashMap::new(),
            dimension: 0,
        }
    }
}

fn euclidean_norm(vector: &[f32]) -> f64 {
    vector
        .iter()
        .map(|x| {
            let x = *x as f64;
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

impl VectorStore for InMemoryVectorStore {
    fn vector_of(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(|v| v.as_slice())
    }

    fn norm_of(&self, word: &str) -> Option<f64> {
        self.norms.get(word).copied()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.vectors.len()
    }
}
