use crate::domain::error::SimilarityError;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::tokenizer::tokenize;
use crate::domain::values::options::SimilarityOptions;
use crate::domain::values::section::Section;
use crate::domain::values::string_distance::jaro_winkler;
use std::sync::Arc;

/// Scores word and text pairs against a vector store, falling back to
/// Jaro-Winkler string distance for words the store does not cover.
pub struct SimilarityUseCase {
    store: Arc<dyn VectorStore>,
}

impl SimilarityUseCase {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    /// Cosine similarity when both words are present in the store,
    /// Jaro-Winkler otherwise. With `string_distance_only` the store is
    /// never consulted at all.
    ///
    /// Cosine results are in [-1, 1], the fallback in [0, 1]; callers
    /// mixing modes must not assume a single range. A zero-norm vector
    /// scores 0.0 against everything.
    pub fn word_similarity(&self, word1: &str, word2: &str, options: SimilarityOptions) -> f64 {
        if options.string_distance_only {
            return jaro_winkler(word1, word2);
        }
        let (Some(v1), Some(v2)) = (self.store.vector_of(word1), self.store.vector_of(word2))
        else {
            tracing::trace!(word1, word2, "word absent, falling back to string distance");
            return jaro_winkler(word1, word2);
        };
        let (Some(n1), Some(n2)) = (self.store.norm_of(word1), self.store.norm_of(word2)) else {
            return jaro_winkler(word1, word2);
        };
        cosine(v1, v2, n1, n2)
    }

    /// Average similarity over the cross product of the two texts'
    /// sections, each section pair scored as the average `word_similarity`
    /// over its token pairs.
    ///
    /// Returns `NoComparableSections` when no token pair was scored at all
    /// (an empty text, or one whose tokens were all filtered out).
    pub fn text_similarity(
        &self,
        text1: &str,
        text2: &str,
        options: SimilarityOptions,
    ) -> Result<f64, SimilarityError> {
        let sections1 = tokenize(text1, &[]);
        let sections2 = tokenize(text2, &[]);

        let mut total = 0.0;
        let mut contributing = 0usize;
        for section1 in &sections1 {
            for section2 in &sections2 {
                if let Some(average) = self.section_similarity(section1, section2, options) {
                    total += average;
                    contributing += 1;
                }
            }
        }

        if contributing == 0 {
            return Err(SimilarityError::NoComparableSections);
        }
        Ok(total / contributing as f64)
    }

    /// Average word similarity over the token cross product, or `None`
    /// when no pair was scored.
    fn section_similarity(
        &self,
        section1: &Section,
        section2: &Section,
        options: SimilarityOptions,
    ) -> Option<f64> {
        let mut sum = 0.0;
        let mut pairs = 0usize;
        for token1 in &section1.tokens {
            for token2 in &section2.tokens {
                // The tokenizer already drops empty tokens; skip defensively.
                if token1.is_empty() || token2.is_empty() {
                    continue;
                }
                sum += self.word_similarity(token1, token2, options);
                pairs += 1;
            }
        }
        (pairs > 0).then(|| sum / pairs as f64)
    }
}

fn cosine(v1: &[f32], v2: &[f32], norm1: f64, norm2: f64) -> f64 {
    let dot: f64 = v1
        .iter()
        .zip(v2.iter())
        .map(|(x, y)| *x as f64 * *y as f64)
        .sum();
    let denom = norm1 * norm2;
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
