pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::similarity::SimilarityUseCase;
use crate::domain::error::SimilarityError;
use crate::domain::ports::embedding_source::EmbeddingSource;
use crate::domain::ports::vector_store::{StoreStats, VectorStore};
use crate::domain::values::delimiter::Delimiter;
use crate::domain::values::options::SimilarityOptions;
use crate::domain::values::section::Section;
use crate::infrastructure::glove::file_source::GloveFileSource;
use crate::infrastructure::memory::vector_store::InMemoryVectorStore;
use std::sync::Arc;

/// Jaro-Winkler similarity between two strings, usable without a store.
pub fn string_distance(s1: &str, s2: &str) -> f64 {
    domain::values::string_distance::jaro_winkler(s1, s2)
}

/// Splits text into ordered sections of word tokens, merging
/// `extra_delimiters` with the built-in set.
pub fn tokenize(text: &str, extra_delimiters: &[Delimiter]) -> Vec<Section> {
    domain::tokenizer::tokenize(text, extra_delimiters)
}

pub struct Wordsim {
    store: Arc<dyn VectorStore>,
    similarity: SimilarityUseCase,
}

impl std::fmt::Debug for Wordsim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wordsim").finish_non_exhaustive()
    }
}

impl Wordsim {
    /// Loads a word-per-line embedding file and builds the engine.
    pub fn open(path: &str) -> Result<Self, SimilarityError> {
        Self::from_source(Arc::new(GloveFileSource::new(path)))
    }

    pub fn from_source(source: Arc<dyn EmbeddingSource>) -> Result<Self, SimilarityError> {
        let mapping = source.load().map_err(SimilarityError::Source)?;
        let store = InMemoryVectorStore::from_mapping(mapping)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn with_store(store: Arc<dyn VectorStore>) -> Self {
        Self {
            similarity: SimilarityUseCase::new(store.clone()),
            store,
        }
    }

    /// Engine with no embeddings; every score uses string distance.
    pub fn without_embeddings() -> Self {
        Self::with_store(Arc::new(InMemoryVectorStore::empty()))
    }

    pub fn word_similarity(&self, word1: &str, word2: &str, options: SimilarityOptions) -> f64 {
        self.similarity.word_similarity(word1, word2, options)
    }

    pub fn text_similarity(
        &self,
        text1: &str,
        text2: &str,
        options: SimilarityOptions,
    ) -> Result<f64, SimilarityError> {
        self.similarity.text_similarity(text1, text2, options)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            words: self.store.len(),
            dimension: self.store.dimension(),
        }
    }
}
