//! Shared test helpers.

use std::collections::HashMap;
use std::sync::Arc;
use wordsim::infrastructure::memory::vector_store::InMemoryVectorStore;
use wordsim::Wordsim;

pub fn store_from(entries: &[(&str, &[f32])]) -> InMemoryVectorStore {
    let mapping: HashMap<String, Vec<f32>> = entries
        .iter()
        .map(|(word, vector)| (word.to_string(), vector.to_vec()))
        .collect();
    InMemoryVectorStore::from_mapping(mapping).unwrap()
}

pub fn setup(entries: &[(&str, &[f32])]) -> Wordsim {
    Wordsim::with_store(Arc::new(store_from(entries)))
}
