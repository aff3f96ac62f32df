mod common;

use common::store_from;
use std::collections::HashMap;
use wordsim::domain::error::SimilarityError;
use wordsim::domain::ports::vector_store::VectorStore;
use wordsim::infrastructure::memory::vector_store::InMemoryVectorStore;

#[test]
fn test_norms_cached_at_construction() {
    let store = store_from(&[("right", &[3.0, 4.0]), ("unit", &[1.0, 0.0])]);
    assert_eq!(store.norm_of("right"), Some(5.0));
    assert_eq!(store.norm_of("unit"), Some(1.0));
}

#[test]
fn test_absent_word_is_none_not_error() {
    let store = store_from(&[("cat", &[1.0, 2.0])]);
    assert!(store.vector_of("dog").is_none());
    assert!(store.norm_of("dog").is_none());
    // Lookup is case-sensitive, exact match.
    assert!(store.vector_of("Cat").is_none());
}

#[test]
fn test_dimension_and_len() {
    let store = store_from(&[("cat", &[1.0, 2.0, 3.0]), ("dog", &[4.0, 5.0, 6.0])]);
    assert_eq!(store.dimension(), 3);
    assert_eq!(store.len(), 2);
    assert!(!store.is_empty());
}

#[test]
fn test_empty_store() {
    let store = InMemoryVectorStore::empty();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert_eq!(store.dimension(), 0);
    assert!(store.vector_of("anything").is_none());
}

#[test]
fn test_mismatched_dimensions_rejected_at_construction() {
    let mut mapping = HashMap::new();
    mapping.insert("cat".to_string(), vec![1.0, 2.0]);
    mapping.insert("dog".to_string(), vec![1.0]);
    let result = InMemoryVectorStore::from_mapping(mapping);
    assert!(matches!(
        result,
        Err(SimilarityError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_zero_vector_is_present_with_zero_norm() {
    // A legitimately zero-valued vector is present, not absent.
    let store = store_from(&[("null", &[0.0, 0.0])]);
    assert_eq!(store.vector_of("null"), Some(&[0.0f32, 0.0][..]));
    assert_eq!(store.norm_of("null"), Some(0.0));
}
