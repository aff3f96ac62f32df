use crate::domain::values::delimiter::Delimiter;
use serde::{Deserialize, Serialize};

/// An ordered run of tokens bounded by delimiters (or text start/end).
///
/// `terminator` is the delimiter that closed the section; a trailing
/// section with no closing delimiter before end-of-text carries `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub tokens: Vec<String>,
    pub terminator: Option<Delimiter>,
}

impl Section {
    pub fn new(tokens: Vec<String>, terminator: Option<Delimiter>) -> Self {
        Self { tokens, terminator }
    }
}
