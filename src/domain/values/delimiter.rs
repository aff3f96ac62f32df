use serde::{Deserialize, Serialize};

/// A section-terminating character and its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiter {
    pub character: char,
    pub name: String,
}

impl Delimiter {
    pub fn new(character: char, name: impl Into<String>) -> Self {
        Self {
            character,
            name: name.into(),
        }
    }
}

/// The built-in sentence-boundary delimiters.
pub fn default_delimiters() -> Vec<Delimiter> {
    vec![
        Delimiter::new(',', "comma"),
        Delimiter::new('.', "period"),
        Delimiter::new('?', "question mark"),
        Delimiter::new('!', "exclamation mark"),
    ]
}
