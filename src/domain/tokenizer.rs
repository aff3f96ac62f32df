//! Delimiter-aware text segmentation.
//!
//! Splits free text into ordered sections of word tokens in a single
//! left-to-right pass: a delimiter character closes the current section and
//! is recorded as its terminator, whitespace closes the token being
//! accumulated. After the pass, tokens of one character or fewer are
//! dropped, then sections left without tokens. This is a pragmatic
//! delimiter splitter, not a linguistically correct tokenizer.

use crate::domain::values::delimiter::{default_delimiters, Delimiter};
use crate::domain::values::section::Section;

/// Accumulator for the section currently being scanned: completed tokens
/// plus the token in progress.
#[derive(Default)]
struct SectionBuilder {
    tokens: Vec<String>,
    current: String,
}

impl SectionBuilder {
    fn push_char(&mut self, c: char) {
        self.current.push(c);
    }

    /// Closes the token in progress. Empty tokens are kept here and removed
    /// by the post-pass filter.
    fn finish_token(&mut self) {
        self.tokens.push(std::mem::take(&mut self.current));
    }

    fn finish(mut self, terminator: Option<Delimiter>) -> Section {
        if !self.current.is_empty() {
            self.finish_token();
        }
        Section::new(self.tokens, terminator)
    }

    fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.current.is_empty()
    }
}

/// Splits `text` into sections of word tokens.
///
/// `extra_delimiters` are merged after the built-in set (comma, period,
/// question mark, exclamation mark); on a duplicate character the built-in
/// definition wins.
pub fn tokenize(text: &str, extra_delimiters: &[Delimiter]) -> Vec<Section> {
    let mut delimiters = default_delimiters();
    delimiters.extend_from_slice(extra_delimiters);

    let mut sections = Vec::new();
    let mut builder = SectionBuilder::default();

    for c in text.chars() {
        if let Some(delimiter) = delimiters.iter().find(|d| d.character == c) {
            sections.push(std::mem::take(&mut builder).finish(Some(delimiter.clone())));
        } else if c.is_whitespace() {
            builder.finish_token();
        } else {
            builder.push_char(c);
        }
    }
    if !builder.is_empty() {
        sections.push(builder.finish(None));
    }

    // Drop tokens of one character or fewer, then sections left empty.
    for section in &mut sections {
        section.tokens.retain(|token| token.chars().count() > 1);
    }
    sections.retain(|section| !section.tokens.is_empty());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_characters_accumulate_into_first_token() {
        let sections = tokenize("word", &[]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].tokens, vec!["word"]);
        assert!(sections[0].terminator.is_none());
    }

    #[test]
    fn test_delimiter_splits_mid_word() {
        let sections = tokenize("ab,cd", &[]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].tokens, vec!["ab"]);
        assert_eq!(sections[0].terminator.as_ref().unwrap().name, "comma");
        assert_eq!(sections[1].tokens, vec!["cd"]);
        assert!(sections[1].terminator.is_none());
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert!(tokenize("", &[]).is_empty());
        assert!(tokenize("   ", &[]).is_empty());
        assert!(tokenize("...", &[]).is_empty());
    }

    #[test]
    fn test_section_of_short_tokens_is_dropped() {
        let sections = tokenize("a b. the end.", &[]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].tokens, vec!["the", "end"]);
    }
}
