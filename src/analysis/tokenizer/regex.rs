//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{LexicaError, Result};

/// Default pattern: runs of alphanumeric characters. Underscores and every
/// other non-alphanumeric character act as separators.
pub const DEFAULT_PATTERN: &str = r"[^\W_]+";

/// A regex-based tokenizer that extracts every match of a pattern as a token.
///
/// Matching is lazy: the returned stream owns a copy of the text and advances
/// through it one match at a time.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default alphanumeric pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexicaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(RegexTokenIter {
            pattern: Arc::clone(&self.pattern),
            text: Arc::from(text),
            cursor: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Lazy iterator over the matches of a pattern in an owned text.
struct RegexTokenIter {
    pattern: Arc<Regex>,
    text: Arc<str>,
    cursor: usize,
    position: usize,
}

impl Iterator for RegexTokenIter {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.cursor > self.text.len() {
                return None;
            }

            let mat = self.pattern.find_at(&self.text, self.cursor)?;
            if mat.start() == mat.end() {
                // Empty matches would never advance the cursor; step one char.
                self.cursor = self.text[mat.end()..]
                    .chars()
                    .next()
                    .map_or(self.text.len() + 1, |c| mat.end() + c.len_utf8());
                continue;
            }

            self.cursor = mat.end();
            let token = Token::with_offsets(mat.as_str(), self.position, mat.start(), mat.end());
            self.position += 1;
            return Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_separators() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("In the beginning--God created_the heaven, 1:1.")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(
            tokens,
            vec!["In", "the", "beginning", "God", "created", "the", "heaven", "1", "1"]
        );
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let text = "one two three";

        let first: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();
        let second: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_and_separator_only_text() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize(" ,.;-- ").unwrap().count(), 0);
    }

    #[test]
    fn test_pattern_allowing_empty_matches_terminates() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]*").unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("ab, cd")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["ab", "cd"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
