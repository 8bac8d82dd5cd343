//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum number of characters.
///
/// A minimum of 0 or 1 keeps every non-empty token.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens with at least `min_length` chars.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        Ok(Box::new(tokens.filter(move |token| {
            !token.is_empty() && token.char_len() >= min_length
        })))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::new(3);
        let tokens = vec![
            Token::new("go", 0),
            Token::new("run", 1),
            Token::new("a", 2),
            Token::new("über", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "über");
    }

    #[test]
    fn test_zero_keeps_everything_but_empty() {
        let filter = MinLengthFilter::new(0);
        let tokens = vec![Token::new("", 0), Token::new("a", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "a");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::new(3).name(), "min_length");
    }
}
