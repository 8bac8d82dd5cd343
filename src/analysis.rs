//! Text analysis: tokenization, filtering, and normalization pipelines.
//!
//! Raw text becomes a lazy [`token::TokenStream`] through a
//! [`tokenizer::Tokenizer`], is rewritten by a chain of
//! [`token_filter::Filter`]s, and the two are bundled by an
//! [`analyzer::Analyzer`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
