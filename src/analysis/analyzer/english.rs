//! English normalization pipeline.
//!
//! Reduces raw text to a stream of stems:
//!
//! ```text
//! text → regex tokenizer → lowercase → stop words → [min length] → stemmer
//! ```
//!
//! The pipeline is stateless and lazy. Normalizing the same text twice yields
//! the same sequence, and no stem is computed before the caller pulls it.
//!
//! # Examples
//!
//! ```
//! use lexica::analysis::analyzer::EnglishAnalyzer;
//!
//! let analyzer = EnglishAnalyzer::new().unwrap();
//! let stems: Vec<String> = analyzer
//!     .normalize("The ponies were running to the caresses")
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(stems, vec!["poni", "were", "run", "caress"]);
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::MinLengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Tokenize, stop, and stem English text.
#[derive(Clone)]
pub struct EnglishAnalyzer {
    /// Tokenizer and case folding only.
    raw: PipelineAnalyzer,
    /// The full normalization chain.
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    /// Create the pipeline with the default configuration (Porter stemmer,
    /// built-in stop list, no length limit).
    pub fn new() -> Result<Self> {
        Self::from_config(&AnalysisConfig::default())
    }

    /// Create the pipeline described by `config`.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let lowercase = Arc::new(LowercaseFilter::new());

        let raw = PipelineAnalyzer::new(tokenizer.clone())
            .add_filter(lowercase.clone())
            .with_name("raw");

        let mut inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(lowercase)
            .add_filter(Arc::new(StopFilter::english_with(&config.extra_stop_words)));
        if config.min_token_length > 1 {
            inner = inner.add_filter(Arc::new(MinLengthFilter::new(config.min_token_length)));
        }
        let inner = inner
            .add_filter(Arc::new(StemFilter::with_stemmer(config.stemmer.build())))
            .with_name("english");

        debug!("built english analyzer: {inner:?}");
        Ok(Self { raw, inner })
    }

    /// Normalize `text` into its stem sequence.
    pub fn normalize(&self, text: &str) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(self.inner.analyze(text)?.map(|token| token.text))
    }

    /// Tokenize and case-fold `text` without stopping or stemming.
    pub fn raw_terms(&self, text: &str) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(self.raw.analyze(text)?.map(|token| token.text))
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
