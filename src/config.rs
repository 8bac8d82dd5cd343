//! Configuration for corpus analysis.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::{IdentityStemmer, PorterStemmer, SimpleStemmer, Stemmer};
use crate::error::{LexicaError, Result};

/// Which stemmer the normalization pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Porter's five-step suffix stripper.
    #[default]
    Porter,
    /// Plural rule plus one common suffix.
    Simple,
    /// Case folding only.
    None,
}

impl StemmerKind {
    /// Build the stemmer this kind names.
    pub fn build(self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::Simple => Arc::new(SimpleStemmer::new()),
            StemmerKind::None => Arc::new(IdentityStemmer::new()),
        }
    }
}

/// Which token stream the vocabulary growth analysis scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthSource {
    /// The normalized stems (stop words removed, stemmed).
    #[default]
    Normalized,
    /// The raw case-folded tokenizer output.
    Raw,
}

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Stemmer applied after stop word removal.
    pub stemmer: StemmerKind,

    /// Tokens with fewer characters are dropped. 0 keeps everything.
    pub min_token_length: usize,

    /// Words added to the built-in English stop list.
    pub extra_stop_words: Vec<String>,

    /// Token stream used for Heap's law.
    pub growth_source: GrowthSource,

    /// Take a vocabulary sample every this many tokens.
    pub heaps_sample_interval: usize,

    /// Frequencies below this are left out of the filtered Benford table.
    pub benford_threshold: u64,

    /// Number of most frequent terms kept in the report.
    pub top_terms: usize,

    /// Ranks at which observed and predicted Zipf frequencies are compared.
    pub zipf_checkpoints: Vec<usize>,

    /// Only read this many lines of each corpus.
    pub max_lines: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stemmer: StemmerKind::Porter,
            min_token_length: 0,
            extra_stop_words: Vec::new(),
            growth_source: GrowthSource::Normalized,
            heaps_sample_interval: 1000,
            benford_threshold: 10,
            top_terms: 10,
            zipf_checkpoints: vec![1, 5, 10, 50, 100],
            max_lines: None,
        }
    }
}

impl AnalysisConfig {
    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no analysis can run with.
    pub fn validate(&self) -> Result<()> {
        if self.heaps_sample_interval == 0 {
            return Err(LexicaError::config(
                "heaps_sample_interval must be greater than 0",
            ));
        }
        if self.zipf_checkpoints.is_empty() {
            return Err(LexicaError::config("zipf_checkpoints must not be empty"));
        }
        if self.zipf_checkpoints.contains(&0) {
            return Err(LexicaError::config("zipf_checkpoints are 1-based ranks"));
        }
        if self.max_lines == Some(0) {
            return Err(LexicaError::config("max_lines must be greater than 0"));
        }
        Ok(())
    }

    /// Set the stemmer.
    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    /// Add words to the stop list.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stop_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the token stream used for vocabulary growth.
    pub fn with_growth_source(mut self, source: GrowthSource) -> Self {
        self.growth_source = source;
        self
    }

    /// Set the vocabulary growth sampling interval.
    pub fn with_heaps_sample_interval(mut self, interval: usize) -> Self {
        self.heaps_sample_interval = interval;
        self
    }

    /// Set the number of top terms reported.
    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    /// Set the per-corpus line limit.
    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }
}
