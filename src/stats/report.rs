//! Per-corpus statistics report and multi-corpus comparison.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::EnglishAnalyzer;
use crate::config::{AnalysisConfig, GrowthSource};
use crate::corpus::read_corpus;
use crate::error::Result;
use crate::stats::benford::{BenfordAnalysis, analyze_benford};
use crate::stats::frequency::{FrequencyTable, TermCount};
use crate::stats::heaps::{HeapsFit, analyze_heaps};
use crate::stats::zipf::{ZipfCheckpoint, ZipfFit, fit_zipf};

/// Everything computed for one corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub name: String,
    pub total_tokens: u64,
    pub unique_terms: usize,
    pub vocabulary_ratio: f64,
    pub top_terms: Vec<TermCount>,
    pub zipf: ZipfFit,
    pub zipf_checkpoints: Vec<ZipfCheckpoint>,
    pub benford: BenfordAnalysis,
    pub heaps: HeapsFit,
    /// Term count → number of terms with that count.
    pub spectrum: BTreeMap<u64, usize>,
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub name: String,
    pub total_tokens: u64,
    pub unique_terms: usize,
    pub zipf_alpha: f64,
    pub heaps_k: f64,
    pub heaps_b: f64,
}

/// Key figures of several corpora side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparativeSummary {
    pub rows: Vec<SummaryRow>,
}

impl ComparativeSummary {
    pub fn from_reports(reports: &[CorpusReport]) -> Self {
        let rows = reports
            .iter()
            .map(|r| SummaryRow {
                name: r.name.clone(),
                total_tokens: r.total_tokens,
                unique_terms: r.unique_terms,
                zipf_alpha: r.zipf.alpha,
                heaps_k: r.heaps.k,
                heaps_b: r.heaps.b,
            })
            .collect();
        ComparativeSummary { rows }
    }
}

/// Runs the normalization pipeline and the three law analyzers.
#[derive(Debug, Clone)]
pub struct CorpusAnalyzer {
    config: AnalysisConfig,
    analyzer: EnglishAnalyzer,
}

impl CorpusAnalyzer {
    /// Create an analyzer for a validated configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = EnglishAnalyzer::from_config(&config)?;
        Ok(CorpusAnalyzer { config, analyzer })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The normalization pipeline in use.
    pub fn analyzer(&self) -> &EnglishAnalyzer {
        &self.analyzer
    }

    /// Analyze one corpus body.
    ///
    /// # Errors
    ///
    /// Fails with [`LexicaError::Stats`](crate::error::LexicaError::Stats)
    /// when the text is too small to fit a law to.
    pub fn analyze_text(&self, name: &str, text: &str) -> Result<CorpusReport> {
        let stems: Vec<String> = self.analyzer.normalize(text)?.collect();
        let table = FrequencyTable::build(&stems);
        debug!(
            "{name}: {} tokens, {} unique terms",
            table.total_tokens(),
            table.unique_terms()
        );

        let growth_tokens = match self.config.growth_source {
            GrowthSource::Normalized => stems,
            GrowthSource::Raw => self.analyzer.raw_terms(text)?.collect(),
        };
        let frequencies = table.frequencies();

        let (zipf, (benford, heaps)) = rayon::join(
            || fit_zipf(&frequencies),
            || {
                rayon::join(
                    || analyze_benford(&frequencies, self.config.benford_threshold),
                    || analyze_heaps(&growth_tokens, self.config.heaps_sample_interval),
                )
            },
        );
        let zipf = zipf?;

        Ok(CorpusReport {
            name: name.to_string(),
            total_tokens: table.total_tokens(),
            unique_terms: table.unique_terms(),
            vocabulary_ratio: table.vocabulary_ratio(),
            top_terms: table.top(self.config.top_terms),
            zipf_checkpoints: zipf.checkpoints(&self.config.zipf_checkpoints),
            zipf,
            benford: benford?,
            heaps: heaps?,
            spectrum: table.spectrum(),
        })
    }

    /// Read and analyze one corpus file.
    pub fn analyze_file<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<CorpusReport> {
        let text = read_corpus(path, self.config.max_lines)?;
        self.analyze_text(name, &text)
    }

    /// Analyze several corpus files in parallel.
    ///
    /// Files that cannot be read or analyzed are skipped with a warning.
    /// Reports keep the input order.
    pub fn analyze_files(&self, corpora: &[(String, PathBuf)]) -> Vec<CorpusReport> {
        let reports: Vec<CorpusReport> = corpora
            .par_iter()
            .filter_map(|(name, path)| match self.analyze_file(name, path) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("skipping {name} ({}): {e}", path.display());
                    None
                }
            })
            .collect();
        info!("analyzed {} of {} corpora", reports.len(), corpora.len());
        reports
    }
}
