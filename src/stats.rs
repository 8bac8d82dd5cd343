//! Term statistics: frequency table, least-squares fitting and the Zipf,
//! Benford and Heap analyzers.
//!
//! All functions are pure. The three law analyzers only read the frequency
//! table and token stream they are given, so they can run concurrently.

pub mod benford;
pub mod frequency;
pub mod heaps;
pub mod regression;
pub mod report;
pub mod zipf;

pub use benford::{BenfordAnalysis, DigitCounts, analyze_benford};
pub use frequency::{FrequencyTable, TermCount};
pub use heaps::{GrowthPoint, HeapsFit, VocabularyGrowth, analyze_heaps, fit_heaps};
pub use regression::{LinearFit, fit_line};
pub use report::{ComparativeSummary, CorpusAnalyzer, CorpusReport, SummaryRow};
pub use zipf::{ZipfCheckpoint, ZipfFit, fit_zipf};
