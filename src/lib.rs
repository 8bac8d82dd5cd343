//! # Lexica
//!
//! Lexical normalization and corpus statistics for English text.
//!
//! Raw text is tokenized, stop words are dropped and every remaining token
//! is reduced to its Porter stem. The resulting term frequencies are then
//! compared against three classical laws:
//!
//! - Zipf: rank-frequency fit in log-log space
//! - Benford: leading-digit distribution of the frequencies
//! - Heap: vocabulary growth against token count
//!
//! ```
//! use lexica::analysis::analyzer::EnglishAnalyzer;
//! use lexica::stats::FrequencyTable;
//!
//! let analyzer = EnglishAnalyzer::new().unwrap();
//! let table: FrequencyTable = analyzer
//!     .normalize("Connected connections connect the connecting wires")
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(table.get("connect"), 4);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod stats;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
