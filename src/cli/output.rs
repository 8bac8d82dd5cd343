//! Output formatting for CLI commands.
//!
//! Every command result is `Serialize` for JSON output and `Display` for
//! human output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexicaArgs, OutputFormat};
use crate::error::Result;
use crate::stats::{ComparativeSummary, CorpusReport, TermCount};

/// One Porter step that changed the word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepChange {
    pub step: String,
    pub word: String,
}

/// A word and its stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemEntry {
    pub word: String,
    pub stem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepChange>>,
}

/// Result structure for the stem command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResults {
    pub stemmer: String,
    pub entries: Vec<StemEntry>,
}

/// Result structure for the normalize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub input: String,
    pub token_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub reports: Vec<CorpusReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ComparativeSummary>,
}

/// Result structure for the count command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResult {
    pub input: String,
    pub total_words: u64,
    pub counts: Vec<TermCount>,
    /// Occurrences of all target words together.
    pub found: u64,
    /// `found` as a percentage of `total_words`.
    pub percentage: f64,
}

impl CountResult {
    /// Build a count result, deriving `found` and `percentage` from `counts`.
    pub fn new(input: String, total_words: u64, counts: Vec<TermCount>) -> Self {
        let found: u64 = counts.iter().map(|c| c.count).sum();
        let percentage = if total_words == 0 {
            0.0
        } else {
            found as f64 / total_words as f64 * 100.0
        };
        CountResult {
            input,
            total_words,
            counts,
            found,
            percentage,
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LexicaArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &LexicaArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexicaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl fmt::Display for StemResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.entries {
            writeln!(f, "{:<width$} -> {}", entry.word, entry.stem)?;
            for change in entry.steps.iter().flatten() {
                writeln!(f, "  step {:<3} {}", change.step, change.word)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for NormalizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.tokens, &self.output) {
            (Some(tokens), _) => writeln!(f, "{}", tokens.join(" ")),
            (None, Some(output)) => writeln!(
                f,
                "Wrote {} tokens from {} to {output}",
                self.token_count, self.input
            ),
            (None, None) => writeln!(f, "{} tokens in {}", self.token_count, self.input),
        }
    }
}

impl fmt::Display for CountResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word counts in {}:", self.input)?;
        writeln!(f, "═══════════════")?;
        writeln!(f, "Total words: {}", self.total_words)?;
        for count in &self.counts {
            writeln!(f, "  {}: {}", count.term, count.count)?;
        }
        writeln!(f, "Target words found: {}", self.found)?;
        writeln!(f, "Percentage of target words: {:.2}%", self.percentage)?;
        Ok(())
    }
}

impl fmt::Display for AnalysisResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            write_report(f, report)?;
            writeln!(f)?;
        }
        if let Some(summary) = &self.summary {
            write_summary(f, summary)?;
        }
        Ok(())
    }
}

fn write_report(f: &mut fmt::Formatter<'_>, report: &CorpusReport) -> fmt::Result {
    writeln!(f, "Corpus: {}", report.name)?;
    writeln!(f, "════════════════")?;
    writeln!(f, "Total tokens: {}", report.total_tokens)?;
    writeln!(f, "Unique terms: {}", report.unique_terms)?;
    writeln!(f, "Vocabulary ratio: {:.4}", report.vocabulary_ratio)?;

    writeln!(f)?;
    writeln!(f, "Top terms:")?;
    writeln!(f, "──────────")?;
    for (i, term) in report.top_terms.iter().enumerate() {
        writeln!(f, "{:>4}. {:<16} {}", i + 1, term.term, term.count)?;
    }

    writeln!(f)?;
    writeln!(f, "Zipf's law:")?;
    writeln!(f, "───────────")?;
    writeln!(
        f,
        "alpha = {:.4}, k = {:.2}, R² = {:.4}",
        report.zipf.alpha, report.zipf.k, report.zipf.r_squared
    )?;
    writeln!(f, "{:>6} {:>10} {:>12} {:>8}", "rank", "observed", "f1/r", "ratio")?;
    for c in &report.zipf_checkpoints {
        writeln!(
            f,
            "{:>6} {:>10} {:>12.1} {:>8.3}",
            c.rank, c.observed, c.predicted, c.ratio
        )?;
    }

    writeln!(f)?;
    writeln!(f, "Benford's law:")?;
    writeln!(f, "──────────────")?;
    let benford = &report.benford;
    let all = benford.all.proportions();
    let filtered = benford.filtered.proportions();
    writeln!(
        f,
        "{:>5} {:>10} {:>10} {:>10}",
        "digit",
        "all",
        format!(">={}", benford.threshold),
        "expected"
    )?;
    for d in 0..9 {
        writeln!(
            f,
            "{:>5} {:>10.4} {:>10.4} {:>10.4}",
            d + 1,
            all[d],
            filtered[d],
            benford.expected[d]
        )?;
    }
    writeln!(
        f,
        "max deviation: {:.4} (all), {:.4} (filtered, {} values)",
        benford.all.max_deviation(),
        benford.filtered.max_deviation(),
        benford.filtered.total
    )?;

    writeln!(f)?;
    writeln!(f, "Heap's law:")?;
    writeln!(f, "───────────")?;
    writeln!(
        f,
        "k = {:.3}, b = {:.4}, R² = {:.4} ({} samples)",
        report.heaps.k,
        report.heaps.b,
        report.heaps.r_squared,
        report.heaps.samples.len()
    )?;

    writeln!(f)?;
    writeln!(f, "Frequency spectrum (lowest counts):")?;
    writeln!(f, "───────────────────")?;
    for (count, terms) in report.spectrum.iter().take(10) {
        writeln!(f, "{count:>6} occurrence(s): {terms} terms")?;
    }
    Ok(())
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &ComparativeSummary) -> fmt::Result {
    writeln!(f, "Comparative summary:")?;
    writeln!(f, "════════════════════")?;
    writeln!(
        f,
        "{:<16} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "corpus", "tokens", "unique", "alpha", "heap k", "heap b"
    )?;
    for row in &summary.rows {
        writeln!(
            f,
            "{:<16} {:>10} {:>10} {:>8.3} {:>8.3} {:>8.3}",
            row.name, row.total_tokens, row.unique_terms, row.zipf_alpha, row.heaps_k, row.heaps_b
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_results_display() {
        let results = StemResults {
            stemmer: "porter".to_string(),
            entries: vec![
                StemEntry {
                    word: "ponies".to_string(),
                    stem: "poni".to_string(),
                    steps: Some(vec![StepChange {
                        step: "1a".to_string(),
                        word: "poni".to_string(),
                    }]),
                },
                StemEntry {
                    word: "sky".to_string(),
                    stem: "sky".to_string(),
                    steps: None,
                },
            ],
        };

        let text = results.to_string();
        assert!(text.contains("ponies -> poni"));
        assert!(text.contains("step 1a"));
        assert!(text.contains("sky    -> sky"));
    }

    #[test]
    fn test_count_result_totals_target_words() {
        let result = CountResult::new(
            "genesis.txt".to_string(),
            200,
            vec![TermCount::new("god", 6), TermCount::new("light", 5), TermCount::new("moon", 0)],
        );

        assert_eq!(result.found, 11);
        assert!((result.percentage - 5.5).abs() < 1e-9);

        let text = result.to_string();
        assert!(text.contains("Target words found: 11"));
        assert!(text.contains("Percentage of target words: 5.50%"));
    }

    #[test]
    fn test_count_result_with_empty_corpus() {
        let result = CountResult::new("empty.txt".to_string(), 0, vec![TermCount::new("god", 0)]);
        assert_eq!(result.found, 0);
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_stem_entry_json_omits_missing_steps() {
        let entry = StemEntry {
            word: "sky".to_string(),
            stem: "sky".to_string(),
            steps: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"word":"sky","stem":"sky"}"#);
    }

    #[test]
    fn test_count_result_display() {
        let result = CountResult::new(
            "bible.txt".to_string(),
            12,
            vec![TermCount::new("god", 3), TermCount::new("jesus", 0)],
        );

        let text = result.to_string();
        assert!(text.contains("Total words: 12"));
        assert!(text.contains("  god: 3"));
        assert!(text.contains("  jesus: 0"));
    }
}
