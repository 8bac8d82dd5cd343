//! Command implementations for the lexica CLI.

use std::path::PathBuf;

use log::{debug, info};

use crate::analysis::analyzer::EnglishAnalyzer;
use crate::analysis::token_filter::stem::PorterStemmer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AnalysisConfig, StemmerKind};
use crate::corpus::{read_corpus, write_tokens};
use crate::error::{LexicaError, Result};
use crate::stats::{ComparativeSummary, CorpusAnalyzer, FrequencyTable};

/// Execute a CLI command.
pub fn execute_command(args: LexicaArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args, &config, &args),
        Command::Normalize(normalize_args) => normalize_corpus(normalize_args, &config, &args),
        Command::Analyze(analyze_args) => analyze_corpora(analyze_args, config, &args),
        Command::Count(count_args) => count_words(count_args, &config, &args),
    }
}

/// Build the analysis configuration from the config file and global flags.
pub fn load_config(args: &LexicaArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            AnalysisConfig::from_file(path)?
        }
        None => AnalysisConfig::default(),
    };
    if let Some(stemmer) = args.stemmer {
        config = config.with_stemmer(stemmer);
    }
    Ok(config)
}

/// Stem each word given on the command line.
fn stem_words(args: &StemArgs, config: &AnalysisConfig, cli_args: &LexicaArgs) -> Result<()> {
    if args.trace && config.stemmer != StemmerKind::Porter {
        return Err(LexicaError::invalid_argument(
            "--trace is only available for the porter stemmer",
        ));
    }

    let stemmer = config.stemmer.build();
    let porter = PorterStemmer::new();
    let entries = args
        .words
        .iter()
        .map(|word| StemEntry {
            word: word.clone(),
            stem: stemmer.stem(word),
            steps: args.trace.then(|| {
                porter
                    .trace(word)
                    .into_iter()
                    .map(|(step, word)| StepChange {
                        step: step.to_string(),
                        word,
                    })
                    .collect()
            }),
        })
        .collect();

    output_result(
        "Stems",
        &StemResults {
            stemmer: stemmer.name().to_string(),
            entries,
        },
        cli_args,
    )
}

/// Normalize a corpus and print or write the tokens.
fn normalize_corpus(
    args: &NormalizeArgs,
    config: &AnalysisConfig,
    cli_args: &LexicaArgs,
) -> Result<()> {
    let text = read_corpus(&args.input, config.max_lines)?;
    let analyzer = EnglishAnalyzer::from_config(config)?;
    let tokens = analyzer.normalize(&text)?;

    let result = match &args.output {
        Some(output) => {
            let token_count = write_tokens(output, tokens)?;
            info!("wrote {token_count} tokens to {}", output.display());
            NormalizeResult {
                input: args.input.display().to_string(),
                token_count,
                output: Some(output.display().to_string()),
                tokens: None,
            }
        }
        None => {
            let tokens: Vec<String> = tokens.collect();
            NormalizeResult {
                input: args.input.display().to_string(),
                token_count: tokens.len(),
                output: None,
                tokens: Some(tokens),
            }
        }
    };

    output_result("Normalized tokens", &result, cli_args)
}

/// Analyze every corpus and print the reports and comparison.
fn analyze_corpora(
    args: &AnalyzeArgs,
    mut config: AnalysisConfig,
    cli_args: &LexicaArgs,
) -> Result<()> {
    if let Some(top) = args.top {
        config = config.with_top_terms(top);
    }
    if args.max_lines.is_some() {
        config = config.with_max_lines(args.max_lines);
    }

    let analyzer = CorpusAnalyzer::new(config)?;
    let corpora: Vec<(String, PathBuf)> = args
        .corpora
        .iter()
        .map(|c| (c.name.clone(), c.path.clone()))
        .collect();

    let reports = analyzer.analyze_files(&corpora);
    if reports.is_empty() {
        return Err(LexicaError::other("no corpus could be analyzed"));
    }

    let summary = (!args.no_summary && reports.len() > 1)
        .then(|| ComparativeSummary::from_reports(&reports));

    output_result(
        "Corpus analysis",
        &AnalysisResults { reports, summary },
        cli_args,
    )
}

/// Count target words in the raw tokenized text.
fn count_words(args: &CountArgs, config: &AnalysisConfig, cli_args: &LexicaArgs) -> Result<()> {
    let text = read_corpus(&args.input, config.max_lines)?;
    let analyzer = EnglishAnalyzer::from_config(config)?;
    let table = FrequencyTable::build(analyzer.raw_terms(&text)?);

    let targets: Vec<String> = args.words.iter().map(|w| w.trim().to_lowercase()).collect();

    output_result(
        "Word counts",
        &CountResult::new(
            args.input.display().to_string(),
            table.total_tokens(),
            table.counts_for(&targets),
        ),
        cli_args,
    )
}
