use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ctc_eval_rs::{edit_details_for_batch, BatchScore, Utterance};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "per_report")]
#[command(about = "Score decoded hypotheses against references and report pooled PER")]
struct Args {
    /// JSON file: array of {"id", "reference", "hypothesis"} rows with integer tokens.
    #[arg(long)]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Deserialize)]
struct ScoredRow {
    id: String,
    reference: Vec<usize>,
    hypothesis: Vec<usize>,
}

#[derive(Debug, serde::Serialize)]
struct UtteranceReport {
    id: String,
    insertions: usize,
    deletions: usize,
    substitutions: usize,
    ref_len: usize,
    error_rate: Option<f64>,
}

#[derive(Debug, serde::Serialize)]
struct PooledReport {
    utterances: Vec<UtteranceReport>,
    insertions: usize,
    deletions: usize,
    substitutions: usize,
    ref_len: usize,
    skipped_empty_references: usize,
    error_rate: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("per_report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let data = std::fs::read_to_string(&args.input)
        .map_err(|e| format!("read {}: {e}", args.input.display()))?;
    let rows: Vec<ScoredRow> =
        serde_json::from_str(&data).map_err(|e| format!("parse {}: {e}", args.input.display()))?;

    let refs: Vec<Utterance> = rows
        .iter()
        .map(|r| Utterance::new(r.id.clone(), r.reference.clone()))
        .collect();
    let hyps: Vec<Utterance> = rows
        .iter()
        .map(|r| Utterance::new(r.id.clone(), r.hypothesis.clone()))
        .collect();

    let score = edit_details_for_batch(&refs, &hyps).map_err(|e| e.to_string())?;
    let report = build_report(&score);

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
            println!("{out}");
        }
        OutputFormat::Text => print_text_report(&report),
    }
    Ok(())
}

fn build_report(score: &BatchScore) -> PooledReport {
    let (counts, ref_len) = score.pooled();
    PooledReport {
        utterances: score
            .utterances
            .iter()
            .map(|s| UtteranceReport {
                id: s.id.clone(),
                insertions: s.counts.insertions,
                deletions: s.counts.deletions,
                substitutions: s.counts.substitutions,
                ref_len: s.ref_len,
                error_rate: s.error_rate(),
            })
            .collect(),
        insertions: counts.insertions,
        deletions: counts.deletions,
        substitutions: counts.substitutions,
        ref_len,
        skipped_empty_references: score.skipped(),
        error_rate: score.error_rate(),
    }
}

fn print_text_report(report: &PooledReport) {
    println!("{:<20} {:>4} {:>4} {:>4} {:>8} {:>8}", "id", "ins", "del", "sub", "ref_len", "rate");
    for u in &report.utterances {
        let rate = u
            .error_rate
            .map(|r| format!("{r:.4}"))
            .unwrap_or_else(|| "undef".to_string());
        println!(
            "{:<20} {:>4} {:>4} {:>4} {:>8} {:>8}",
            u.id, u.insertions, u.deletions, u.substitutions, u.ref_len, rate
        );
    }
    println!();
    match report.error_rate {
        Some(rate) => println!(
            "pooled PER: {:.4} ({} edits / {} reference tokens)",
            rate,
            report.insertions + report.deletions + report.substitutions,
            report.ref_len
        ),
        None => println!("pooled PER: undefined (no non-empty references)"),
    }
    if report.skipped_empty_references > 0 {
        println!(
            "skipped {} empty-reference utterance(s) in the pool",
            report.skipped_empty_references
        );
    }
}
