use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pairalign::{
    convergence_delta, write_report, AlignError, AlignmentEstimator, Corpus, NullToken,
    DEFAULT_ITERATIONS, DEFAULT_THRESHOLD,
};

/// Estimates word-to-word translation probabilities from a line-aligned
/// parallel corpus using EM over IBM Translation Model 1.
#[derive(Parser, Debug)]
#[command(name = "pairalign", version)]
struct Cli {
    /// Source-language sentence file, one sentence per line
    #[arg(long, short = 's')]
    source: PathBuf,

    /// Target-language sentence file, line-aligned with --source
    #[arg(long, short = 't')]
    target: PathBuf,

    /// Total EM iterations, counting the uniform-prior first pass
    #[arg(long, short = 'i', default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Minimum probability for a pair to appear in the report
    #[arg(long, short = 'p', default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Train without the NULL source pseudo-token
    #[arg(long)]
    no_null: bool,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Print the signed model delta after each iteration to stderr
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> pairalign::Result<()> {
    let corpus = Corpus::from_files(&cli.source, &cli.target)?;
    if corpus.truncated_line_count() > 0 {
        eprintln!(
            "warning: input files differ in length; dropped {} unpaired trailing line(s)",
            corpus.truncated_line_count()
        );
    }

    let null_token = if cli.no_null {
        NullToken::Disabled
    } else {
        NullToken::Enabled
    };
    let mut estimator = AlignmentEstimator::new(&corpus, null_token);

    estimator.initialize(&corpus);
    for iteration in 1..cli.iterations {
        if cli.trace {
            // The delta needs a snapshot of the pre-step model.
            let previous = estimator.current_model().clone();
            estimator.step(&corpus)?;
            let delta = convergence_delta(&previous, estimator.current_model());
            eprintln!("iter {iteration}: delta = {delta}");
        } else {
            estimator.step(&corpus)?;
        }
    }

    let entries = estimator.report(&corpus, cli.threshold);
    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| AlignError::Io {
                path: path.clone(),
                source,
            })?;
            write_report(&mut BufWriter::new(file), &entries)
        }
        None => {
            let stdout = io::stdout();
            write_report(&mut BufWriter::new(stdout.lock()), &entries)
        }
    }
}
