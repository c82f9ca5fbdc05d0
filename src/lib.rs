//! Word-to-word translation probabilities from a parallel corpus, estimated
//! with the Expectation-Maximization algorithm for IBM Translation Model 1.
//!
//! A [`Corpus`] interns two line-aligned sentence files into dense word ids;
//! an [`AlignmentEstimator`] runs one uniform-prior pass and a fixed number
//! of E+M iterations over it; [`write_report`] emits the resulting
//! probability table as tab-separated lines.

mod corpus;
mod count_data;
mod errors;
mod estimator;
mod interner;
mod report;
mod types;


pub use corpus::{Corpus, SentencePair};
pub use count_data::ProbTable;
pub use errors::{AlignError, Result};
pub use estimator::{convergence_delta, AlignmentEstimator, ReportEntry};
pub use interner::Interner;
pub use report::write_report;
pub use types::{NullToken, WordId, DEFAULT_ITERATIONS, DEFAULT_THRESHOLD, NULL_LABEL};
