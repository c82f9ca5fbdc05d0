use smallvec::SmallVec;

use crate::corpus::{Corpus, SentencePair};
use crate::count_data::{PairCounts, ProbTable};
use crate::errors::{AlignError, Result};
use crate::types::{NullToken, WordId, INIT_PSEUDO_COUNT, NULL_ID, NULL_LABEL};

type SourceBuf = SmallVec<[WordId; 24]>;
type ProbBuf = SmallVec<[f64; 24]>;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportEntry {
    pub source: String,
    pub target: String,
    pub probability: f64,
}

/// Owns all probability and count tables for IBM Model 1 EM training.
///
/// The caller drives a fixed number of iterations: one [`initialize`] pass,
/// then [`step`] repeatedly over the same corpus. Counts are zeroed (keys
/// preserved) at the start of every pass; the model produced by the previous
/// pass is read in full before the next one replaces it.
///
/// [`initialize`]: AlignmentEstimator::initialize
/// [`step`]: AlignmentEstimator::step
pub struct AlignmentEstimator {
    pub(crate) null_token: NullToken,
    pub(crate) counts: PairCounts,
    pub(crate) model: ProbTable,
}

impl AlignmentEstimator {
    pub fn new(corpus: &Corpus, null_token: NullToken) -> Self {
        Self {
            null_token,
            counts: PairCounts::with_source_capacity(corpus.source_vocab().len()),
            model: ProbTable::default(),
        }
    }

    fn source_ids(&self, pair: &SentencePair) -> SourceBuf {
        let mut ids = SourceBuf::with_capacity(pair.source.len() + 1);
        if self.null_token == NullToken::Enabled {
            ids.push(NULL_ID);
        }
        ids.extend_from_slice(&pair.source);
        ids
    }

    /// First EM pass: every co-occurring (source, target) pair in a sentence
    /// receives the fixed pseudo-count standing in for a uniform prior over
    /// alignments, then the counts are normalized into the initial model.
    ///
    /// A pair whose source side (after optional NULL prefixing) or target
    /// side is empty contributes nothing; [`step`](AlignmentEstimator::step)
    /// skips the same pairs so the table key sets stay consistent.
    pub fn initialize(&mut self, corpus: &Corpus) -> &ProbTable {
        self.counts.reset();

        for pair in corpus.pairs() {
            let source = self.source_ids(pair);
            if source.is_empty() || pair.target.is_empty() {
                continue;
            }

            let pseudo = INIT_PSEUDO_COUNT / (INIT_PSEUDO_COUNT * source.len() as f64);
            for &s in &source {
                for &t in &pair.target {
                    self.counts.add(s, t, pseudo);
                }
            }
        }

        self.model = ProbTable::from_counts(&self.counts);
        &self.model
    }

    /// One full E+M iteration over the corpus.
    ///
    /// E-step: for every target token, each source token in the same
    /// sentence receives the responsibility `p(s, t) / sum over the
    /// sentence's source tokens of p(s', t)`; every token position counts,
    /// including repeats. M-step: accumulated responsibilities are
    /// normalized into a fresh model which replaces the previous one.
    ///
    /// A cell lookup miss or a non-positive denominator means the model and
    /// corpus are out of sync (e.g. a corpus other than the one used for
    /// [`initialize`](AlignmentEstimator::initialize)) and aborts the run.
    pub fn step(&mut self, corpus: &Corpus) -> Result<&ProbTable> {
        self.counts.reset();

        let mut probs = ProbBuf::new();
        for pair in corpus.pairs() {
            let source = self.source_ids(pair);
            if source.is_empty() || pair.target.is_empty() {
                continue;
            }

            for &t in &pair.target {
                probs.clear();
                let mut denominator = 0.0;
                for &s in &source {
                    let p = self.model.get(s, t).ok_or_else(|| missing_cell(s, t))?;
                    denominator += p;
                    probs.push(p);
                }
                if !denominator.is_finite() || denominator <= 0.0 {
                    return Err(AlignError::InternalConsistency(format!(
                        "alignment mass {denominator} for target word {t} over {} source words",
                        source.len()
                    )));
                }

                for (&s, &p) in source.iter().zip(probs.iter()) {
                    self.counts.add(s, t, p / denominator);
                }
            }
        }

        self.model = ProbTable::from_counts(&self.counts);
        Ok(&self.model)
    }

    pub fn current_model(&self) -> &ProbTable {
        &self.model
    }

    /// All cells with `probability >= threshold`, rendered back to strings
    /// and ordered by source word, then target word. The NULL pseudo-token
    /// renders as the literal `NULL`.
    pub fn report(&self, corpus: &Corpus, threshold: f64) -> Vec<ReportEntry> {
        let mut entries = self
            .model
            .cells()
            .filter(|&(_, _, probability)| probability >= threshold)
            .map(|(s, t, probability)| ReportEntry {
                source: render_source(corpus, s),
                target: corpus.target_vocab().resolve(t).to_string(),
                probability,
            })
            .collect::<Vec<_>>();

        entries.sort_unstable_by(|a, b| {
            a.source
                .cmp(&b.source)
                .then_with(|| a.target.cmp(&b.target))
        });
        entries
    }
}

fn render_source(corpus: &Corpus, source: WordId) -> String {
    if source == NULL_ID {
        NULL_LABEL.to_string()
    } else {
        corpus.source_vocab().resolve(source).to_string()
    }
}

fn missing_cell(source: WordId, target: WordId) -> AlignError {
    AlignError::InternalConsistency(format!(
        "no translation probability for pair ({source}, {target}); the pair never co-occurred in training"
    ))
}

/// Signed sum of per-cell movement between two model snapshots, over the
/// cells present in `current`. Opposite movements cancel, so the sum can
/// approach zero while individual cells still shift; treat it as a coarse
/// progress signal, not a convergence bound.
pub fn convergence_delta(previous: &ProbTable, current: &ProbTable) -> f64 {
    current
        .cells()
        .map(|(s, t, p)| p - previous.get(s, t).unwrap_or(0.0))
        .sum()
}
