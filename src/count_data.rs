use crate::types::WordId;
use rustc_hash::FxHashMap;

/// Expected-count accumulator for one EM pass: a sparse (target -> count)
/// row per source id plus the per-source marginal that normalization divides
/// by. Both are written together so the marginal always equals its row sum.
#[derive(Clone, Default)]
pub(crate) struct PairCounts {
    rows: Vec<FxHashMap<WordId, f64>>,
    marginals: Vec<f64>,
}

impl PairCounts {
    pub(crate) fn with_source_capacity(source_vocab_len: usize) -> Self {
        Self {
            rows: vec![FxHashMap::default(); source_vocab_len],
            marginals: vec![0.0; source_vocab_len],
        }
    }

    pub(crate) fn add(&mut self, source: WordId, target: WordId, delta: f64) {
        *self.rows[source as usize].entry(target).or_insert(0.0) += delta;
        self.marginals[source as usize] += delta;
    }

    /// Zeroes every accumulated value while keeping the cell key sets
    /// intact, so the model's vocabulary never shrinks across iterations.
    pub(crate) fn reset(&mut self) {
        for row in &mut self.rows {
            for count in row.values_mut() {
                *count = 0.0;
            }
        }
        for marginal in &mut self.marginals {
            *marginal = 0.0;
        }
    }
}

/// Current translation-probability estimate: `rows[s][t]` is p(t | s) over
/// the target words observed paired with `s` anywhere in the corpus.
#[derive(Clone, Default)]
pub struct ProbTable {
    rows: Vec<FxHashMap<WordId, f64>>,
}

impl ProbTable {
    /// M-step normalization: `p(t | s) = pair_count(s, t) / marginal(s)`.
    /// A source id with no accumulated pairs keeps an empty row, so the
    /// marginal is never queried at zero. Re-deriving from the same counts
    /// yields identical values.
    pub(crate) fn from_counts(counts: &PairCounts) -> Self {
        let rows = counts
            .rows
            .iter()
            .zip(&counts.marginals)
            .map(|(row, marginal)| {
                row.iter()
                    .map(|(&target, &count)| (target, count / marginal))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn get(&self, source: WordId, target: WordId) -> Option<f64> {
        self.rows.get(source as usize)?.get(&target).copied()
    }

    /// All populated (source, target, probability) cells, in unspecified
    /// order.
    pub fn cells(&self) -> impl Iterator<Item = (WordId, WordId, f64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(source, row)| {
            row.iter()
                .map(move |(&target, &prob)| (source as WordId, target, prob))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(FxHashMap::is_empty)
    }
}
