use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{AlignError, Result};
use crate::interner::Interner;
use crate::types::{WordId, NULL_SENTINEL};

/// One line-aligned sentence pair, both sides as interned word ids. The NULL
/// pseudo-token is not stored here; the estimator prepends it when enabled.
pub struct SentencePair {
    pub source: Vec<WordId>,
    pub target: Vec<WordId>,
}

/// A parallel corpus plus the two vocabularies it was interned against.
pub struct Corpus {
    pairs: Vec<SentencePair>,
    source_vocab: Interner,
    target_vocab: Interner,
    truncated_lines: usize,
}

impl Corpus {
    /// Reads two sentence files in lockstep: line `i` of `source` pairs with
    /// line `i` of `target`. If one file is longer, the unpaired trailing
    /// lines are dropped and counted in [`Corpus::truncated_line_count`].
    pub fn from_files(source: &Path, target: &Path) -> Result<Self> {
        Self::build(read_lines(source)?, read_lines(target)?)
    }

    pub fn from_lines(source: &str, target: &str) -> Result<Self> {
        Self::build(
            source.lines().map(str::to_string).collect(),
            target.lines().map(str::to_string).collect(),
        )
    }

    fn build(source_lines: Vec<String>, target_lines: Vec<String>) -> Result<Self> {
        let paired = source_lines.len().min(target_lines.len());
        let truncated_lines = source_lines.len().max(target_lines.len()) - paired;

        let source_tokens = tokenize_lines(&source_lines[..paired]);
        let target_tokens = tokenize_lines(&target_lines[..paired]);

        let (source_vocab, source_ids) =
            Interner::from_sentences(&source_tokens, &[NULL_SENTINEL])?;
        let (target_vocab, target_ids) = Interner::from_sentences(&target_tokens, &[])?;

        let pairs = source_ids
            .into_iter()
            .zip(target_ids)
            .map(|(source, target)| SentencePair { source, target })
            .collect();

        Ok(Self {
            pairs,
            source_vocab,
            target_vocab,
            truncated_lines,
        })
    }

    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    pub fn source_vocab(&self) -> &Interner {
        &self.source_vocab
    }

    pub fn target_vocab(&self) -> &Interner {
        &self.target_vocab
    }

    /// Unpaired trailing lines dropped because the input streams differed in
    /// length. Truncation is a resolution, not an error.
    pub fn truncated_line_count(&self) -> usize {
        self.truncated_lines
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn tokenize_lines(lines: &[String]) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| AlignError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line.map_err(|source| AlignError::Io {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(lines)
}
