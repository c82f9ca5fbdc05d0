use crate::errors::{AlignError, Result};
use crate::types::WordId;
use rustc_hash::{FxHashMap, FxHashSet};

pub(crate) fn validate_vocabulary_size(vocab_size: usize) -> Result<()> {
    let capacity = (WordId::MAX as usize).saturating_add(1);
    if vocab_size > capacity {
        return Err(AlignError::VocabularyOverflow);
    }
    Ok(())
}

/// One language side's string <-> id dictionary. Ids are dense and assigned
/// in lexicographic token order, after any reserved sentinels.
#[derive(Default)]
pub struct Interner {
    str_to_id: FxHashMap<String, WordId>,
    id_to_str: Vec<String>,
}

impl Interner {
    pub(crate) fn from_sentences(
        sentences: &[Vec<String>],
        reserved: &[&str],
    ) -> Result<(Self, Vec<Vec<WordId>>)> {
        let mut uniq = FxHashSet::default();
        for tokens in sentences {
            uniq.extend(tokens.iter().cloned());
        }

        let mut sorted = uniq.into_iter().collect::<Vec<_>>();
        sorted.sort_unstable();
        validate_vocabulary_size(sorted.len().saturating_add(reserved.len()))?;

        let mut interner = Self::default();
        interner.str_to_id.reserve(sorted.len() + reserved.len());
        interner.id_to_str.reserve(sorted.len() + reserved.len());
        for token in reserved {
            interner.push(token.to_string());
        }
        for token in sorted {
            if !interner.str_to_id.contains_key(&token) {
                interner.push(token);
            }
        }

        let sentence_ids = sentences
            .iter()
            .map(|tokens| tokens.iter().map(|token| interner.id_for(token)).collect())
            .collect::<Vec<_>>();

        Ok((interner, sentence_ids))
    }

    fn push(&mut self, token: String) {
        let id = self.id_to_str.len() as WordId;
        self.str_to_id.insert(token.clone(), id);
        self.id_to_str.push(token);
    }

    pub(crate) fn id_for(&self, value: &str) -> WordId {
        *self
            .str_to_id
            .get(value)
            .expect("token missing in interner while converting corpus")
    }

    pub fn resolve(&self, id: WordId) -> &str {
        &self.id_to_str[id as usize]
    }

    pub fn len(&self) -> usize {
        self.id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_str.is_empty()
    }
}
