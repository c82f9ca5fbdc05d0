pub type WordId = u32;

/// Reserved source-side id for the NULL pseudo-token. The slot exists even
/// when NULL is disabled so corpus word ids are stable across configurations.
pub(crate) const NULL_ID: WordId = 0;

/// Internal spelling of the NULL pseudo-token; reports render [`NULL_LABEL`]
/// instead. Whitespace tokenization never produces this string.
pub(crate) const NULL_SENTINEL: &str = "\u{0}";

/// Rendered form of the NULL pseudo-token in reports.
pub const NULL_LABEL: &str = "NULL";

/// Pseudo-count added per co-occurring pair in the uniform-prior first
/// pass, as `INIT_PSEUDO_COUNT / (INIT_PSEUDO_COUNT * source_len)`. The
/// formula must stay in this form, not algebraically reduced.
pub(crate) const INIT_PSEUDO_COUNT: f64 = 0.01;

pub const DEFAULT_ITERATIONS: usize = 10;
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Whether every source sentence is prefixed with the NULL pseudo-token that
/// absorbs target words with no genuine source-language counterpart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NullToken {
    Enabled,
    Disabled,
}
