use std::path::PathBuf;

pub type Result<T, E = AlignError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// A corpus file is missing or unreadable. Reading a training corpus is
    /// a one-shot batch operation, so this is fatal and never retried.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vocabulary exceeded WordId capacity (u32)")]
    VocabularyOverflow,

    /// A table lookup missed a cell that training must have populated. This
    /// indicates a bug in E-step bookkeeping; defaulting the value to zero
    /// would silently corrupt the estimate, so the run aborts instead.
    #[error("internal consistency violation: {0}")]
    InternalConsistency(String),

    #[error("failed to write report: {source}")]
    WriteReport {
        #[source]
        source: std::io::Error,
    },
}
