use std::io::Write;

use crate::errors::{AlignError, Result};
use crate::estimator::ReportEntry;

/// Writes retained cells as tab-separated `source\ttarget\tprobability`
/// lines, one per cell, in the order produced by
/// [`AlignmentEstimator::report`](crate::AlignmentEstimator::report).
pub fn write_report<W: Write>(writer: &mut W, entries: &[ReportEntry]) -> Result<()> {
    for entry in entries {
        writeln!(
            writer,
            "{}\t{}\t{}",
            entry.source, entry.target, entry.probability
        )
        .map_err(|source| AlignError::WriteReport { source })?;
    }
    writer
        .flush()
        .map_err(|source| AlignError::WriteReport { source })
}
