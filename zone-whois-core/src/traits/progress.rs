//! Report progress observer

/// Receives per-zone progress of a report run.
///
/// All methods default to doing nothing.
pub trait ReportProgress: Send + Sync {
    /// Enrichment is about to start for `total` zones.
    fn start(&self, _total: usize) {}

    /// One zone is finished, successfully or not.
    fn zone_done(&self, _zone: &str) {}

    /// All zones are processed.
    fn finish(&self) {}
}

/// Observer that ignores everything.
pub struct NoProgress;

impl ReportProgress for NoProgress {}
