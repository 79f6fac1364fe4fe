//! Progress display for the zone loop
//!
//! The bar and the log output share stderr, so log lines are written through
//! [`BarWriter`], which hides the bar while a line is printed.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use zone_whois_core::ReportProgress;

const LABEL: &str = "Processing Zones";

/// Progress bar for the zone loop; hidden when `enabled` is false or stderr is not a terminal.
pub fn new_bar(enabled: bool) -> ProgressBar {
    if enabled {
        ProgressBar::new(0)
    } else {
        ProgressBar::hidden()
    }
}

/// [`ReportProgress`] drawing an indicatif bar
pub struct ZoneProgress {
    bar: ProgressBar,
}

impl ZoneProgress {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl ReportProgress for ZoneProgress {
    fn start(&self, total: usize) {
        let style = ProgressStyle::default_bar()
            .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        self.bar.set_style(style);
        self.bar.set_prefix(LABEL);
        self.bar.set_length(u64::try_from(total).unwrap_or(u64::MAX));
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn zone_done(&self, zone: &str) {
        self.bar.set_message(zone.to_string());
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// stderr writer that suspends the progress bar around each write
pub struct BarWriter(pub ProgressBar);

impl Write for BarWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
