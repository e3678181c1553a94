//! Console configuration.

/// Receipt rule width used when none is configured.
pub const DEFAULT_RECEIPT_WIDTH: usize = 60;
/// Narrowest receipt that still fits the label column and a few words.
pub const MIN_RECEIPT_WIDTH: usize = 40;

/// Knobs for one console run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Book the three sample events before the menu opens.
    pub seed_sample_events: bool,
    /// Width of receipt rules and the description wrap column.
    pub receipt_width: usize,
    /// `tracing` filter directive. `None` falls back to `RUST_LOG`, then `warn`.
    pub log_filter: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed_sample_events: true,
            receipt_width: DEFAULT_RECEIPT_WIDTH,
            log_filter: None,
        }
    }
}

impl ConsoleConfig {
    /// Sets the receipt width, raised to [`MIN_RECEIPT_WIDTH`] if narrower.
    pub fn with_receipt_width(mut self, width: usize) -> Self {
        self.receipt_width = width.max(MIN_RECEIPT_WIDTH);
        self
    }
}
