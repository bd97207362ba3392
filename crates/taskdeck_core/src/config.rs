//! Board configuration defaults.

use crate::store::TASKS_STORAGE_KEY;

/// Days before today covered by the initial filter window.
pub const DEFAULT_FILTER_LOOKBACK_DAYS: u64 = 7;

/// Tunables for one task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key-value key holding the persisted task array.
    pub storage_key: String,
    /// Initial filter window is `[today - lookback, today]`.
    pub filter_lookback_days: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: TASKS_STORAGE_KEY.to_string(),
            filter_lookback_days: DEFAULT_FILTER_LOOKBACK_DAYS,
        }
    }
}
