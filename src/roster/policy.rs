use std::str::FromStr;

/// How results of overlapping roster refreshes are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Each refresh carries a ticket; results older than the last applied
    /// ticket are dropped and the loading flag follows the newest refresh.
    #[default]
    Sequenced,
    /// Whichever refresh settles last overwrites the roster and clears the
    /// loading flag, even if a newer refresh is still in flight.
    LastWriteWins,
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequenced" => Ok(RefreshPolicy::Sequenced),
            "last_write_wins" | "last-write-wins" => Ok(RefreshPolicy::LastWriteWins),
            other => Err(format!("Unknown refresh policy: {}", other)),
        }
    }
}

/// Tuning for a roster coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorConfig {
    pub refresh_policy: RefreshPolicy,
    /// Buffered events per subscriber before the slowest one lags
    pub event_capacity: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            refresh_policy: RefreshPolicy::default(),
            event_capacity: 256,
        }
    }
}
