mod change;
mod history;

pub use change::{Change, HistoryEntry, Snapshot};
pub use history::{History, MAX_HISTORY};
