//! Workout history.

mod record;
mod storage;

pub use record::{HistoryRecord, NewHistoryRecord};
pub use storage::HistoryStore;
