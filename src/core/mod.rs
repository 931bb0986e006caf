//! Framework-agnostic ledger logic.

/// Durable per-chat transaction store
pub mod ledger;
/// Command validation and reply formatting
pub mod processor;
/// Balance summary model and amount formatting
pub mod summary;

pub use ledger::{KindTotals, Ledger, TransactionId};
pub use processor::{CommandProcessor, InputError};
pub use summary::ChatSummary;
