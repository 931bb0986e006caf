//! Discord command implementations organized by category.

/// Greeting
pub mod general;

/// Chat balance report
pub mod report;

/// `receita` and `despesa`
pub mod transaction;

// Export commands
pub use general::*;
pub use report::*;
pub use transaction::*;
