// Transaction Analytics - Core Library
// Exposes the transaction record and the analyzer for the demo binary and
// tests

pub mod analyzer;
pub mod transaction;

// Re-export commonly used types
pub use analyzer::{AnalyzerSummary, TransactionAnalyzer, TypeDominance};
pub use transaction::{
    parse_date, AmountInput, RawRecord, Transaction, TYPE_CREDIT, TYPE_DEBIT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
