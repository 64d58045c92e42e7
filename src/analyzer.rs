// 📊 Transaction Analyzer - Scan-based queries over a transaction list
// Owns an append-only, insertion-ordered sequence and answers every query
// with a fresh full scan. No index, no cache; each call is O(n) over the
// current list.

use serde::{Deserialize, Serialize};

use crate::transaction::{parse_date, RawRecord, Transaction};

// ============================================================================
// TYPE DOMINANCE
// ============================================================================

/// Outcome of comparing debit count against credit count
///
/// Only the two recognized labels participate; every other label sits out
/// of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDominance {
    Debit,
    Credit,
    Equal,
}

impl TypeDominance {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeDominance::Debit => "debit",
            TypeDominance::Credit => "credit",
            TypeDominance::Equal => "equal",
        }
    }
}

// ============================================================================
// TRANSACTION ANALYZER
// ============================================================================

/// TransactionAnalyzer - owner of the transaction list plus its queries
///
/// The list grows only through add_transaction and keeps insertion order.
/// Duplicate ids are allowed; find_by_id returns the earliest.
#[derive(Debug, Clone)]
pub struct TransactionAnalyzer {
    transactions: Vec<Transaction>,
}

impl TransactionAnalyzer {
    /// Create an empty analyzer
    pub fn new() -> Self {
        TransactionAnalyzer {
            transactions: Vec::new(),
        }
    }

    /// Build an analyzer from raw records, one transaction per record,
    /// input order preserved
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        TransactionAnalyzer {
            transactions: records.into_iter().map(Transaction::from_record).collect(),
        }
    }

    /// Normalize one record and append it to the end of the list
    pub fn add_transaction(&mut self, record: RawRecord) {
        self.transactions.push(Transaction::from_record(record));
    }

    /// Current sequence in insertion order. Reflects the list at call time.
    pub fn all_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Distinct type labels present in the list, first-occurrence order
    pub fn unique_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for tx in &self.transactions {
            if !types.contains(&tx.transaction_type) {
                types.push(tx.transaction_type.clone());
            }
        }
        types
    }

    /// Sum of all amounts. 0 for an empty list; NaN once any amount is NaN.
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    /// Sum over transactions whose date matches every supplied component
    /// (year, month 1-12, day 1-31). Omitted components match
    /// unconditionally, so all three omitted sums the whole list.
    pub fn total_amount_by_date(
        &self,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.matches_date(year, month, day))
            .map(|tx| tx.amount)
            .sum()
    }

    /// Transactions whose type equals the label exactly, order preserved
    pub fn transactions_by_type(&self, transaction_type: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.transaction_type == transaction_type)
            .collect()
    }

    /// Transactions dated within [start, end], both ends inclusive. Bounds
    /// parse like transaction dates; an unparseable bound matches nothing.
    pub fn transactions_in_date_range(&self, start: &str, end: &str) -> Vec<&Transaction> {
        let start = match parse_date(start) {
            Some(date) => date,
            None => return Vec::new(),
        };
        let end = match parse_date(end) {
            Some(date) => date,
            None => return Vec::new(),
        };

        self.transactions
            .iter()
            .filter(|tx| tx.date.map_or(false, |d| start <= d && d <= end))
            .collect()
    }

    /// Transactions whose merchant equals the name exactly
    pub fn transactions_by_merchant(&self, merchant: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.merchant == merchant)
            .collect()
    }

    /// Mean amount. 0 for an empty list, guarding the division.
    pub fn average_amount(&self) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        self.total_amount() / self.transactions.len() as f64
    }

    /// Transactions whose amount lies within [min, max], both ends
    /// inclusive. NaN amounts compare false and drop out.
    pub fn transactions_by_amount_range(&self, min: f64, max: f64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| min <= tx.amount && tx.amount <= max)
            .collect()
    }

    /// Sum of amounts over debit transactions only
    pub fn total_debit_amount(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.is_debit())
            .map(|tx| tx.amount)
            .sum()
    }

    /// Year-month key ("YYYY-M", month unpadded) with the highest
    /// transaction count. None when no transaction carries a valid date.
    pub fn most_active_month(&self) -> Option<String> {
        Self::busiest_month(self.transactions.iter())
    }

    /// Same ranking, restricted to debit transactions first
    pub fn most_active_debit_month(&self) -> Option<String> {
        Self::busiest_month(self.transactions.iter().filter(|tx| tx.is_debit()))
    }

    /// Count month keys in first-occurrence order, stably sort by count
    /// descending, take the first. Ties therefore resolve to the key seen
    /// earliest in the list.
    fn busiest_month<'a, I>(transactions: I) -> Option<String>
    where
        I: Iterator<Item = &'a Transaction>,
    {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for tx in transactions {
            if let Some(key) = tx.month_key() {
                match counts.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((key, 1)),
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().next().map(|(key, _)| key)
    }

    /// Whether debits or credits dominate by count. Equal counts (including
    /// both zero) yield Equal.
    pub fn dominant_type(&self) -> TypeDominance {
        let debits = self.transactions.iter().filter(|tx| tx.is_debit()).count();
        let credits = self.transactions.iter().filter(|tx| tx.is_credit()).count();

        if debits > credits {
            TypeDominance::Debit
        } else if credits > debits {
            TypeDominance::Credit
        } else {
            TypeDominance::Equal
        }
    }

    /// Transactions dated strictly before the given date. Unparseable input
    /// matches nothing.
    pub fn transactions_before(&self, date: &str) -> Vec<&Transaction> {
        let cutoff = match parse_date(date) {
            Some(date) => date,
            None => return Vec::new(),
        };

        self.transactions
            .iter()
            .filter(|tx| tx.date.map_or(false, |d| d < cutoff))
            .collect()
    }

    /// First transaction carrying the id, if any
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// One description per transaction, order mirroring the list
    pub fn all_descriptions(&self) -> Vec<String> {
        self.transactions
            .iter()
            .map(|tx| tx.description.clone())
            .collect()
    }

    /// Assemble the batch summary. Same full-scan contract as the
    /// individual queries.
    pub fn summarize(&self) -> AnalyzerSummary {
        AnalyzerSummary {
            total_transactions: self.transactions.len(),
            total_amount: self.total_amount(),
            average_amount: self.average_amount(),
            debit_count: self.transactions.iter().filter(|tx| tx.is_debit()).count(),
            credit_count: self.transactions.iter().filter(|tx| tx.is_credit()).count(),
            unique_type_count: self.unique_types().len(),
            busiest_month: self.most_active_month(),
            dominant_type: self.dominant_type(),
        }
    }
}

impl Default for TransactionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// BATCH SUMMARY
// ============================================================================

/// Batch-level digest of the analyzer's current list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerSummary {
    pub total_transactions: usize,
    pub total_amount: f64,
    pub average_amount: f64,
    pub debit_count: usize,
    pub credit_count: usize,
    pub unique_type_count: usize,
    pub busiest_month: Option<String>,
    pub dominant_type: TypeDominance,
}

impl AnalyzerSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} transactions: total {:.2}, average {:.2} | {} debit / {} credit ({} types) | busiest month: {} | dominant: {}",
            self.total_transactions,
            self.total_amount,
            self.average_amount,
            self.debit_count,
            self.credit_count,
            self.unique_type_count,
            self.busiest_month.as_deref().unwrap_or("n/a"),
            self.dominant_type.as_str(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
