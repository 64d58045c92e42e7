// 💳 Transaction Record - Normalized financial event
// Coerces raw caller input (string dates, string-or-number amounts) into a
// value that flows through every query without further validation.
//
// Bad input never fails construction. A non-numeric amount becomes NaN, an
// unparseable date becomes the invalid-date sentinel (None). Both flow
// through the analyzer as ordinary values.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// TYPE SENTINELS
// ============================================================================

/// Recognized type label for money leaving an account
pub const TYPE_DEBIT: &str = "debit";

/// Recognized type label for money entering an account
pub const TYPE_CREDIT: &str = "credit";

// ============================================================================
// RAW INPUT
// ============================================================================

/// AmountInput - an amount exactly as the caller supplied it
///
/// Sources hand amounts over either as numbers or as numeric strings
/// ("45.99"). Both coerce to f64 at construction time; anything that is not
/// numeric becomes NaN and poisons the aggregates it participates in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Coerce to f64. Non-numeric text yields NaN, never an error.
    pub fn to_f64(&self) -> f64 {
        match self {
            AmountInput::Number(n) => *n,
            AmountInput::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

/// RawRecord - one transaction as supplied by the caller, before
/// normalization
///
/// This is the only input shape the analyzer accepts, whether at
/// construction or on append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,

    /// Date in string form ("2021-01-01" or "01/01/2021")
    pub date: String,

    /// Amount as number or numeric string
    pub amount: AmountInput,

    #[serde(rename = "type")]
    pub transaction_type: String,

    pub description: String,

    /// Counterparty name
    pub merchant: String,

    /// Payment instrument label
    pub card_type: String,
}

impl RawRecord {
    /// Create a record with all seven fields
    pub fn new<A: Into<AmountInput>>(
        id: &str,
        date: &str,
        amount: A,
        transaction_type: &str,
        description: &str,
        merchant: &str,
        card_type: &str,
    ) -> Self {
        RawRecord {
            id: id.to_string(),
            date: date.to_string(),
            amount: amount.into(),
            transaction_type: transaction_type.to_string(),
            description: description.to_string(),
            merchant: merchant.to_string(),
            card_type: card_type.to_string(),
        }
    }
}

// ============================================================================
// DATE PARSING
// ============================================================================

/// Parse a raw date string into a calendar date.
///
/// Accepts ISO form (2021-01-15) and US form (01/15/2021). Anything else
/// yields the invalid-date sentinel; callers downstream treat None as
/// matching no date filter.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// Transaction - one immutable financial movement
///
/// Fields are fixed at construction. The analyzer never mutates a stored
/// transaction; a correction arrives as a fresh record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-supplied identifier. Uniqueness is not enforced here.
    pub id: String,

    /// None when the raw date string did not parse. Such transactions are
    /// skipped by every date-filtered query.
    pub date: Option<NaiveDate>,

    /// NaN when the raw amount was not numeric
    pub amount: f64,

    /// Open label; "debit" and "credit" are the two recognized values
    pub transaction_type: String,

    pub description: String,

    pub merchant: String,

    pub card_type: String,
}

/// Canonical log form of a transaction. Field declaration order is the key
/// order in the output.
#[derive(Serialize)]
struct SerializedTransaction<'a> {
    transaction_id: &'a str,
    transaction_date: String,
    transaction_amount: String,
    transaction_type: &'a str,
    transaction_description: &'a str,
    merchant_name: &'a str,
    card_type: &'a str,
}

impl Transaction {
    /// Normalize a raw record into a transaction. Infallible: bad amounts
    /// and dates become their sentinel values.
    pub fn from_record(record: RawRecord) -> Self {
        Transaction {
            id: record.id,
            date: parse_date(&record.date),
            amount: record.amount.to_f64(),
            transaction_type: record.transaction_type,
            description: record.description,
            merchant: record.merchant,
            card_type: record.card_type,
        }
    }

    /// True for the recognized debit label (exact, case-sensitive)
    pub fn is_debit(&self) -> bool {
        self.transaction_type == TYPE_DEBIT
    }

    /// True for the recognized credit label (exact, case-sensitive)
    pub fn is_credit(&self) -> bool {
        self.transaction_type == TYPE_CREDIT
    }

    /// True when every supplied component matches this transaction's date.
    /// Omitted components match unconditionally; the invalid-date sentinel
    /// matches only when no component is supplied at all.
    pub fn matches_date(&self, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> bool {
        if year.is_none() && month.is_none() && day.is_none() {
            return true;
        }

        match self.date {
            Some(date) => {
                year.map_or(true, |y| date.year() == y)
                    && month.map_or(true, |m| date.month() == m)
                    && day.map_or(true, |d| date.day() == d)
            }
            None => false,
        }
    }

    /// Year-month bucket key, "YYYY-M" with the month unpadded
    pub fn month_key(&self) -> Option<String> {
        self.date.map(|d| format!("{}-{}", d.year(), d.month()))
    }

    /// Render the canonical textual form: a JSON object with exactly these
    /// keys, in this order: transaction_id, transaction_date (YYYY-MM-DD,
    /// empty for the invalid-date sentinel), transaction_amount (two
    /// decimals, half away from zero; NaN renders as "NaN"),
    /// transaction_type, transaction_description, merchant_name, card_type.
    ///
    /// Log/debug format only; there is no parser for it.
    pub fn serialize(&self) -> String {
        let repr = SerializedTransaction {
            transaction_id: &self.id,
            transaction_date: self
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            transaction_amount: format_amount(self.amount),
            transaction_type: &self.transaction_type,
            transaction_description: &self.description,
            merchant_name: &self.merchant,
            card_type: &self.card_type,
        };

        // Struct of plain strings; serialization cannot fail on it
        serde_json::to_string(&repr).unwrap_or_default()
    }
}

/// Fixed-point rendering with two decimals, rounding half away from zero
fn format_amount(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record() -> RawRecord {
        RawRecord::new(
            "tx-1",
            "2021-01-15",
            45.99,
            "debit",
            "Coffee run",
            "Starbucks",
            "visa",
        )
    }

    #[test]
    fn test_amount_coercion_from_number() {
        let amount = AmountInput::Number(12.5);
        assert_eq!(amount.to_f64(), 12.5);
    }

    #[test]
    fn test_amount_coercion_from_numeric_string() {
        assert_eq!(AmountInput::from("45.99").to_f64(), 45.99);
        assert_eq!(AmountInput::from("  -3.5  ").to_f64(), -3.5);
        assert_eq!(AmountInput::from("10").to_f64(), 10.0);
    }

    #[test]
    fn test_amount_coercion_non_numeric_is_nan() {
        assert!(AmountInput::from("not a number").to_f64().is_nan());
        assert!(AmountInput::from("").to_f64().is_nan());
        assert!(AmountInput::from("$45.99").to_f64().is_nan());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 15);

        assert_eq!(parse_date("2021-01-15"), expected);
        assert_eq!(parse_date("01/15/2021"), expected);
        assert_eq!(parse_date(" 2021-01-15 "), expected);
    }

    #[test]
    fn test_parse_date_invalid_is_sentinel() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2021-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_from_record_normalizes_fields() {
        let tx = Transaction::from_record(create_record());

        assert_eq!(tx.id, "tx-1");
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2021, 1, 15));
        assert_eq!(tx.amount, 45.99);
        assert_eq!(tx.transaction_type, "debit");
        assert!(tx.is_debit());
        assert!(!tx.is_credit());
    }

    #[test]
    fn test_from_record_string_amount() {
        let mut record = create_record();
        record.amount = AmountInput::from("45.99");

        let tx = Transaction::from_record(record);

        assert_eq!(tx.amount, 45.99);
    }

    #[test]
    fn test_matches_date_components() {
        let tx = Transaction::from_record(create_record());

        assert!(tx.matches_date(Some(2021), Some(1), Some(15)));
        assert!(tx.matches_date(Some(2021), None, None));
        assert!(tx.matches_date(None, Some(1), None));
        assert!(!tx.matches_date(Some(2020), None, None));
        assert!(!tx.matches_date(Some(2021), Some(2), None));
    }

    #[test]
    fn test_matches_date_invalid_date_only_matches_vacuously() {
        let mut record = create_record();
        record.date = "garbage".to_string();
        let tx = Transaction::from_record(record);

        assert!(tx.matches_date(None, None, None));
        assert!(!tx.matches_date(Some(2021), None, None));
        assert!(!tx.matches_date(None, None, Some(15)));
    }

    #[test]
    fn test_month_key_unpadded() {
        let tx = Transaction::from_record(create_record());
        assert_eq!(tx.month_key(), Some("2021-1".to_string()));

        let mut record = create_record();
        record.date = "2021-12-03".to_string();
        let december = Transaction::from_record(record);
        assert_eq!(december.month_key(), Some("2021-12".to_string()));
    }

    #[test]
    fn test_serialize_key_order_and_values() {
        let tx = Transaction::from_record(create_record());
        let output = tx.serialize();

        // Key order is part of the contract
        let positions: Vec<usize> = [
            "transaction_id",
            "transaction_date",
            "transaction_amount",
            "transaction_type",
            "transaction_description",
            "merchant_name",
            "card_type",
        ]
        .iter()
        .map(|key| output.find(&format!("\"{}\"", key)).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["transaction_id"], "tx-1");
        assert_eq!(value["transaction_date"], "2021-01-15");
        assert_eq!(value["transaction_amount"], "45.99");
        assert_eq!(value["merchant_name"], "Starbucks");
        assert_eq!(value["card_type"], "visa");
    }

    #[test]
    fn test_serialize_rounds_half_away_from_zero() {
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(45.987), "45.99");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(-0.125), "-0.13");
    }

    #[test]
    fn test_serialize_sentinels() {
        let mut record = create_record();
        record.date = "garbage".to_string();
        record.amount = AmountInput::from("garbage");
        let tx = Transaction::from_record(record);

        let value: serde_json::Value = serde_json::from_str(&tx.serialize()).unwrap();
        assert_eq!(value["transaction_date"], "");
        assert_eq!(value["transaction_amount"], "NaN");
    }
}
