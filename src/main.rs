use anyhow::Result;

use transaction_analytics::{RawRecord, TransactionAnalyzer, VERSION};

fn main() -> Result<()> {
    println!("📒 Transaction Analytics v{} - demo run", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Seed list plus one appended record
    let mut analyzer = TransactionAnalyzer::from_records(vec![
        RawRecord::new("1", "2021-01-01", 10.0, "debit", "A", "M", "visa"),
        RawRecord::new("2", "2021-01-02", 20.0, "credit", "B", "N", "visa"),
        RawRecord::new("3", "2021-01-01", 30.0, "debit", "C", "M", "mastercard"),
    ]);
    analyzer.add_transaction(RawRecord::new(
        "4",
        "2021-01-03",
        40.0,
        "credit",
        "D",
        "O",
        "amex",
    ));

    println!("\n📊 Totals");
    println!("✓ Transactions loaded: {}", analyzer.all_transactions().len());
    println!("✓ Total amount: {:.2}", analyzer.total_amount());
    println!("✓ Average amount: {:.2}", analyzer.average_amount());
    println!("✓ Debit total: {:.2}", analyzer.total_debit_amount());
    println!(
        "✓ Total on 2021-01-01: {:.2}",
        analyzer.total_amount_by_date(Some(2021), Some(1), Some(1))
    );

    println!("\n🔍 Filters");
    println!("✓ Types present: {}", analyzer.unique_types().join(", "));
    println!("✓ Debits: {}", analyzer.transactions_by_type("debit").len());
    println!(
        "✓ Merchant M: {}",
        analyzer.transactions_by_merchant("M").len()
    );
    println!(
        "✓ Dated 2021-01-02: {}",
        analyzer
            .transactions_in_date_range("2021-01-02", "2021-01-02")
            .len()
    );
    println!(
        "✓ Amount in [15, 35]: {}",
        analyzer.transactions_by_amount_range(15.0, 35.0).len()
    );
    println!(
        "✓ Before 2021-01-02: {}",
        analyzer.transactions_before("2021-01-02").len()
    );

    println!("\n📅 Activity");
    match analyzer.most_active_month() {
        Some(month) => println!("✓ Busiest month: {}", month),
        None => println!("✗ No dated transactions"),
    }
    match analyzer.most_active_debit_month() {
        Some(month) => println!("✓ Busiest debit month: {}", month),
        None => println!("✗ No dated debit transactions"),
    }
    println!("✓ Dominant type: {}", analyzer.dominant_type().as_str());
    match analyzer.find_by_id("2") {
        Some(tx) => println!("✓ Lookup id=2: {}", tx.description),
        None => println!("✗ Lookup id=2 missed"),
    }

    println!("\n🧾 Records");
    for tx in analyzer.all_transactions() {
        println!("{}", tx.serialize());
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", analyzer.summarize().summary());

    Ok(())
}
