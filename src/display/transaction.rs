//! Transaction display formatting
//!
//! Formatting for the entry preview, the archive table and saved records.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Transaction;

/// Format a single record as a one-line preview row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "  • {:<24} {}{}",
        truncate(&txn.summary, 24),
        txn.kind.sign(),
        txn.amount.format_with_symbol(symbol)
    )
}

/// Format the "recent" preview shown under the entry box
pub fn format_recent(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut output = String::from("Recent\n");
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }
    output
}

/// Format a freshly saved record
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Recorded:  {}\n", txn.id.short()));
    output.push_str(&format!(
        "Date:      {}\n",
        txn.date.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!("Type:      {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:    {} {}\n",
        txn.amount.format_with_symbol(symbol),
        txn.currency
    ));
    output.push_str(&format!("Category:  {}\n", txn.category));
    output.push_str(&format!("Summary:   {}\n", txn.summary));

    output
}

#[derive(Tabled)]
struct ArchiveRow {
    #[tabled(rename = "")]
    initial: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Entry")]
    original_input: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the full archive as a table, newest first
pub fn format_archive(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "The archive is empty.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| ArchiveRow {
        initial: category_initial(&txn.category),
        date: txn
            .date
            .with_timezone(&chrono::Local)
            .format("%m-%d")
            .to_string(),
        category: txn.category.clone(),
        summary: truncate(&txn.summary, 20),
        original_input: truncate(&txn.original_input, 30),
        amount: format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol)),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{} records\n", table, transactions.len())
}

/// Narrative text with Markdown bold markers removed
pub fn plain_report(report: &str) -> String {
    report.replace("**", "")
}

/// First character of a category, used as its badge
pub fn category_initial(category: &str) -> String {
    category.chars().next().map(String::from).unwrap_or_default()
}

/// Truncate to at most `max_chars` characters, marking the cut with `…`
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ParsedEntry, TransactionType};

    fn sample(kind: TransactionType, summary: &str) -> Transaction {
        Transaction::new(
            format!("{} 30", summary),
            ParsedEntry {
                amount: Money::from_minor(3000),
                kind,
                category: "餐饮".to_string(),
                summary: summary.to_string(),
            },
            "CNY",
        )
    }

    #[test]
    fn test_row_sign() {
        let row = format_transaction_row(&sample(TransactionType::Expense, "牛肉面"), "¥");
        assert!(row.contains("牛肉面"));
        assert!(row.ends_with("-¥30.00"));

        let row = format_transaction_row(&sample(TransactionType::Income, "红包"), "¥");
        assert!(row.ends_with("+¥30.00"));
    }

    #[test]
    fn test_recent_empty() {
        assert_eq!(format_recent(&[], "¥"), "No entries yet.\n");
    }

    #[test]
    fn test_archive_table() {
        let records = vec![
            sample(TransactionType::Expense, "牛肉面"),
            sample(TransactionType::Income, "红包"),
        ];
        let output = format_archive(&records, "¥");

        assert!(output.contains("牛肉面"));
        assert!(output.contains("红包"));
        assert!(output.contains("2 records"));
        assert_eq!(format_archive(&[], "¥"), "The archive is empty.\n");
    }

    #[test]
    fn test_plain_report() {
        assert_eq!(plain_report("本月**支出**较多"), "本月支出较多");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("地铁卡充值", 10), "地铁卡充值");
        assert_eq!(truncate("地铁卡充值", 3), "地铁…");
        assert_eq!(category_initial("餐饮"), "餐");
        assert_eq!(category_initial(""), "");
    }
}
