//! Ledger summary
//!
//! Income, expense, balance and the per-category expense breakdown for a
//! snapshot of records. Pure: the same input always gives the same output.

use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionType};

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label as chosen by the model
    pub category: String,
    /// Summed expense amount
    pub total: Money,
    /// Number of expense records in the category
    pub transaction_count: usize,
}

impl CategoryTotal {
    /// Percentage of `expense` this category accounts for
    ///
    /// `None` when `expense` is zero; there is nothing to divide by and the
    /// caller should show "no data" instead.
    pub fn share_of(&self, expense: Money) -> Option<f64> {
        if expense.is_zero() {
            return None;
        }
        Some(self.total.minor() as f64 / expense.minor() as f64 * 100.0)
    }
}

/// Aggregate view of a ledger
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`; negative when spending exceeds income
    pub balance: Money,
    /// Expense totals by category, largest first
    pub expense_by_category: Vec<CategoryTotal>,
    pub transaction_count: usize,
}

impl LedgerSummary {
    /// Summarize a list of records
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();

        for txn in transactions {
            match txn.kind {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => {
                    expense += txn.amount;
                    let entry = by_category
                        .entry(txn.category.as_str())
                        .or_insert((Money::zero(), 0));
                    entry.0 += txn.amount;
                    entry.1 += 1;
                }
            }
        }

        let mut expense_by_category: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| CategoryTotal {
                category: category.to_string(),
                total,
                transaction_count,
            })
            .collect();

        // Largest first; name order keeps ties stable across runs
        expense_by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            income,
            expense,
            balance: income - expense,
            expense_by_category,
            transaction_count: transactions.len(),
        }
    }

    /// Whether there is any expense to break down
    pub fn has_expenses(&self) -> bool {
        !self.expense.is_zero()
    }

    /// Categories paired with their percentage of total expense
    ///
    /// `None` when there is no expense, so no percentage is ever computed
    /// against zero.
    pub fn category_shares(&self) -> Option<Vec<(&CategoryTotal, f64)>> {
        if !self.has_expenses() {
            return None;
        }
        Some(
            self.expense_by_category
                .iter()
                .filter_map(|c| c.share_of(self.expense).map(|share| (c, share)))
                .collect(),
        )
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<12} {:>14}\n",
            "Expense",
            self.expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<12} {:>14}\n",
            "Income",
            self.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<12} {:>14}\n",
            "Balance",
            self.balance.format_with_symbol(symbol)
        ));
        output.push('\n');

        match self.category_shares() {
            None => output.push_str("No expenses recorded yet.\n"),
            Some(shares) => {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>6} {:>7}\n",
                    "Category", "Amount", "Count", "%"
                ));
                output.push_str(&"-".repeat(50));
                output.push('\n');
                for (category, share) in shares {
                    output.push_str(&format!(
                        "{:<20} {:>14} {:>6} {:>6.1}%\n",
                        category.category,
                        category.total.format_with_symbol(symbol),
                        category.transaction_count,
                        share
                    ));
                }
            }
        }

        output
    }
}
