use crate::{Transaction, TransactionKind};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const UNCATEGORIZED: &str = "uncategorized";

/// Ledger totals over an inclusive date range, in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub income_cents: i64,
    pub expense_cents: i64,
    pub balance_cents: i64,
    pub transaction_count: usize,
    /// Signed totals per category
    pub by_category: BTreeMap<String, i64>,
}

impl FinanceSummary {
    pub fn compute(transactions: &[Transaction], from: NaiveDate, to: NaiveDate) -> Self {
        let mut summary = Self::default();

        for transaction in transactions
            .iter()
            .filter(|t| t.deleted_at.is_none() && from <= t.date && t.date <= to)
        {
            match transaction.kind {
                TransactionKind::Income => summary.income_cents += transaction.amount_cents,
                TransactionKind::Expense => summary.expense_cents += transaction.amount_cents,
            }

            let category = transaction
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            *summary.by_category.entry(category).or_default() += transaction.signed_amount();
            summary.transaction_count += 1;
        }

        summary.balance_cents = summary.income_cents - summary.expense_cents;
        summary
    }
}
