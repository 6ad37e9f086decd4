use crate::notice::Notice;
use crate::store::LedgerStore;
use crate::{DashboardError, Result};

use salon_core::{FinanceSummary, MonthCursor, Transaction};

use chrono::NaiveDate;
use log::error;
use uuid::Uuid;

/// Income and expense ledger with range summaries.
#[derive(Debug, Clone, Default)]
pub struct LedgerView {
    transactions: Vec<Transaction>,
}

impl LedgerView {
    pub async fn load<S>(store: &S) -> Result<Self>
    where
        S: LedgerStore + ?Sized,
    {
        Ok(Self {
            transactions: store.list_transactions().await?,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn summary(&self, from: NaiveDate, to: NaiveDate) -> FinanceSummary {
        FinanceSummary::compute(&self.transactions, from, to)
    }

    pub fn month_summary(&self, month: MonthCursor) -> FinanceSummary {
        self.summary(month.first_day(), month.last_day())
    }

    pub async fn record<S>(&mut self, store: &S, transaction: Transaction) -> std::result::Result<(), Notice>
    where
        S: LedgerStore + ?Sized,
    {
        let invalid = if transaction.amount_cents <= 0 {
            Some(DashboardError::validation(
                "Amount must be greater than zero",
                "amount",
            ))
        } else if transaction.description.trim().is_empty() {
            Some(DashboardError::validation(
                "Description is required",
                "description",
            ))
        } else {
            None
        };
        if let Some(e) = invalid {
            return Err(Notice::from_error(&e));
        }

        if let Err(e) = store.create_transaction(&transaction).await {
            error!("Failed to record transaction: {}", e);
            return Err(Notice::from_error(&e));
        }

        self.transactions.insert(0, transaction);
        Ok(())
    }

    pub async fn remove<S>(&mut self, store: &S, id: Uuid) -> std::result::Result<(), Notice>
    where
        S: LedgerStore + ?Sized,
    {
        if let Err(e) = store.delete_transaction(id).await {
            error!("Failed to delete transaction {}: {}", id, e);
            return Err(Notice::from_error(&e));
        }

        self.transactions.retain(|t| t.id != id);
        Ok(())
    }
}
