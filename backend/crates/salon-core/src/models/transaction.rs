use crate::TransactionKind;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense entry in the salon ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    /// Always positive; `kind` carries the sign
    pub amount_cents: i64,
    pub description: String,
    pub category: Option<String>,
    pub payment_method: Option<String>,
    pub date: NaiveDate,

    pub client_id: Option<Uuid>,
    pub appointment_id: Option<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount_cents: i64, description: String, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            description,
            category: None,
            payment_method: None,
            date,
            client_id: None,
            appointment_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Amount with the ledger sign applied.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }
}
