use crate::{Appointment, AppointmentStatus, Catalog, Transaction, TransactionKind};

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime figures for a client, recomputed from history on every load
/// rather than maintained as counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTotals {
    pub client_id: Uuid,
    pub visits: u32,
    pub total_spent_cents: i64,
    pub last_visit: Option<NaiveDate>,
}

impl ClientTotals {
    /// Visits are concluded appointments. Spend is the client's income
    /// transactions plus, for concluded appointments nobody has charged yet,
    /// the price of their services.
    pub fn compute(
        client_id: Uuid,
        appointments: &[Appointment],
        transactions: &[Transaction],
        catalog: &Catalog,
    ) -> Self {
        let charged: HashSet<Uuid> = transactions
            .iter()
            .filter_map(|t| t.appointment_id)
            .collect();

        let billed: i64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income && t.client_id == Some(client_id))
            .map(|t| t.amount_cents)
            .sum();

        let mut totals = Self {
            client_id,
            total_spent_cents: billed,
            ..Self::default()
        };

        for appointment in appointments
            .iter()
            .filter(|a| a.client_id == client_id && a.status == AppointmentStatus::Concluido)
        {
            totals.visits += 1;
            totals.last_visit = totals.last_visit.max(Some(appointment.date));

            if !charged.contains(&appointment.id)
                && let Some(resolved) = catalog.resolve(appointment)
            {
                totals.total_spent_cents += resolved.total_cents();
            }
        }

        totals
    }
}
