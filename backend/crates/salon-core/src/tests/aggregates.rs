use crate::tests::fixtures::{Salon, date};
use crate::{
    AppointmentStatus, ClientTotals, CoreError, FinanceSummary, Inventory, MovementKind, Product,
    StockLevel, StockMovement, Transaction, TransactionKind,
};

use googletest::prelude::*;

// =========================================================================
// Client totals
// =========================================================================

#[test]
fn given_concluded_visits_when_computing_totals_then_counts_and_prices_uncharged_visits() {
    // Given: two concluded visits, one already charged, plus a scheduled one
    let salon = Salon::new();
    let mut charged = salon.appointment(&salon.ana, &salon.carla, &salon.corte, "2026-03-02", "09:00");
    charged.status = AppointmentStatus::Concluido;
    let mut uncharged =
        salon.appointment(&salon.ana, &salon.duda, &salon.escova, "2026-03-09", "09:00");
    uncharged.status = AppointmentStatus::Concluido;
    let upcoming = salon.appointment(&salon.ana, &salon.carla, &salon.corte, "2026-03-20", "09:00");

    let mut payment = Transaction::new(
        TransactionKind::Income,
        9000,
        "Corte + gorjeta".to_string(),
        date("2026-03-02"),
    );
    payment.client_id = Some(salon.ana.id);
    payment.appointment_id = Some(charged.id);

    // When
    let totals = ClientTotals::compute(
        salon.ana.id,
        &[charged, uncharged, upcoming],
        &[payment],
        &salon.catalog(),
    );

    // Then
    assert_that!(totals.visits, eq(2));
    assert_that!(totals.total_spent_cents, eq(9000 + 4500));
    assert_that!(totals.last_visit, some(eq(date("2026-03-09"))));
}

#[test]
fn given_client_without_history_then_totals_are_zero() {
    let salon = Salon::new();
    let totals = ClientTotals::compute(salon.bia.id, &[], &[], &salon.catalog());

    assert_that!(totals.visits, eq(0));
    assert_that!(totals.total_spent_cents, eq(0));
    assert_that!(totals.last_visit, none());
}

// =========================================================================
// Stock
// =========================================================================

#[test]
fn given_quantities_when_classified_then_half_boundary_is_exact() {
    assert_that!(StockLevel::classify(0, 10), eq(StockLevel::OutOfStock));
    assert_that!(StockLevel::classify(-1, 10), eq(StockLevel::OutOfStock));
    assert_that!(StockLevel::classify(4, 10), eq(StockLevel::Low));
    assert_that!(StockLevel::classify(5, 10), eq(StockLevel::Half));
    assert_that!(StockLevel::classify(6, 10), eq(StockLevel::Adequate));
    assert_that!(StockLevel::classify(3, 7), eq(StockLevel::Low));
    assert_that!(StockLevel::classify(4, 7), eq(StockLevel::Adequate));
    assert_that!(StockLevel::classify(3, 0), eq(StockLevel::Adequate));
}

#[test]
fn given_sale_within_stock_when_applied_then_quantity_drops() {
    let product = Product::new("Shampoo".to_string(), 3500, 10);
    let sale = StockMovement::new(product.id, MovementKind::Out, 6, date("2026-03-10"));

    let updated = Inventory::apply(&product, &sale).unwrap();

    assert_that!(updated.quantity, eq(4));
    assert_that!(updated.stock_level(), eq(StockLevel::Low));
}

#[test]
fn given_sale_above_stock_when_applied_then_insufficient_stock() {
    let product = Product::new("Shampoo".to_string(), 3500, 2);
    let sale = StockMovement::new(product.id, MovementKind::Out, 3, date("2026-03-10"));

    let result = Inventory::apply(&product, &sale);

    assert!(matches!(
        result,
        Err(CoreError::InsufficientStock {
            requested: 3,
            available: 2,
            ..
        })
    ));
}

#[test]
fn given_restock_beyond_reference_when_applied_then_reference_grows() {
    let mut product = Product::new("Máscara".to_string(), 5000, 10);
    product.quantity = 8;
    let restock = StockMovement::new(product.id, MovementKind::In, 7, date("2026-03-10"));

    let updated = Inventory::apply(&product, &restock).unwrap();

    assert_that!(updated.quantity, eq(15));
    assert_that!(updated.total_quantity, eq(15));
}

#[test]
fn given_non_positive_quantity_when_applied_then_validation_error() {
    let product = Product::new("Shampoo".to_string(), 3500, 10);
    let movement = StockMovement::new(product.id, MovementKind::In, 0, date("2026-03-10"));

    assert!(matches!(
        Inventory::apply(&product, &movement),
        Err(CoreError::Validation { .. })
    ));
}

// =========================================================================
// Finance
// =========================================================================

#[test]
fn given_ledger_when_summarized_then_range_and_categories_apply() {
    let mut haircut = Transaction::new(
        TransactionKind::Income,
        8000,
        "Corte".to_string(),
        date("2026-03-10"),
    );
    haircut.category = Some("servicos".to_string());
    let mut rent = Transaction::new(
        TransactionKind::Expense,
        150000,
        "Aluguel".to_string(),
        date("2026-03-05"),
    );
    rent.category = Some("fixas".to_string());
    let tip = Transaction::new(TransactionKind::Income, 1000, "Gorjeta".to_string(), date("2026-03-11"));
    let outside = Transaction::new(
        TransactionKind::Income,
        999,
        "Fevereiro".to_string(),
        date("2026-02-28"),
    );

    let summary = FinanceSummary::compute(
        &[haircut, rent, tip, outside],
        date("2026-03-01"),
        date("2026-03-31"),
    );

    assert_that!(summary.income_cents, eq(9000));
    assert_that!(summary.expense_cents, eq(150000));
    assert_that!(summary.balance_cents, eq(9000 - 150000));
    assert_that!(summary.transaction_count, eq(3));
    assert_that!(summary.by_category.get("fixas").copied(), some(eq(-150000)));
    assert_that!(
        summary.by_category.get(crate::aggregates::finance_summary::UNCATEGORIZED).copied(),
        some(eq(1000))
    );
}
