use crate::BoardColumn;

use std::str::FromStr;

#[test]
fn test_board_column_ids_round_trip() {
    for column in BoardColumn::ALL {
        assert_eq!(BoardColumn::from_id(column.id()), Some(column));
        assert_eq!(column.status().default_column(), column);
    }
}

#[test]
fn test_board_column_unknown_id() {
    assert_eq!(BoardColumn::from_id("em-contato"), None);
    assert!(BoardColumn::from_str("em-contato").is_err());
}

#[test]
fn test_board_column_order() {
    assert_eq!(BoardColumn::ALL[0], BoardColumn::Pendiente);
    assert_eq!(BoardColumn::ALL[4], BoardColumn::Cancelado);
}
