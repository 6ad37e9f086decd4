use crate::ClockTime;

use std::str::FromStr;

#[test]
fn test_clock_time_parses_with_and_without_leading_zero() {
    assert_eq!(ClockTime::from_str("9:00").unwrap().minutes(), 540);
    assert_eq!(ClockTime::from_str("09:00").unwrap().minutes(), 540);
    assert_eq!(ClockTime::from_str("23:59").unwrap().minutes(), 1439);
}

#[test]
fn test_clock_time_rejects_malformed() {
    for bad in ["", "9", "24:00", "12:60", "9:5", "ab:cd", "123:00"] {
        assert!(ClockTime::from_str(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn test_clock_time_orders_numerically() {
    let nine = ClockTime::from_str("9:00").unwrap();
    let ten = ClockTime::from_str("10:00").unwrap();
    assert!(nine < ten);
}

#[test]
fn test_clock_time_display_is_zero_padded() {
    assert_eq!(ClockTime::from_str("9:05").unwrap().to_string(), "09:05");
}

#[test]
fn test_clock_time_add_minutes_clamps_to_end_of_day() {
    let late = ClockTime::new(23, 30).unwrap();
    assert_eq!(late.add_minutes(60).to_string(), "23:59");
    assert_eq!(
        ClockTime::new(9, 0).unwrap().add_minutes(90).to_string(),
        "10:30"
    );
    assert_eq!(late.add_minutes(u32::MAX).to_string(), "23:59");
}
