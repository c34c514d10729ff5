#![allow(clippy::unwrap_used)]

use chrono::Month;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::BudgetError;

// ── Category ──────────────────────────────────────────────────

fn sample() -> Vec<Category> {
    vec![
        Category::new("food", "Food", "🍔", dec!(250), dec!(72)),
        Category::new("transport", "Transport", "🚗", dec!(180), dec!(145)),
    ]
}

#[test]
fn test_category_new() {
    let cat = Category::new("food", "Food", "🍔", dec!(250), dec!(72));
    assert_eq!(cat.id, "food");
    assert_eq!(cat.name, "Food");
    assert_eq!(cat.icon, "🍔");
    assert_eq!(cat.budget, dec!(250));
    assert_eq!(cat.spent, dec!(72));
}

#[test]
fn test_category_display() {
    let cat = Category::new("bills", "Bills", "💡", Decimal::ZERO, Decimal::ZERO);
    assert_eq!(format!("{cat}"), "Bills");
}

#[test]
fn test_find_by_id() {
    let cats = sample();
    assert_eq!(Category::find_by_id(&cats, "transport").unwrap().name, "Transport");
    assert!(Category::find_by_id(&cats, "Transport").is_none());
    assert!(Category::find_by_id(&cats, "missing").is_none());
}

#[test]
fn test_find_by_key_falls_back_to_name() {
    let cats = sample();
    assert_eq!(Category::find_by_key(&cats, "food").unwrap().id, "food");
    assert_eq!(Category::find_by_key(&cats, "TRANSPORT").unwrap().id, "transport");
    assert!(Category::find_by_key(&cats, "rent").is_none());
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_plain_amounts() {
    assert_eq!(parse_amount("250").unwrap(), dec!(250));
    assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount("12.34").unwrap(), dec!(12.34));
}

#[test]
fn test_parse_currency_formatting() {
    assert_eq!(parse_amount(" $1,250.50 ").unwrap(), dec!(1250.50));
    assert_eq!(parse_amount("$0.01").unwrap(), dec!(0.01));
}

#[test]
fn test_parse_negative_rejected() {
    assert!(matches!(parse_amount("-1"), Err(BudgetError::InvalidAmount(_))));
    assert!(matches!(parse_amount("-0.01"), Err(BudgetError::InvalidAmount(_))));
}

#[test]
fn test_parse_non_numeric_rejected() {
    for input in ["", "   ", "$", "NaN", "nan", "inf", "abc", "12abc", "1.2.3"] {
        assert!(
            matches!(parse_amount(input), Err(BudgetError::InvalidAmount(_))),
            "expected InvalidAmount for {input:?}"
        );
    }
}

#[test]
fn test_parse_error_keeps_input() {
    assert_eq!(
        parse_amount("lots").unwrap_err(),
        BudgetError::InvalidAmount("lots".into())
    );
}

#[test]
fn test_parse_rejects_sub_cent() {
    for input in ["0.001", "12.345", "0.0000000000000000000000000001"] {
        assert_eq!(
            parse_amount(input).unwrap_err(),
            BudgetError::InvalidAmount(input.into())
        );
    }
}

#[test]
fn test_parse_accepts_trailing_zeros() {
    assert_eq!(parse_amount("1.500").unwrap(), dec!(1.5));
    assert_eq!(parse_amount("10.0000").unwrap(), dec!(10));
}

#[test]
fn test_parse_upper_limit() {
    assert_eq!(parse_amount("1,000,000,000,000").unwrap(), MAX_AMOUNT);
    for input in ["1000000000000.01", "79228162514264337593543950335"] {
        assert!(
            matches!(parse_amount(input), Err(BudgetError::InvalidAmount(_))),
            "expected InvalidAmount for {input:?}"
        );
    }
}

#[test]
fn test_check_amount() {
    assert_eq!(check_amount(dec!(12.50)).unwrap(), dec!(12.5));
    assert_eq!(check_amount(-Decimal::ZERO).unwrap(), Decimal::ZERO);
    assert!(check_amount(dec!(-0.01)).is_err());
    assert!(check_amount(dec!(0.005)).is_err());
    assert!(check_amount(Decimal::MAX).is_err());
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_display() {
    assert_eq!(Period::new(Month::October, 2025).to_string(), "October 2025");
}

#[test]
fn test_period_parse() {
    let p: Period = "October 2025".parse().unwrap();
    assert_eq!(p, Period::new(Month::October, 2025));

    let p: Period = "  march 1999 ".parse().unwrap();
    assert_eq!(p, Period::new(Month::March, 1999));
}

#[test]
fn test_period_parse_invalid() {
    for input in ["", "October", "Octember 2025", "October twenty", "2025 October"] {
        assert!(
            matches!(input.parse::<Period>(), Err(BudgetError::InvalidPeriod(_))),
            "expected InvalidPeriod for {input:?}"
        );
    }
}

#[test]
fn test_period_next_wraps_year() {
    let dec = Period::new(Month::December, 2025);
    assert_eq!(dec.step(Direction::Next).to_string(), "January 2026");
}

#[test]
fn test_period_prev_wraps_year() {
    let jan = Period::new(Month::January, 2026);
    assert_eq!(jan.step(Direction::Prev).to_string(), "December 2025");
}

#[test]
fn test_period_step_within_year() {
    let oct = Period::new(Month::October, 2025);
    assert_eq!(oct.step(Direction::Next), Period::new(Month::November, 2025));
    assert_eq!(oct.step(Direction::Prev), Period::new(Month::September, 2025));
}

#[test]
fn test_period_full_cycle_returns() {
    let start = Period::new(Month::May, 2024);
    let mut p = start;
    for _ in 0..12 {
        p = p.step(Direction::Next);
    }
    assert_eq!(p, Period::new(Month::May, 2025));
    for _ in 0..12 {
        p = p.step(Direction::Prev);
    }
    assert_eq!(p, start);
}

#[test]
fn test_period_display_parse_agree() {
    let p = Period::current();
    assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
}

#[test]
fn test_period_parse_rejects_out_of_range_year() {
    for input in ["December 2147483647", "January 0", "March -5", "May 10000"] {
        assert!(
            matches!(input.parse::<Period>(), Err(BudgetError::InvalidPeriod(_))),
            "expected InvalidPeriod for {input:?}"
        );
    }
    assert_eq!("December 9999".parse::<Period>().unwrap().to_string(), "December 9999");
    assert_eq!("January 1".parse::<Period>().unwrap().to_string(), "January 1");
}

#[test]
fn test_period_new_clamps_year() {
    assert_eq!(Period::new(Month::June, i32::MAX), Period::new(Month::June, 9999));
    assert_eq!(Period::new(Month::June, i32::MIN), Period::new(Month::June, 1));
}

#[test]
fn test_period_step_stops_at_year_bounds() {
    let last = Period::new(Month::December, 9999);
    assert_eq!(last.step(Direction::Next), last);
    assert_eq!(last.step(Direction::Prev), Period::new(Month::November, 9999));

    let first = Period::new(Month::January, 1);
    assert_eq!(first.step(Direction::Prev), first);
    assert_eq!(first.step(Direction::Next), Period::new(Month::February, 1));
}
