#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn cat(budget: Decimal, spent: Decimal) -> Category {
    Category::new("x", "X", "", budget, spent)
}

fn seed() -> Vec<Category> {
    [
        (dec!(250), dec!(72)),
        (dec!(180), dec!(145)),
        (dec!(400), dec!(89)),
        (dec!(320), dec!(320)),
        (dec!(350), dec!(99)),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(b, s))| Category::new(&format!("c{i}"), "C", "", b, s))
    .collect()
}

// ── category_progress ─────────────────────────────────────────

#[test]
fn test_zero_budget_guarded() {
    let p = category_progress(&cat(Decimal::ZERO, Decimal::ZERO));
    assert_eq!(p.percentage, Decimal::ZERO);
    assert_eq!(p.tier, Tier::Normal);
}

#[test]
fn test_zero_budget_with_spend_still_zero() {
    let p = category_progress(&cat(Decimal::ZERO, dec!(50)));
    assert_eq!(p.percentage, Decimal::ZERO);
    assert_eq!(p.tier, Tier::Normal);
    assert_eq!(p.bar_ratio(), 0.0);
}

#[test]
fn test_normal_progress() {
    let p = category_progress(&cat(dec!(250), dec!(72)));
    assert_eq!(p.percentage, dec!(28.8));
    assert_eq!(p.tier, Tier::Normal);
}

#[test]
fn test_full_spend_is_critical() {
    let p = category_progress(&cat(dec!(320), dec!(320)));
    assert_eq!(p.percentage, dec!(100));
    assert_eq!(p.tier, Tier::Critical);
    assert_eq!(p.bar_ratio(), 1.0);
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(category_progress(&cat(dec!(100), dec!(69.99))).tier, Tier::Normal);
    assert_eq!(category_progress(&cat(dec!(100), dec!(70))).tier, Tier::Warning);
    assert_eq!(category_progress(&cat(dec!(100), dec!(89.99))).tier, Tier::Warning);
    assert_eq!(category_progress(&cat(dec!(100), dec!(90))).tier, Tier::Critical);
}

#[test]
fn test_overspend_unclamped_but_bar_clamped() {
    let p = category_progress(&cat(dec!(100), dec!(150)));
    assert_eq!(p.percentage, dec!(150));
    assert_eq!(p.tier, Tier::Critical);
    assert_eq!(p.bar_ratio(), 1.0);
}

#[test]
fn test_bar_ratio_partial() {
    let p = category_progress(&cat(dec!(200), dec!(50)));
    assert!((p.bar_ratio() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_tier_as_str() {
    assert_eq!(Tier::Normal.as_str(), "normal");
    assert_eq!(Tier::Warning.as_str(), "warning");
    assert_eq!(format!("{}", Tier::Critical), "critical");
}

// ── overview ──────────────────────────────────────────────────

#[test]
fn test_overview_seed() {
    let o = overview(&seed());
    assert_eq!(o.total_budget, dec!(1500));
    assert_eq!(o.total_spent, dec!(725));
    assert_eq!(o.percentage.round_dp(2), dec!(48.33));
    assert_eq!(o.remaining(), dec!(775));
}

#[test]
fn test_overview_empty() {
    let o = overview(&[]);
    assert_eq!(o.total_budget, Decimal::ZERO);
    assert_eq!(o.total_spent, Decimal::ZERO);
    assert_eq!(o.percentage, Decimal::ZERO);
    assert_eq!(o.bar_ratio(), 0.0);
}

#[test]
fn test_overview_after_reset_guarded() {
    let mut cats = seed();
    for c in &mut cats {
        c.budget = Decimal::ZERO;
    }
    let o = overview(&cats);
    assert_eq!(o.total_spent, dec!(725));
    assert_eq!(o.percentage, Decimal::ZERO);
    assert_eq!(o.remaining(), dec!(-725));
}

#[test]
fn test_overview_is_pure() {
    let cats = seed();
    let before = cats.clone();
    let _ = overview(&cats);
    for c in &cats {
        let _ = category_progress(c);
    }
    assert_eq!(cats, before);
}

// ── edit_range_max ────────────────────────────────────────────

#[test]
fn test_edit_range_floor() {
    assert_eq!(edit_range_max(Decimal::ZERO), dec!(1000));
    assert_eq!(edit_range_max(dec!(400)), dec!(1000));
}

#[test]
fn test_edit_range_scales_with_budget() {
    assert_eq!(edit_range_max(dec!(1000)), dec!(1500));
    assert_eq!(edit_range_max(dec!(2000)), dec!(3000));
}

#[test]
fn test_edit_range_capped_at_max_amount() {
    assert_eq!(edit_range_max(MAX_AMOUNT), MAX_AMOUNT);
    assert_eq!(edit_range_max(Decimal::MAX), MAX_AMOUNT);
}

// ── extreme magnitudes ────────────────────────────────────────

#[test]
fn test_progress_tiny_budget_saturates() {
    let tiny = Decimal::new(1, 28);
    let p = category_progress(&cat(tiny, dec!(72)));
    assert_eq!(p.percentage, Decimal::MAX);
    assert_eq!(p.tier, Tier::Critical);
    assert_eq!(p.bar_ratio(), 1.0);

    assert_eq!(category_progress(&cat(tiny, Decimal::ZERO)).percentage, Decimal::ZERO);
}

#[test]
fn test_overview_huge_budgets_saturate() {
    let cats = vec![cat(Decimal::MAX, dec!(10)), cat(Decimal::MAX, dec!(5))];
    let o = overview(&cats);
    assert_eq!(o.total_budget, Decimal::MAX);
    assert_eq!(o.total_spent, dec!(15));
    assert!(o.bar_ratio() < 1e-9);
}
