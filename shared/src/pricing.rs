//! Pricing rules and LKR formatting
//!
//! All currency values are whole rupees (i64, no minor units). The retail
//! markup is applied once when catalog data is constructed; the cart ledger
//! only ever reads the precomputed `retail_price` field.

use rust_decimal::prelude::*;

/// Retail markup over supplier cost (30%)
const MARKUP: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

/// Derive the customer-facing retail price from the supplier base price.
///
/// `retail_price(base) = round(base * 1.30)` to the nearest whole rupee,
/// rounding halves away from zero (half-up for the positive prices this
/// catalog carries). Deterministic and idempotent for a given base price.
pub fn retail_price(base_price: i64) -> i64 {
    (Decimal::from(base_price) * MARKUP)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Format a rupee amount as `LKR 1,234,567` (en-LK, zero decimal places)
pub fn format_lkr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("LKR -{}", grouped)
    } else {
        format!("LKR {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retail_price_samples() {
        // Reference values from the seeded catalog
        assert_eq!(retail_price(520_000), 676_000);
        assert_eq!(retail_price(35_000), 45_500);
        assert_eq!(retail_price(385_000), 500_500);
        assert_eq!(retail_price(95_000), 123_500);
    }

    #[test]
    fn test_retail_price_idempotent() {
        for base in [0, 1, 99, 100_000, 520_000, 685_000] {
            assert_eq!(retail_price(base), retail_price(base));
        }
    }

    #[test]
    fn test_retail_price_half_up() {
        // 5 * 1.3 = 6.5 rounds away from zero to 7
        assert_eq!(retail_price(5), 7);
        assert_eq!(retail_price(15), 20); // 19.5 -> 20
        assert_eq!(retail_price(0), 0);
    }

    #[test]
    fn test_format_lkr_grouping() {
        assert_eq!(format_lkr(0), "LKR 0");
        assert_eq!(format_lkr(999), "LKR 999");
        assert_eq!(format_lkr(1_000), "LKR 1,000");
        assert_eq!(format_lkr(45_500), "LKR 45,500");
        assert_eq!(format_lkr(676_000), "LKR 676,000");
        assert_eq!(format_lkr(1_234_567), "LKR 1,234,567");
    }

    #[test]
    fn test_format_lkr_negative() {
        assert_eq!(format_lkr(-5_000), "LKR -5,000");
    }
}
