//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A float price entered as "99.10" and multiplied by 3:                  │
//! │    99.1 * 3 = 297.29999999999995  ❌ WRONG!                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    9910 paise * 3 = 29730 paise = ₹297.30                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use decor_core::money::Money;
//!
//! // Create from rupees or paise
//! let price = Money::from_rupees(2500);
//! let garland = Money::from_paise(15050); // ₹150.50
//!
//! // Arithmetic operations
//! let line_total = price * 3;
//! assert_eq!(line_total, Money::from_rupees(7500));
//! assert_eq!((price + garland).paise(), 265050);
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;

/// Paise per rupee.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: The stores never reject a price, so negative values
///   must be representable even though the UI never produces them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Rupees on the wire**: snapshots and the frontend see a plain rupee
///   number (`2500`, `99.5`); paise exist only in memory
/// - **Saturating arithmetic**: stores accept any price, so sums and
///   scaling clamp at the i64 bounds instead of overflowing
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──┬──► CartLine.line_total() ──► CartStore::total()      │
/// │                  │                                                      │
/// │                  ├──► CatalogStats.total_value (admin dashboard)        │
/// │                  │                                                      │
/// │                  └──► PriceRange filter (catalog browsing)              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// let price = Money::from_paise(9950); // ₹99.50
    /// assert_eq!(price.paise(), 9950);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees, clamped at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(150).paise(), 15000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees.saturating_mul(PAISE_PER_RUPEE))
    }

    /// Parses a decimal rupee amount as typed into a price field.
    ///
    /// Accepts `"2500"`, `"99.5"` and `"99.50"`. Rejects empty input, signs,
    /// exponents and more than two fractional digits.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// assert_eq!(Money::parse_rupees("99.5").unwrap().paise(), 9950);
    /// assert!(Money::parse_rupees("abc").is_err());
    /// ```
    pub fn parse_rupees(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (whole, frac) = match input.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (input, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must be a number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must be a number"));
        }
        if frac.len() > 2 {
            return Err(invalid("must have at most two decimal places"));
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("is too large"))?
        };
        let paise: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("must be a number"))? * 10,
            _ => frac.parse().map_err(|_| invalid("must be a number"))?,
        };

        rupees
            .checked_mul(PAISE_PER_RUPEE)
            .and_then(|p| p.checked_add(paise))
            .map(Money)
            .ok_or_else(|| invalid("is too large"))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// Saturates instead of overflowing; a cart line can never reach the
    /// bounds in practice.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(150);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_rupees(450));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Scales by `numerator / denominator` and rounds half-up to whole rupees.
    ///
    /// Used for the crossed-out "was" price on the product detail page,
    /// which shows `price × 1.2` rounded to the nearest rupee.
    ///
    /// ## Example
    /// ```rust
    /// use decor_core::money::Money;
    ///
    /// let price = Money::from_rupees(150);
    /// assert_eq!(price.scale_to_whole_rupees(6, 5), Money::from_rupees(180));
    /// ```
    pub fn scale_to_whole_rupees(&self, numerator: i64, denominator: i64) -> Money {
        // i128 holds any i64 × i64 product
        let scaled = self.0 as i128 * numerator as i128;
        let unit = denominator as i128 * PAISE_PER_RUPEE as i128;
        let rupees = if scaled >= 0 {
            (scaled + unit / 2) / unit
        } else {
            (scaled - unit / 2) / unit
        };
        let paise = (rupees * PAISE_PER_RUPEE as i128).clamp(i64::MIN as i128, i64::MAX as i128);
        Money(paise as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows whole rupees without decimals (`₹2500`), otherwise two decimals
/// (`₹99.50`), matching how the storefront prints prices.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.paise_part() == 0 {
            write!(f, "{}₹{}", sign, self.rupees().abs())
        } else {
            write!(
                f,
                "{}₹{}.{:02}",
                sign,
                self.rupees().abs(),
                self.paise_part()
            )
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Whole rupees serialize as an integer (`2500`), anything else as a decimal
/// (`99.5`).
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.paise_part() == 0 {
            serializer.serialize_i64(self.rupees())
        } else {
            serializer.serialize_f64(self.0 as f64 / PAISE_PER_RUPEE as f64)
        }
    }
}

/// Accepts integer or decimal rupees; decimals are rounded to the nearest
/// paisa. Amounts beyond the `i64` paise range saturate, like the arithmetic.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RupeeVisitor)
    }
}

struct RupeeVisitor;

impl<'de> Visitor<'de> for RupeeVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rupee amount")
    }

    fn visit_i64<E: de::Error>(self, rupees: i64) -> Result<Money, E> {
        Ok(Money::from_rupees(rupees))
    }

    fn visit_u64<E: de::Error>(self, rupees: u64) -> Result<Money, E> {
        Ok(Money::from_rupees(i64::try_from(rupees).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, rupees: f64) -> Result<Money, E> {
        if !rupees.is_finite() {
            return Err(E::custom(format!("rupee amount {} is not a number", rupees)));
        }
        // `as` saturates at the i64 bounds
        Ok(Money((rupees * PAISE_PER_RUPEE as f64).round() as i64))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees_and_paise() {
        let money = Money::from_paise(9950);
        assert_eq!(money.paise(), 9950);
        assert_eq!(money.rupees(), 99);
        assert_eq!(money.paise_part(), 50);

        assert_eq!(Money::from_rupees(2500).paise(), 250000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(2500).to_string(), "₹2500");
        assert_eq!(Money::from_paise(9950).to_string(), "₹99.50");
        assert_eq!(Money::from_paise(1005).to_string(), "₹10.05");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!(a + b, Money::from_rupees(15));
        assert_eq!(a - b, Money::from_rupees(5));
        assert_eq!(a * 3, Money::from_rupees(30));

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc, Money::from_rupees(5));
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_rupees(2500), Money::from_rupees(150)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_rupees(2650));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_parse_rupees() {
        assert_eq!(Money::parse_rupees("2500").unwrap(), Money::from_rupees(2500));
        assert_eq!(Money::parse_rupees(" 99.5 ").unwrap().paise(), 9950);
        assert_eq!(Money::parse_rupees("99.05").unwrap().paise(), 9905);
        assert_eq!(Money::parse_rupees(".5").unwrap().paise(), 50);
        assert_eq!(Money::parse_rupees("12.").unwrap().paise(), 1200);
    }

    #[test]
    fn test_parse_rupees_rejects_bad_input() {
        assert!(matches!(
            Money::parse_rupees(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(Money::parse_rupees("abc").is_err());
        assert!(Money::parse_rupees("-5").is_err());
        assert!(Money::parse_rupees("1e3").is_err());
        assert!(Money::parse_rupees("1.234").is_err());
        assert!(Money::parse_rupees(".").is_err());
        assert!(Money::parse_rupees("99999999999999999999").is_err());
    }

    #[test]
    fn test_scale_to_whole_rupees() {
        // 2500 × 1.2 = 3000
        assert_eq!(
            Money::from_rupees(2500).scale_to_whole_rupees(6, 5),
            Money::from_rupees(3000)
        );
        // 99.50 × 1.2 = 119.4 → 119
        assert_eq!(
            Money::from_paise(9950).scale_to_whole_rupees(6, 5),
            Money::from_rupees(119)
        );
        // 12.50 × 1.2 = 15.0 → 15; 13.75 × 1.2 = 16.5 → 17
        assert_eq!(
            Money::from_paise(1375).scale_to_whole_rupees(6, 5),
            Money::from_rupees(17)
        );
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let huge = Money::from_paise(i64::MAX / 2);
        assert_eq!(huge.multiply_quantity(4).paise(), i64::MAX);
    }

    #[test]
    fn test_addition_and_sum_saturate() {
        let half = Money::from_paise(i64::MAX / 2 + 1);
        assert_eq!((half + half).paise(), i64::MAX);
        assert_eq!((Money::from_paise(i64::MIN) - Money::from_rupees(1)).paise(), i64::MIN);

        let mut acc = half;
        acc += half;
        assert_eq!(acc.paise(), i64::MAX);

        let total: Money = [half, half, half].iter().sum();
        assert_eq!(total.paise(), i64::MAX);
    }

    #[test]
    fn test_scale_clamps_at_bounds() {
        let max = Money::from_paise(i64::MAX);
        assert_eq!(max.scale_to_whole_rupees(6, 5).paise(), i64::MAX);

        let min = Money::from_paise(i64::MIN);
        assert_eq!(min.scale_to_whole_rupees(6, 5).paise(), i64::MIN);

        assert_eq!(Money::from_rupees(i64::MAX).paise(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_rupees() {
        assert_eq!(serde_json::to_string(&Money::from_rupees(2500)).unwrap(), "2500");
        assert_eq!(serde_json::to_string(&Money::from_paise(9950)).unwrap(), "99.5");
        assert_eq!(serde_json::to_string(&Money::from_paise(1005)).unwrap(), "10.05");
    }

    #[test]
    fn test_deserializes_integer_and_decimal_rupees() {
        let whole: Money = serde_json::from_str("2500").unwrap();
        assert_eq!(whole, Money::from_rupees(2500));

        let fractional: Money = serde_json::from_str("99.5").unwrap();
        assert_eq!(fractional.paise(), 9950);

        let cents: Money = serde_json::from_str("10.05").unwrap();
        assert_eq!(cents.paise(), 1005);

        let negative: Money = serde_json::from_str("-5").unwrap();
        assert_eq!(negative.paise(), -500);

        assert!(serde_json::from_str::<Money>("\"2500\"").is_err());

        let huge: Money = serde_json::from_str("1e300").unwrap();
        assert_eq!(huge.paise(), i64::MAX);
        let huge: Money = serde_json::from_str("92233720368547759").unwrap();
        assert_eq!(huge.paise(), i64::MAX);
    }

    #[test]
    fn test_saturated_amount_survives_round_trip() {
        let max = Money::from_paise(i64::MAX);
        let json = serde_json::to_string(&max).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, max);
    }
}
