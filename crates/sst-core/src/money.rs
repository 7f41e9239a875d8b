//! # Money -- Integer Soles and UIT Multipliers
//!
//! Amounts are integers. `Soles` counts céntimos (1/100 PEN);
//! `UitMultiplier` counts hundredths of a reference unit. The standard
//! category's fine table is expressed in UIT multiples, so converting a
//! table cell to money is one integer multiply and one half-up rounding
//! to the céntimo.
//!
//! ## Formatting
//!
//! `Display` follows `es-PE` currency style: `S/ 175,065` when the amount
//! is whole, `S/ 240.75` otherwise.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SstError;

// ─── Soles ───────────────────────────────────────────────────────────

/// A non-negative amount of Peruvian soles, stored as céntimos.
///
/// Serializes as the integer céntimo count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Soles(u64);

impl Soles {
    /// Zero soles.
    pub const ZERO: Soles = Soles(0);

    /// Build from a céntimo count.
    pub const fn from_centimos(centimos: u64) -> Self {
        Self(centimos)
    }

    /// Build from a whole number of soles, saturating at the maximum.
    pub const fn from_soles(soles: u64) -> Self {
        Self(soles.saturating_mul(100))
    }

    /// Build from a whole number of soles, `None` if the céntimo count
    /// overflows.
    pub const fn checked_from_soles(soles: u64) -> Option<Self> {
        match soles.checked_mul(100) {
            Some(centimos) => Some(Self(centimos)),
            None => None,
        }
    }

    /// The céntimo count.
    pub const fn centimos(&self) -> u64 {
        self.0
    }

    /// Whole soles, rounded half-up.
    pub fn rounded_soles(&self) -> u64 {
        (self.0 + 50) / 100
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self × count`, saturating at `u64::MAX` céntimos.
    pub fn times(self, count: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(count)))
    }

    /// `self − other`, floored at zero.
    pub fn saturating_sub(self, other: Soles) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `self + other`, saturating at `u64::MAX` céntimos.
    pub fn saturating_add(self, other: Soles) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Add for Soles {
    type Output = Soles;

    fn add(self, rhs: Soles) -> Soles {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Soles {
    fn add_assign(&mut self, rhs: Soles) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Soles {
    fn sum<I: Iterator<Item = Soles>>(iter: I) -> Self {
        iter.fold(Soles::ZERO, Add::add)
    }
}

impl std::fmt::Display for Soles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = group_thousands(self.0 / 100);
        let cents = self.0 % 100;
        if cents == 0 {
            write!(f, "S/ {whole}")
        } else {
            write!(f, "S/ {whole}.{cents:02}")
        }
    }
}

impl FromStr for Soles {
    type Err = SstError;

    /// Parse `175065`, `240.75`, `240.5`, `S/ 1,230.50` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| SstError::InvalidAmount {
            input: s.to_string(),
            reason,
        };

        let cleaned: String = s
            .trim()
            .trim_start_matches("S/")
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        if cleaned.is_empty() {
            return Err(invalid("empty amount"));
        }

        let (whole, frac) = match cleaned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (cleaned.as_str(), ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("non-digit characters"));
        }
        if frac.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount too large"))?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse().map_err(|_| invalid("bad fraction"))?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Soles)
            .ok_or_else(|| invalid("amount too large"))
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

// ─── Reference Unit ──────────────────────────────────────────────────

/// The UIT (*Unidad Impositiva Tributaria*) in force for a given year.
///
/// Updated yearly by the tax authority; only the standard category's
/// fines depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceUnit {
    /// Fiscal year the value applies to.
    pub year: u16,
    /// Value of one UIT.
    pub value: Soles,
}

impl ReferenceUnit {
    /// UIT for 2026: S/ 5,500.
    pub const UIT_2026: ReferenceUnit = ReferenceUnit {
        year: 2026,
        value: Soles::from_soles(5_500),
    };

    /// The built-in current value.
    pub const CURRENT: ReferenceUnit = Self::UIT_2026;

    /// A reference unit for an arbitrary year.
    pub const fn new(year: u16, value: Soles) -> Self {
        Self { year, value }
    }
}

impl Default for ReferenceUnit {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl std::fmt::Display for ReferenceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UIT {} = {}", self.year, self.value)
    }
}

// ─── UIT Multiplier ──────────────────────────────────────────────────

/// A multiple of the reference unit, in hundredths (`31.83` UIT is `3183`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UitMultiplier(u32);

impl UitMultiplier {
    /// Build from hundredths of a UIT.
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// The hundredths count.
    pub const fn hundredths(&self) -> u32 {
        self.0
    }

    /// Convert to money: `multiplier × unit`, rounded half-up to the céntimo.
    pub fn apply(&self, unit: ReferenceUnit) -> Soles {
        let product = u128::from(self.0) * u128::from(unit.value.centimos());
        let centimos = (product + 50) / 100;
        Soles(u64::try_from(centimos).unwrap_or(u64::MAX))
    }
}

impl std::fmt::Display for UitMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_soles_overflow() {
        let huge = u64::MAX / 100 + 1;
        assert_eq!(Soles::checked_from_soles(huge), None);
        assert_eq!(Soles::from_soles(huge).centimos(), u64::MAX);
        assert_eq!(
            Soles::checked_from_soles(5_500),
            Some(Soles::from_centimos(550_000))
        );
    }

    #[test]
    fn test_display_whole_amount_has_no_decimals() {
        assert_eq!(Soles::from_soles(175_065).to_string(), "S/ 175,065");
        assert_eq!(Soles::from_soles(0).to_string(), "S/ 0");
        assert_eq!(Soles::from_soles(1_000_000).to_string(), "S/ 1,000,000");
    }

    #[test]
    fn test_display_fractional_amount() {
        assert_eq!(Soles::from_centimos(24_075).to_string(), "S/ 240.75");
        assert_eq!(Soles::from_centimos(123_050).to_string(), "S/ 1,230.50");
        assert_eq!(Soles::from_centimos(5).to_string(), "S/ 0.05");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("175065".parse::<Soles>().unwrap(), Soles::from_soles(175_065));
        assert_eq!("240.75".parse::<Soles>().unwrap(), Soles::from_centimos(24_075));
        assert_eq!("240.5".parse::<Soles>().unwrap(), Soles::from_centimos(24_050));
        assert_eq!("S/ 1,230.50".parse::<Soles>().unwrap(), Soles::from_centimos(123_050));
        assert_eq!(".5".parse::<Soles>().unwrap(), Soles::from_centimos(50));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Soles>().is_err());
        assert!("abc".parse::<Soles>().is_err());
        assert!("1.234".parse::<Soles>().is_err());
        assert!("-5".parse::<Soles>().is_err());
        assert!(".".parse::<Soles>().is_err());
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let a = Soles::from_soles(10);
        let b = Soles::from_soles(25);
        assert_eq!(a.saturating_sub(b), Soles::ZERO);
        assert_eq!(b.saturating_sub(a), Soles::from_soles(15));
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Soles::from_centimos(58_850);
        assert_eq!(unit.times(3), Soles::from_centimos(176_550));
        let total: Soles = [unit, unit].into_iter().sum();
        assert_eq!(total, Soles::from_centimos(117_700));
    }

    #[test]
    fn test_multiplier_apply_is_exact_for_table_values() {
        let uit = ReferenceUnit::UIT_2026;
        assert_eq!(
            UitMultiplier::from_hundredths(3183).apply(uit),
            Soles::from_soles(175_065)
        );
        assert_eq!(
            UitMultiplier::from_hundredths(1494).apply(uit),
            Soles::from_soles(82_170)
        );
        assert_eq!(
            UitMultiplier::from_hundredths(13).apply(uit),
            Soles::from_soles(715)
        );
    }

    #[test]
    fn test_multiplier_apply_rounds_half_up() {
        // 0.13 × S/ 0.05 = 0.0065 soles = 0.65 céntimos → 1 céntimo
        let unit = ReferenceUnit::new(2000, Soles::from_centimos(5));
        assert_eq!(UitMultiplier::from_hundredths(13).apply(unit), Soles::from_centimos(1));
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(UitMultiplier::from_hundredths(3183).to_string(), "31.83");
        assert_eq!(UitMultiplier::from_hundredths(45).to_string(), "0.45");
    }

    #[test]
    fn test_rounded_soles() {
        assert_eq!(Soles::from_centimos(24_075).rounded_soles(), 241);
        assert_eq!(Soles::from_centimos(24_049).rounded_soles(), 240);
    }

    #[test]
    fn test_reference_unit_default_is_2026() {
        assert_eq!(ReferenceUnit::default().year, 2026);
        assert_eq!(ReferenceUnit::default().value, Soles::from_soles(5_500));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatted amounts parse back to the same céntimo count.
        #[test]
        fn display_parses_back(centimos in 0u64..10_000_000_000) {
            let amount = Soles::from_centimos(centimos);
            prop_assert_eq!(amount.to_string().parse::<Soles>().unwrap(), amount);
        }

        /// `saturating_sub` never exceeds the minuend.
        #[test]
        fn saturating_sub_bounded(a in any::<u64>(), b in any::<u64>()) {
            let diff = Soles::from_centimos(a).saturating_sub(Soles::from_centimos(b));
            prop_assert!(diff.centimos() <= a);
        }

        /// Applying a multiplier is monotone in the multiplier.
        #[test]
        fn multiplier_apply_monotone(h in 0u32..20_000, extra in 0u32..1_000) {
            let unit = ReferenceUnit::UIT_2026;
            prop_assert!(
                UitMultiplier::from_hundredths(h).apply(unit)
                    <= UitMultiplier::from_hundredths(h + extra).apply(unit)
            );
        }
    }
}
