use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    const DECIMALS: u32 = 4;
    const SCALE: i64 = 10_000;

    pub const ZERO: Amount = Amount(0);
    pub const MAX: Amount = Amount(i64::MAX);
    pub const MIN: Amount = Amount(-i64::MAX);

    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    pub const fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub const fn scaled(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Price of a (possibly fractional) quantity, rounded half away from
    /// zero. `None` when the result does not fit.
    pub fn checked_mul(self, rhs: Quantity) -> Option<Self> {
        let product = self.0 as i128 * rhs.0 as i128;
        let scale = Quantity::SCALE as i128;
        let half = scale / 2;
        let rounded = if product >= 0 {
            (product + half) / scale
        } else {
            (product - half) / scale
        };
        i64::try_from(rounded).ok().map(Amount)
    }

    /// Round to `scale` decimal places (at most 4), ties toward zero.
    pub fn round_to(self, scale: u32) -> Self {
        let scale = scale.min(Self::DECIMALS);
        let step = 10_i64.pow(Self::DECIMALS - scale);
        let abs = self.0.abs();
        let mut units = abs / step;
        if (abs % step) * 2 > step {
            units += 1;
        }
        Amount(self.0.signum() * units.saturating_mul(step))
    }
}

/// Formats with 4 decimals, or with the requested precision (`{:.2}`),
/// rounding ties toward zero.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f
            .precision()
            .map_or(Self::DECIMALS, |p| (p as u32).min(Self::DECIMALS));
        let rounded = self.round_to(decimals);
        let sign = if rounded.0 < 0 { "-" } else { "" };
        let abs = rounded.0.abs();
        let whole = abs / Self::SCALE;
        if decimals == 0 {
            return write!(f, "{sign}{whole}");
        }
        let frac = (abs % Self::SCALE) / 10_i64.pow(Self::DECIMALS - decimals);
        write!(f, "{sign}{whole}.{frac:0width$}", width = decimals as usize)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Price of `rhs` whole units, saturating at the bounds of `Amount`.
impl Mul<i64> for Amount {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Amount(self.0.saturating_mul(rhs))
    }
}

/// Price of a quantity, saturating at the bounds of `Amount`.
/// Use [`Amount::checked_mul`] where overflow must be reported.
impl Mul<Quantity> for Amount {
    type Output = Self;

    fn mul(self, rhs: Quantity) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|| {
            if self.is_negative() != (rhs.0 < 0) {
                Amount::MIN
            } else {
                Amount::MAX
            }
        })
    }
}

/// Saturates instead of overflowing on very large baskets.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, amount| Amount(acc.0.saturating_add(amount.0)))
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Fixed-point quantity with 3 decimal places (grams for weight-based lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(i64);

impl Quantity {
    const SCALE: i64 = 1_000;

    pub fn from_float(value: f64) -> Self {
        Quantity((value * Self::SCALE as f64).round() as i64)
    }

    pub const fn from_scaled(value: i64) -> Self {
        Quantity(value)
    }

    pub const fn whole(units: i64) -> Self {
        Quantity(units * Self::SCALE)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Number of whole units, if the quantity has no fractional part.
    pub const fn as_whole(&self) -> Option<i64> {
        if self.0 % Self::SCALE == 0 {
            Some(self.0 / Self::SCALE)
        } else {
            None
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{sign}{}.{:03}", abs / Self::SCALE, abs % Self::SCALE)
    }
}
