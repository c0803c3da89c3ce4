//! 金额值对象

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decimal_serde;

/// 金额保留的小数位数
pub const MONEY_SCALE: u32 = 2;

/// 金额值对象（单一币种）
///
/// 构造时舍入到分（四舍五入，中点远离零），乘以整数数量后仍然精确。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// 单价乘以数量，溢出时饱和
    pub fn times(&self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        decimal_serde::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decimal_serde::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: &str) -> Money {
        Money::new(decimal_serde::parse(value).unwrap())
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(money("19.994"), money("19.99"));
        assert_eq!(money("19.995"), money("20.00"));
        assert_eq!(money("0.125").to_string(), "0.13");
    }

    #[test]
    fn test_times_is_exact() {
        assert_eq!(money("19.99").times(4), money("79.96"));
        assert_eq!(money("0.10").times(3), money("0.30"));
        assert!(money("5").times(0).is_zero());
    }

    #[test]
    fn test_sum() {
        let total: Money = [money("0.10"), money("0.20"), money("0.30")].iter().sum();
        assert_eq!(total, money("0.60"));
    }
}
