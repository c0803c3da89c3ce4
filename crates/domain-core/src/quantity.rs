//! 数量值对象

use std::fmt;
use std::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decimal_serde;

/// 数量保留的小数位数
pub const QUANTITY_SCALE: u32 = 3;

/// 数量值对象
///
/// 定点小数，构造时统一舍入到 [`QUANTITY_SCALE`] 位，之后的运算都是精确的。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(Decimal);

impl Quantity {
    pub fn new(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(QUANTITY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// 可以从当前数量中取出多少个完整的 `per_unit`（向下取整）
    ///
    /// `per_unit` 非正时返回 `None`，超出 `u64` 的结果饱和为 `u64::MAX`。
    pub fn whole_units(&self, per_unit: Quantity) -> Option<u64> {
        if !per_unit.is_positive() {
            return None;
        }
        if !self.is_positive() {
            return Some(0);
        }
        let units = match self.0.checked_div(per_unit.0) {
            Some(quotient) => quotient.floor().to_u64().unwrap_or(u64::MAX),
            None => u64::MAX,
        };
        Some(units)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        decimal_serde::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decimal_serde::deserialize(deserializer).map(Self::new)
    }
}
