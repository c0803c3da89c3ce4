//! Decimal 的 JSON 边界
//!
//! 输出为 JSON 数字（不是字符串）。输入接受 JSON 数字或数字字符串，
//! 其余类型、NaN/Infinity 以及超出范围的值一律拒绝。

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract().is_zero() {
        if let Some(int) = value.to_i64() {
            return serializer.serialize_i64(int);
        }
    }

    // 经由十进制文本转换，得到与该小数最接近的 f64
    match value.normalize().to_string().parse::<f64>() {
        Ok(float) if float.is_finite() => serializer.serialize_f64(float),
        _ => Err(serde::ser::Error::custom(format!(
            "decimal {} cannot be represented as a JSON number",
            value
        ))),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

/// 解析数字文本
pub fn parse(text: &str) -> Result<Decimal, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("empty numeric value".to_string());
    }
    Decimal::from_str(trimmed).map_err(|_| format!("'{}' is not a valid decimal number", trimmed))
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        if !value.is_finite() {
            return Err(E::custom("non-finite numbers are not accepted"));
        }
        // 最短往返表示，避免二进制浮点噪声进入定点值
        parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        parse(value).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        value: Decimal,
    }

    fn decode(json: &str) -> Result<Decimal, serde_json::Error> {
        serde_json::from_str::<Wrapper>(json).map(|w| w.value)
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        assert_eq!(decode(r#"{"value": 19.99}"#).unwrap(), Decimal::new(1999, 2));
        assert_eq!(decode(r#"{"value": 7}"#).unwrap(), Decimal::from(7));
        assert_eq!(decode(r#"{"value": " 0.2 "}"#).unwrap(), Decimal::new(2, 1));
        assert_eq!(decode(r#"{"value": -3}"#).unwrap(), Decimal::from(-3));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(decode(r#"{"value": "abc"}"#).is_err());
        assert!(decode(r#"{"value": ""}"#).is_err());
        assert!(decode(r#"{"value": true}"#).is_err());
        assert!(decode(r#"{"value": null}"#).is_err());
        assert!(decode(r#"{"value": 1e300}"#).is_err());
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_string(&Wrapper {
            value: Decimal::new(7996, 2),
        })
        .unwrap();
        assert_eq!(json, r#"{"value":79.96}"#);

        let json = serde_json::to_string(&Wrapper {
            value: Decimal::new(4000, 2),
        })
        .unwrap();
        assert_eq!(json, r#"{"value":40}"#);
    }
}
