//! Serde codec for monetary amounts.
//!
//! Remote APIs exchange amounts as plain JSON numbers. Integral amounts are
//! written as JSON integers so that `250` stays `250` on the wire; fractional
//! amounts fall back to a float. Reading accepts integers, floats and numeric
//! strings.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.with_scale(0) == *value {
        if let Some(n) = value.to_i64() {
            return serializer.serialize_i64(n);
        }
    }
    match value.to_f64() {
        Some(f) => serializer.serialize_f64(f),
        None => Err(serde::ser::Error::custom(format!(
            "amount {} is not representable as a JSON number",
            value
        ))),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = BigDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<BigDecimal, E> {
        // Go through the shortest round-trip text form so 0.1 stays 0.1.
        BigDecimal::from_str(&v.to_string()).map_err(|e| E::custom(format!("invalid amount {}: {}", v, e)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
        BigDecimal::from_str(v.trim()).map_err(|e| E::custom(format!("invalid amount '{}': {}", v, e)))
    }
}

/// Same codec for optional amounts; `null` and a missing field both map to `None`.
pub mod option {
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BigDecimal>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super")] BigDecimal);

        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "super")]
        price: BigDecimal,
    }

    #[test]
    fn integral_amount_is_written_as_json_integer() {
        let p = Priced { price: BigDecimal::from(250) };
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"price":250}"#);
    }

    #[test]
    fn fractional_amount_is_written_as_json_float() {
        let p = Priced { price: BigDecimal::from_str("12.5").unwrap() };
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"price":12.5}"#);
    }

    #[test]
    fn reads_integers_floats_and_strings() {
        let a: Priced = serde_json::from_str(r#"{"price":100}"#).unwrap();
        let b: Priced = serde_json::from_str(r#"{"price":0.1}"#).unwrap();
        let c: Priced = serde_json::from_str(r#"{"price":"29.99"}"#).unwrap();
        let d: Priced = serde_json::from_str(r#"{"price":-5}"#).unwrap();

        assert_eq!(a.price, BigDecimal::from(100));
        assert_eq!(b.price, BigDecimal::from_str("0.1").unwrap());
        assert_eq!(c.price, BigDecimal::from_str("29.99").unwrap());
        assert_eq!(d.price, BigDecimal::from(-5));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let r: Result<Priced, _> = serde_json::from_str(r#"{"price":"ten"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn optional_amount_accepts_null_and_missing() {
        #[derive(Deserialize)]
        struct Maybe {
            #[serde(default, with = "option")]
            total: Option<BigDecimal>,
        }

        let a: Maybe = serde_json::from_str(r#"{"total":null}"#).unwrap();
        let b: Maybe = serde_json::from_str(r#"{}"#).unwrap();
        let c: Maybe = serde_json::from_str(r#"{"total":42}"#).unwrap();

        assert!(a.total.is_none());
        assert!(b.total.is_none());
        assert_eq!(c.total, Some(BigDecimal::from(42)));
    }
}
