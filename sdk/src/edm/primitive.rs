use bigdecimal::BigDecimal;
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Protocol primitive types with their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    Binary,
    Boolean,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Guid,
    Int16,
    Int32,
    Int64,
    Single,
    String,
}

impl PrimitiveType {
    /// Wire name as emitted in property metadata, e.g. `Edm.Int32`.
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Binary => "Edm.Binary",
            Self::Boolean => "Edm.Boolean",
            Self::Date => "Edm.Date",
            Self::DateTimeOffset => "Edm.DateTimeOffset",
            Self::Decimal => "Edm.Decimal",
            Self::Double => "Edm.Double",
            Self::Guid => "Edm.Guid",
            Self::Int16 => "Edm.Int16",
            Self::Int32 => "Edm.Int32",
            Self::Int64 => "Edm.Int64",
            Self::Single => "Edm.Single",
            Self::String => "Edm.String",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Runtime scalar carried by a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Single(f32),
    Double(f64),
    Decimal(BigDecimal),
    String(String),
    Guid(Uuid),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Binary(Bytes),
}

impl PrimitiveValue {
    /// Protocol type of this value.
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Self::Boolean(_) => PrimitiveType::Boolean,
            Self::Int16(_) => PrimitiveType::Int16,
            Self::Int32(_) => PrimitiveType::Int32,
            Self::Int64(_) => PrimitiveType::Int64,
            Self::Single(_) => PrimitiveType::Single,
            Self::Double(_) => PrimitiveType::Double,
            Self::Decimal(_) => PrimitiveType::Decimal,
            Self::String(_) => PrimitiveType::String,
            Self::Guid(_) => PrimitiveType::Guid,
            Self::Date(_) => PrimitiveType::Date,
            Self::DateTime(_) => PrimitiveType::DateTimeOffset,
            Self::Binary(_) => PrimitiveType::Binary,
        }
    }

    /// Render this value as a key literal per the identifier grammar.
    ///
    /// Strings are single-quoted with embedded quotes doubled; binaries are
    /// hex-encoded inside `binary'..'`; everything else renders bare.
    pub fn literal(&self) -> String {
        match self {
            Self::Boolean(v) => v.to_string(),
            Self::Int16(v) => v.to_string(),
            Self::Int32(v) => v.to_string(),
            Self::Int64(v) => v.to_string(),
            Self::Single(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::Decimal(v) => v.to_string(),
            Self::String(v) => format!("'{}'", v.replace('\'', "''")),
            Self::Guid(v) => v.to_string(),
            Self::Date(v) => v.to_string(),
            Self::DateTime(v) => v.to_rfc3339(),
            Self::Binary(v) => format!("binary'{}'", hex::encode(v)),
        }
    }
}

/// Rust scalars the protocol can carry directly.
///
/// The impls below are the primitive type table: they fix the wire type name
/// a declared field gets and how a runtime value enters the value model.
/// Naive date-times are pinned to UTC on entry.
pub trait EdmPrimitive {
    /// Protocol type for this Rust type.
    const EDM_TYPE: PrimitiveType;

    /// Move the runtime value into the protocol value model.
    fn into_edm(self) -> PrimitiveValue;
}

impl EdmPrimitive for bool {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Boolean;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Boolean(self)
    }
}

impl EdmPrimitive for i16 {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Int16;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Int16(self)
    }
}

impl EdmPrimitive for i32 {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Int32;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Int32(self)
    }
}

impl EdmPrimitive for i64 {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Int64;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Int64(self)
    }
}

impl EdmPrimitive for f32 {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Single;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Single(self)
    }
}

impl EdmPrimitive for f64 {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Double;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Double(self)
    }
}

impl EdmPrimitive for BigDecimal {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Decimal;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Decimal(self)
    }
}

impl EdmPrimitive for String {
    const EDM_TYPE: PrimitiveType = PrimitiveType::String;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::String(self)
    }
}

impl EdmPrimitive for &str {
    const EDM_TYPE: PrimitiveType = PrimitiveType::String;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::String(self.to_owned())
    }
}

impl EdmPrimitive for Uuid {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Guid;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Guid(self)
    }
}

impl EdmPrimitive for NaiveDate {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Date;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Date(self)
    }
}

impl EdmPrimitive for NaiveDateTime {
    const EDM_TYPE: PrimitiveType = PrimitiveType::DateTimeOffset;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::DateTime(self.and_utc())
    }
}

impl EdmPrimitive for DateTime<Utc> {
    const EDM_TYPE: PrimitiveType = PrimitiveType::DateTimeOffset;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::DateTime(self)
    }
}

impl EdmPrimitive for Bytes {
    const EDM_TYPE: PrimitiveType = PrimitiveType::Binary;
    fn into_edm(self) -> PrimitiveValue {
        PrimitiveValue::Binary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_qualified() {
        assert_eq!(PrimitiveType::Int32.wire_name(), "Edm.Int32");
        assert_eq!(PrimitiveType::DateTimeOffset.wire_name(), "Edm.DateTimeOffset");
        assert_eq!(PrimitiveType::Guid.to_string(), "Edm.Guid");
    }

    #[test]
    fn values_agree_with_their_table_entry() {
        assert_eq!(42i32.into_edm().primitive_type(), <i32 as EdmPrimitive>::EDM_TYPE);
        assert_eq!("x".into_edm().primitive_type(), PrimitiveType::String);
        assert_eq!(true.into_edm().primitive_type(), PrimitiveType::Boolean);
    }

    #[test]
    fn string_literals_are_quoted_and_escaped() {
        assert_eq!("plain".into_edm().literal(), "'plain'");
        assert_eq!("O'Neil".into_edm().literal(), "'O''Neil'");
    }

    #[test]
    fn numeric_literals_render_bare() {
        assert_eq!(42i32.into_edm().literal(), "42");
        assert_eq!(19.5f64.into_edm().literal(), "19.5");
    }

    #[test]
    fn naive_datetimes_are_pinned_to_utc() {
        let naive = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        match naive.into_edm() {
            PrimitiveValue::DateTime(dt) => {
                assert_eq!(dt.timezone(), Utc);
                assert_eq!(dt.to_rfc3339(), "2024-05-01T12:30:00+00:00");
            }
            other => panic!("expected DateTime, got {other:?}"),
        }
    }

    #[test]
    fn binary_literals_are_hex_encoded() {
        let value = Bytes::from_static(&[0xde, 0xad]);
        assert_eq!(value.into_edm().literal(), "binary'dead'");
    }

    #[test]
    fn guid_literals_render_bare() {
        let guid = Uuid::new_v4();
        let literal = guid.into_edm().literal();
        assert_eq!(literal, guid.to_string());
        assert!(!literal.contains('\''));
    }
}
