//! Conversion of the raw CSV cells into typed values, and back
use crate::enums::{Coded, RouteType};
use crate::error::RecordError;
use rgb::RGB8;
use serde::ser::Serializer;

/// Type of a GTFS column
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept as written
    Text,
    /// Base-10 integer
    Integer,
    /// Decimal number
    Float,
}

/// One column of a record schema
///
/// `set` coerces the raw cell and stores it in the builder `B`
pub struct Field<B> {
    /// GTFS column name
    pub name: &'static str,
    /// Type of the column
    pub kind: FieldKind,
    /// Setter of the column in the builder
    pub set: fn(&mut B, &str) -> Result<(), RecordError>,
}

/// A typed cell of a [Row]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A text cell
    Text(String),
    /// An integer cell (also used for enumerations and booleans)
    Integer(i64),
    /// A decimal cell
    Float(f64),
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        // built from an i64 cell, so always in range
        Value::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<RGB8> for Value {
    fn from(v: RGB8) -> Self {
        Value::Text(format_color(v))
    }
}

/// A record as (GTFS column, value) pairs in schema order. Absent optional values are `None`
pub type Row = Vec<(&'static str, Option<Value>)>;

/// Rust types a column can be coerced into
pub trait FromField: Sized {
    /// Kind of the column holding this type
    const KIND: FieldKind;
    /// Coerces the raw (non empty) value of `field`
    fn from_field(field: &str, value: &str) -> Result<Self, RecordError>;
}

impl FromField for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_field(_field: &str, value: &str) -> Result<Self, RecordError> {
        Ok(value.to_owned())
    }
}

impl FromField for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn from_field(field: &str, value: &str) -> Result<Self, RecordError> {
        value
            .trim()
            .parse()
            .map_err(|e| RecordError::InvalidNumber {
                field: field.to_owned(),
                value: value.to_owned(),
                source: Box::new(e),
            })
    }
}

impl FromField for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_field(field: &str, value: &str) -> Result<Self, RecordError> {
        value
            .trim()
            .parse()
            .map_err(|e| RecordError::InvalidNumber {
                field: field.to_owned(),
                value: value.to_owned(),
                source: Box::new(e),
            })
    }
}

/// Builds the schema table of a builder: `"gtfs_column" => builder_member: Type`
///
/// Every builder member is an `Option` of a [FromField] type.
macro_rules! schema {
    ($builder:ty; $($name:literal => $member:ident: $t:ty),* $(,)?) => {
        &[$($crate::codec::Field {
            name: $name,
            kind: <$t as $crate::codec::FromField>::KIND,
            set: |builder: &mut $builder, value: &str| -> Result<(), $crate::error::RecordError> {
                builder.$member = Some(<$t as $crate::codec::FromField>::from_field($name, value)?);
                Ok(())
            },
        }),*]
    };
}
pub(crate) use schema;

pub(crate) fn required<T>(field: &str, value: Option<T>) -> Result<T, RecordError> {
    value.ok_or_else(|| RecordError::MissingField(field.to_owned()))
}

pub(crate) fn invalid(field: &str) -> RecordError {
    RecordError::InvalidValue(field.to_owned())
}

/// Converts an integer code into its enumeration
pub(crate) fn coded<T: Coded>(field: &str, code: i64) -> Result<T, RecordError> {
    T::from_code(code).ok_or_else(|| invalid(field))
}

pub(crate) fn route_type(field: &str, code: i64) -> Result<RouteType, RecordError> {
    RouteType::from_code(code).ok_or_else(|| invalid(field))
}

/// A positive or null integer
pub(crate) fn unsigned(field: &str, value: i64) -> Result<u64, RecordError> {
    u64::try_from(value).map_err(|_| invalid(field))
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<f64, RecordError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(field))
    }
}

pub(crate) fn latitude(field: &str, value: f64) -> Result<f64, RecordError> {
    if (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(field))
    }
}

pub(crate) fn longitude(field: &str, value: f64) -> Result<f64, RecordError> {
    if (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(field))
    }
}

/// Only `0` and `1` are booleans
pub(crate) fn flag(field: &str, value: i64) -> Result<bool, RecordError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(invalid(field)),
    }
}

/// The timezone must be known from the IANA database, whatever its case. It is kept as written
pub(crate) fn timezone(field: &str, value: String) -> Result<String, RecordError> {
    match chrono_tz::Tz::from_str_insensitive(&value) {
        Ok(_) => Ok(value),
        Err(_) => Err(invalid(field)),
    }
}

/// Parses a `RRGGBB` hexadecimal color
pub fn parse_color(field: &str, s: &str) -> Result<RGB8, RecordError> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(field));
    }
    let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| invalid(field))?;
    let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| invalid(field))?;
    let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| invalid(field))?;
    Ok(RGB8::new(r, g, b))
}

/// Formats a color as upper case `RRGGBB`
pub fn format_color(color: RGB8) -> String {
    format!("{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

pub(crate) fn serialize_color<S>(color: &RGB8, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_color(*color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(42, i64::from_field("n", "42").unwrap());
        assert_eq!(-3, i64::from_field("n", "-3").unwrap());
        assert_eq!(2.5, f64::from_field("n", "2.5").unwrap());
        let err = i64::from_field("stop_sequence", "first").unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidNumber { ref field, ref value, .. } if field == "stop_sequence" && value == "first"
        ));
        assert!(i64::from_field("n", "1.5").is_err());
        assert!(f64::from_field("n", "east").is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(RGB8::new(0, 0xAB, 0xFF), parse_color("c", "00abFF").unwrap());
        assert_eq!("00ABFF", format_color(RGB8::new(0, 0xAB, 0xFF)));
        for bad in ["GREEN", "FFF", "FFFFFFF", "+1FFFF", "0x1234", "ééé"] {
            assert!(
                matches!(parse_color("route_color", bad), Err(RecordError::InvalidValue(ref f)) if f == "route_color"),
                "{bad} should be refused"
            );
        }
    }

    #[test]
    fn timezones() {
        assert!(timezone("tz", "Europe/Brussels".to_owned()).is_ok());
        assert!(timezone("tz", "America/Montreal".to_owned()).is_ok());
        assert!(timezone("tz", "Nowhere/Fake".to_owned()).is_err());
        assert_eq!(
            "europe/brussels",
            timezone("tz", "europe/brussels".to_owned()).unwrap()
        );
    }

    #[test]
    fn ranges() {
        assert!(latitude("lat", 90.0).is_ok());
        assert!(latitude("lat", -90.1).is_err());
        assert!(longitude("lon", -180.0).is_ok());
        assert!(longitude("lon", 180.5).is_err());
        assert!(latitude("lat", f64::NAN).is_err());
        assert!(non_negative("d", 0.0).is_ok());
        assert!(non_negative("d", -0.5).is_err());
        assert_eq!(3, unsigned("s", 3).unwrap());
        assert!(unsigned("s", -1).is_err());
        assert_eq!(4_294_967_296, unsigned("s", 4_294_967_296).unwrap());
        assert_eq!(i64::MAX as u64, unsigned("s", i64::MAX).unwrap());
        assert!(flag("monday", 2).is_err());
    }
}
