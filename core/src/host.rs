//! Host-supplied data.
//!
//! Embedding programs often hold values whose Rust type is only known at run
//! time (decoded JSON, database rows, ...). [`HostValue`] carries such a payload
//! and [`Variant::from_host`] turns it into a variant of a requested kind,
//! checking that the payload can actually be held by that kind.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::error::EvalError;
use crate::interner::Name;
use crate::numeric::format_float;
use crate::variant::{Variant, VariantKind, format_date};

#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Time(DateTime<FixedOffset>),
    Error(String),
}

impl HostValue {
    /// Any integer payload widened to i64. `U64` values above `i64::MAX` wrap.
    fn integer(&self) -> Option<i64> {
        match *self {
            HostValue::I8(n) => Some(i64::from(n)),
            HostValue::I16(n) => Some(i64::from(n)),
            HostValue::I32(n) => Some(i64::from(n)),
            HostValue::I64(n) => Some(n),
            HostValue::U8(n) => Some(i64::from(n)),
            HostValue::U16(n) => Some(i64::from(n)),
            HostValue::U32(n) => Some(i64::from(n)),
            HostValue::U64(n) => Some(n as i64),
            _ => None,
        }
    }

    /// Any numeric payload as f64
    fn float(&self) -> Option<f64> {
        match *self {
            HostValue::F32(x) => Some(f64::from(x)),
            HostValue::F64(x) => Some(x),
            HostValue::U64(n) => Some(n as f64),
            _ => self.integer().map(|n| n as f64),
        }
    }

    fn render(&self) -> Option<String> {
        match self {
            HostValue::Nil => None,
            HostValue::Bool(b) => Some(b.to_string()),
            HostValue::F32(_) | HostValue::F64(_) => self.float().map(format_float),
            HostValue::U64(n) => Some(n.to_string()),
            HostValue::Str(s) => Some(s.clone()),
            HostValue::Time(t) => Some(format_date(t)),
            HostValue::Error(message) => Some(message.clone()),
            _ => self.integer().map(|n| n.to_string()),
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Nil => write!(f, "<nil>"),
            HostValue::F32(x) => write!(f, "{x}"),
            HostValue::F64(x) => write!(f, "{x}"),
            other => write!(f, "{}", other.render().unwrap_or_default()),
        }
    }
}

macro_rules! host_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for HostValue {
                fn from(value: $ty) -> Self {
                    HostValue::$variant(value)
                }
            }
        )*
    };
}

host_value_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    DateTime<FixedOffset> => Time,
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::Str(value.to_string())
    }
}

impl Variant {
    /// Build a variant of `kind` from a host payload.
    ///
    /// Widening follows the coercion rules: integers and bools feed Bool,
    /// Int and Float; anything renders to String. A payload the kind cannot
    /// hold is an `InconsistentType` error.
    pub fn from_host(kind: VariantKind, value: HostValue) -> Result<Variant, EvalError> {
        let converted = match kind {
            VariantKind::Unknown => Some(Variant::Unknown),
            VariantKind::Null => Some(Variant::Null),
            VariantKind::Date => match &value {
                HostValue::Time(t) => Some(Variant::Date(*t)),
                _ => None,
            },
            VariantKind::Bool => match &value {
                HostValue::Bool(b) => Some(Variant::Bool(*b)),
                other => other.integer().map(|n| Variant::Bool(n != 0)),
            },
            VariantKind::Int => match &value {
                HostValue::Bool(b) => Some(Variant::Int(i64::from(*b))),
                other => other.integer().map(Variant::Int),
            },
            VariantKind::Float => match &value {
                HostValue::Bool(b) => Some(Variant::Float(if *b { 1.0 } else { 0.0 })),
                other => other.float().map(Variant::Float),
            },
            VariantKind::String => value.render().map(Variant::String),
            VariantKind::Identifier => match &value {
                HostValue::Str(s) => Some(Variant::Identifier(Name::new(s))),
                _ => None,
            },
            VariantKind::Error => match &value {
                HostValue::Error(message) => Some(Variant::Error(EvalError::Host(message.clone()))),
                _ => None,
            },
            VariantKind::Function => None,
        };

        converted.ok_or_else(|| EvalError::InconsistentType {
            value: value.to_string(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_from_integers() {
        assert_eq!(
            Variant::from_host(VariantKind::Bool, HostValue::U8(0)),
            Ok(Variant::Bool(false))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Bool, HostValue::I32(-3)),
            Ok(Variant::Bool(true))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Bool, HostValue::F64(1.0)),
            Err(EvalError::InconsistentType {
                value: "1".to_string(),
                kind: VariantKind::Bool,
            })
        );
    }

    #[test]
    fn test_int_widening() {
        assert_eq!(
            Variant::from_host(VariantKind::Int, HostValue::I8(-8)),
            Ok(Variant::Int(-8))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Int, HostValue::Bool(true)),
            Ok(Variant::Int(1))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Int, HostValue::U64(u64::MAX)),
            Ok(Variant::Int(-1))
        );
        assert!(Variant::from_host(VariantKind::Int, HostValue::from("12")).is_err());
    }

    #[test]
    fn test_float_widening() {
        assert_eq!(
            Variant::from_host(VariantKind::Float, HostValue::F32(0.5)),
            Ok(Variant::Float(0.5))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Float, HostValue::U16(7)),
            Ok(Variant::Float(7.0))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Float, HostValue::Bool(false)),
            Ok(Variant::Float(0.0))
        );
    }

    #[test]
    fn test_string_renders_payloads() {
        assert_eq!(
            Variant::from_host(VariantKind::String, HostValue::I64(27)),
            Ok(Variant::from("27"))
        );
        assert_eq!(
            Variant::from_host(VariantKind::String, HostValue::F64(2.5)),
            Ok(Variant::from("2.500000e+00"))
        );
        assert_eq!(
            Variant::from_host(VariantKind::String, HostValue::Error("boom".to_string())),
            Ok(Variant::from("boom"))
        );
        assert_eq!(
            Variant::from_host(VariantKind::String, HostValue::Nil),
            Err(EvalError::InconsistentType {
                value: "<nil>".to_string(),
                kind: VariantKind::String,
            })
        );
    }

    #[test]
    fn test_shape_checked_kinds() {
        let t = DateTime::parse_from_rfc3339("1974-11-11T00:00:00Z").unwrap();
        assert_eq!(
            Variant::from_host(VariantKind::Date, HostValue::from(t)),
            Ok(Variant::Date(t))
        );
        assert!(Variant::from_host(VariantKind::Date, HostValue::from("1974-11-11")).is_err());
        assert_eq!(
            Variant::from_host(VariantKind::Identifier, HostValue::from("a")),
            Ok(Variant::Identifier(Name::new("a")))
        );
        assert_eq!(
            Variant::from_host(VariantKind::Error, HostValue::Error("an error".to_string())),
            Ok(Variant::Error(EvalError::Host("an error".to_string())))
        );
        assert!(Variant::from_host(VariantKind::Function, HostValue::from("+")).is_err());
    }

    #[test]
    fn test_null_and_unknown_drop_payload() {
        assert_eq!(
            Variant::from_host(VariantKind::Null, HostValue::I64(5)),
            Ok(Variant::Null)
        );
        assert_eq!(
            Variant::from_host(VariantKind::Unknown, HostValue::Nil),
            Ok(Variant::Unknown)
        );
    }
}
