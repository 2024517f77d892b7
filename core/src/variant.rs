use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::error::{DevError, EvalError};
use crate::interner::Name;
use crate::numeric::format_float;

// ============================================================================
// Kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Unknown,
    Null,
    Date,
    Bool,
    Float,
    Int,
    String,
    Identifier,
    Function,
    Error,
}

impl VariantKind {
    pub const ALL: [VariantKind; 10] = [
        VariantKind::Unknown,
        VariantKind::Null,
        VariantKind::Date,
        VariantKind::Bool,
        VariantKind::Float,
        VariantKind::Int,
        VariantKind::String,
        VariantKind::Identifier,
        VariantKind::Function,
        VariantKind::Error,
    ];

    /// Ordinal of this kind, the inverse of [`VariantKind::from_tag`]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a raw kind tag received from outside the type system.
    pub fn from_tag(tag: u8) -> Result<VariantKind, EvalError> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(EvalError::Dev(DevError::KindOutOfRange(tag)))
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantKind::Unknown => "Unknown",
            VariantKind::Null => "Null",
            VariantKind::Date => "Date",
            VariantKind::Bool => "Bool",
            VariantKind::Float => "Float",
            VariantKind::Int => "Int",
            VariantKind::String => "String",
            VariantKind::Identifier => "Identifier",
            VariantKind::Function => "Function",
            VariantKind::Error => "Error",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Signature every builtin implements. Failures come back as Error variants.
pub type Builtin = fn(&[Variant]) -> Variant;

/// A builtin resolved from a scope's function table.
#[derive(Clone, Copy)]
pub struct Function {
    name: Name,
    call: Builtin,
}

impl Function {
    pub fn new(name: Name, call: Builtin) -> Self {
        Function { name, call }
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn call(&self, args: &[Variant]) -> Variant {
        (self.call)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.call, other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

// ============================================================================
// Variant
// ============================================================================

/// Dynamically-typed runtime value.
///
/// `Error` is an ordinary value: builtins receive and return it like any
/// other variant, and callers check for it explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    #[default]
    Unknown,
    Null,
    Date(DateTime<FixedOffset>),
    Bool(bool),
    Float(f64),
    Int(i64),
    String(String),
    Identifier(Name),
    Function(Function),
    Error(EvalError),
}

impl Variant {
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Unknown => VariantKind::Unknown,
            Variant::Null => VariantKind::Null,
            Variant::Date(_) => VariantKind::Date,
            Variant::Bool(_) => VariantKind::Bool,
            Variant::Float(_) => VariantKind::Float,
            Variant::Int(_) => VariantKind::Int,
            Variant::String(_) => VariantKind::String,
            Variant::Identifier(_) => VariantKind::Identifier,
            Variant::Function(_) => VariantKind::Function,
            Variant::Error(_) => VariantKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Variant::Error(_))
    }

    fn type_error(&self, target: VariantKind) -> EvalError {
        EvalError::Type {
            actual: self.kind(),
            target,
        }
    }

    /// Reject values no builtin may compute with: an Error is surfaced as-is,
    /// an Identifier means a name escaped resolution.
    pub fn ensure_valid(&self) -> Result<(), EvalError> {
        match self {
            Variant::Error(err) => Err(err.clone()),
            Variant::Identifier(name) => Err(EvalError::UnresolvedIdentifier(name.resolve())),
            _ => Ok(()),
        }
    }

    // ========================================================================
    // Coercions
    // ========================================================================

    /// Bool, or Int tested against zero
    pub fn coerce_to_bool(&self) -> Result<bool, EvalError> {
        match self {
            Variant::Bool(b) => Ok(*b),
            Variant::Int(n) => Ok(*n != 0),
            _ => Err(self.type_error(VariantKind::Bool)),
        }
    }

    /// Int, or Bool as 0/1
    pub fn coerce_to_int(&self) -> Result<i64, EvalError> {
        match self {
            Variant::Int(n) => Ok(*n),
            Variant::Bool(b) => Ok(i64::from(*b)),
            _ => Err(self.type_error(VariantKind::Int)),
        }
    }

    /// Float, Int, or Bool as 0.0/1.0
    pub fn coerce_to_float(&self) -> Result<f64, EvalError> {
        match self {
            Variant::Float(x) => Ok(*x),
            Variant::Int(n) => Ok(*n as f64),
            Variant::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(self.type_error(VariantKind::Float)),
        }
    }

    /// Total: every kind has a string rendering.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Variant::Unknown => "UNKNOWN".to_string(),
            Variant::Null => "NIL".to_string(),
            Variant::Date(d) => format_date(d),
            Variant::Bool(b) => b.to_string(),
            Variant::Float(x) => format_float(*x),
            Variant::Int(n) => n.to_string(),
            Variant::String(s) => s.clone(),
            Variant::Identifier(name) => name.resolve(),
            Variant::Function(func) => func.name().resolve(),
            Variant::Error(err) => err.to_string(),
        }
    }

    // ========================================================================
    // Extractors
    // ========================================================================

    pub fn as_date(&self) -> Result<DateTime<FixedOffset>, EvalError> {
        match self {
            Variant::Date(d) => Ok(*d),
            _ => Err(self.type_error(VariantKind::Date)),
        }
    }

    pub fn as_identifier(&self) -> Result<Name, EvalError> {
        match self {
            Variant::Identifier(name) => Ok(*name),
            _ => Err(self.type_error(VariantKind::Identifier)),
        }
    }

    pub fn as_error(&self) -> Result<&EvalError, EvalError> {
        match self {
            Variant::Error(err) => Ok(err),
            _ => Err(self.type_error(VariantKind::Error)),
        }
    }

    pub fn as_function(&self) -> Result<Function, EvalError> {
        match self {
            Variant::Function(func) => Ok(*func),
            _ => Err(self.type_error(VariantKind::Function)),
        }
    }
}

pub(crate) fn format_date(d: &DateTime<FixedOffset>) -> String {
    d.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coerce_to_string())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Variant::Bool(b)
    }
}

impl From<i64> for Variant {
    fn from(n: i64) -> Self {
        Variant::Int(n)
    }
}

impl From<f64> for Variant {
    fn from(x: f64) -> Self {
        Variant::Float(x)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::String(s.to_string())
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::String(s)
    }
}

impl From<DateTime<FixedOffset>> for Variant {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Variant::Date(d)
    }
}

impl From<EvalError> for Variant {
    fn from(err: EvalError) -> Self {
        Variant::Error(err)
    }
}

impl<T: Into<Variant>> From<Result<T, EvalError>> for Variant {
    fn from(result: Result<T, EvalError>) -> Self {
        match result {
            Ok(value) => value.into(),
            Err(err) => Variant::Error(err),
        }
    }
}
