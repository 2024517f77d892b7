use crate::error::EvalError;
use crate::variant::{Variant, VariantKind};

// ============================================================================
// Numeric Promotion
// ============================================================================

/// The operand kind a numeric builtin runs in once its arguments are promoted.
///
/// Ordered `Int < Float`; promotion is the maximum over all arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
    Int,
    Float,
}

impl NumberKind {
    pub fn promote(self, other: NumberKind) -> NumberKind {
        self.max(other)
    }

    pub fn variant_kind(self) -> VariantKind {
        match self {
            NumberKind::Int => VariantKind::Int,
            NumberKind::Float => VariantKind::Float,
        }
    }
}

/// Pick the operand kind for a numeric builtin.
///
/// Arguments are checked left to right: an Error or unresolved Identifier
/// surfaces immediately, Bool and Int keep the result at Int, Float upgrades
/// it, and any other kind is rejected as unacceptable for `function`.
pub fn promoted_number_kind(args: &[Variant], function: &str) -> Result<NumberKind, EvalError> {
    let mut promoted = NumberKind::Int;

    for arg in args {
        arg.ensure_valid()?;

        let kind = match arg {
            Variant::Bool(_) | Variant::Int(_) => NumberKind::Int,
            Variant::Float(_) => NumberKind::Float,
            other => return Err(EvalError::unacceptable(other.kind(), function)),
        };
        promoted = promoted.promote(kind);
    }

    Ok(promoted)
}

// ============================================================================
// Formatting
// ============================================================================

/// Render a float in C-style scientific notation: six fractional digits and a
/// signed exponent of at least two digits, e.g. `3.140000e+00`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let sign = if x > 0.0 { "+Inf" } else { "-Inf" };
        return sign.to_string();
    }

    let formatted = format!("{x:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}
