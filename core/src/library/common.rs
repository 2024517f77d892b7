//! Argument checks and combinators shared by the builtin libraries.
//!
//! Every combinator checks in the same order: a left-to-right scan of the
//! arguments for errors, unresolved names and unusable kinds, then the
//! argument count, then the computation itself. Results come back as
//! variants, with failures as `Variant::Error`.

use crate::error::{Arity, EvalError};
use crate::numeric::NumberKind;
use crate::variant::{Variant, VariantKind};

pub use crate::numeric::promoted_number_kind;

// ============================================================================
// Arity
// ============================================================================

pub fn ensure_arity(args: &[Variant], expected: Arity, function: &str) -> Result<(), EvalError> {
    let n = args.len();
    let ok = match expected {
        Arity::Exactly(count) => n == count,
        Arity::AtLeast(count) => n >= count,
        Arity::AtMost(count) => n <= count,
        Arity::OneOrTwo => n == 1 || n == 2,
    };

    if ok {
        Ok(())
    } else {
        Err(EvalError::arity(function, expected))
    }
}

pub fn ensure_maximum_arity(args: &[Variant], max: usize, function: &str) -> Result<(), EvalError> {
    ensure_arity(args, Arity::AtMost(max), function)
}

pub fn ensure_minimum_arity(args: &[Variant], min: usize, function: &str) -> Result<(), EvalError> {
    ensure_arity(args, Arity::AtLeast(min), function)
}

pub fn ensure_exact_arity(args: &[Variant], count: usize, function: &str) -> Result<(), EvalError> {
    ensure_arity(args, Arity::Exactly(count), function)
}

// ============================================================================
// Argument Kinds
// ============================================================================

/// Surface the first Error or unresolved Identifier among `args`.
pub fn ensure_valid(args: &[Variant]) -> Result<(), EvalError> {
    args.iter().try_for_each(Variant::ensure_valid)
}

/// Check every argument against the kinds a builtin takes.
///
/// An empty `acceptable` list accepts any kind not in `forbidden`.
pub fn ensure_argument_types(
    args: &[Variant],
    acceptable: &[VariantKind],
    forbidden: &[VariantKind],
    function: &str,
) -> Result<(), EvalError> {
    for arg in args {
        arg.ensure_valid()?;

        let kind = arg.kind();
        if forbidden.contains(&kind) {
            return Err(EvalError::forbidden(function, kind));
        }
        if !acceptable.is_empty() && !acceptable.contains(&kind) {
            return Err(EvalError::unacceptable(kind, function));
        }
    }

    Ok(())
}

const BOOLEAN_KINDS: [VariantKind; 2] = [VariantKind::Bool, VariantKind::Int];

// ============================================================================
// Numeric Combinators
// ============================================================================

fn ints(args: &[Variant]) -> Result<Vec<i64>, EvalError> {
    args.iter().map(Variant::coerce_to_int).collect()
}

fn floats(args: &[Variant]) -> Result<Vec<f64>, EvalError> {
    args.iter().map(Variant::coerce_to_float).collect()
}

fn reduce<T: Copy>(
    values: &[T],
    function: &str,
    op: impl Fn(T, T) -> T,
) -> Result<T, EvalError> {
    match values.split_first() {
        Some((&first, rest)) => Ok(rest.iter().fold(first, |acc, &x| op(acc, x))),
        None => Err(EvalError::arity(function, Arity::AtLeast(1))),
    }
}

/// Promote once, then reduce left to right with the operator for that kind.
pub fn fold_numbers(
    args: &[Variant],
    arity: Arity,
    function: &str,
    int_op: impl Fn(i64, i64) -> i64,
    float_op: impl Fn(f64, f64) -> f64,
) -> Variant {
    let result = promoted_number_kind(args, function).and_then(|kind| {
        ensure_arity(args, arity, function)?;
        match kind {
            NumberKind::Int => reduce(&ints(args)?, function, int_op).map(Variant::Int),
            NumberKind::Float => reduce(&floats(args)?, function, float_op).map(Variant::Float),
        }
    });
    result.into()
}

pub fn unary_op_number(
    args: &[Variant],
    function: &str,
    int_op: impl Fn(i64) -> i64,
    float_op: impl Fn(f64) -> f64,
) -> Variant {
    let result = promoted_number_kind(args, function).and_then(|kind| {
        ensure_exact_arity(args, 1, function)?;
        match kind {
            NumberKind::Int => args[0].coerce_to_int().map(|n| Variant::Int(int_op(n))),
            NumberKind::Float => args[0].coerce_to_float().map(|x| Variant::Float(float_op(x))),
        }
    });
    result.into()
}

pub fn binary_op_numbers(
    args: &[Variant],
    function: &str,
    int_op: impl Fn(i64, i64) -> i64,
    float_op: impl Fn(f64, f64) -> f64,
) -> Variant {
    fold_numbers(args, Arity::Exactly(2), function, int_op, float_op)
}

/// Two numeric arguments computed as floats whatever their kinds. The
/// operator may fail, e.g. on a zero divisor.
pub fn binary_op_floats(
    args: &[Variant],
    function: &str,
    op: impl Fn(f64, f64) -> Result<f64, EvalError>,
) -> Variant {
    let result = promoted_number_kind(args, function).and_then(|_| {
        ensure_exact_arity(args, 2, function)?;
        let lhs = args[0].coerce_to_float()?;
        let rhs = args[1].coerce_to_float()?;
        op(lhs, rhs).map(Variant::Float)
    });
    result.into()
}

// ============================================================================
// Boolean and String Combinators
// ============================================================================

/// Reduce Bool or Int arguments (non-zero is true) left to right.
pub fn fold_bools(
    args: &[Variant],
    arity: Arity,
    function: &str,
    op: impl Fn(bool, bool) -> bool,
) -> Variant {
    let result = ensure_argument_types(args, &BOOLEAN_KINDS, &[], function).and_then(|()| {
        ensure_arity(args, arity, function)?;
        let values: Vec<bool> = args
            .iter()
            .map(Variant::coerce_to_bool)
            .collect::<Result<_, _>>()?;
        reduce(&values, function, op).map(Variant::Bool)
    });
    result.into()
}

pub fn unary_op_bool(args: &[Variant], function: &str, op: impl Fn(bool) -> bool) -> Variant {
    let result = ensure_argument_types(args, &BOOLEAN_KINDS, &[], function).and_then(|()| {
        ensure_exact_arity(args, 1, function)?;
        args[0].coerce_to_bool().map(|b| Variant::Bool(op(b)))
    });
    result.into()
}

/// Render every argument as a string and reduce left to right.
pub fn fold_strings(
    args: &[Variant],
    arity: Arity,
    function: &str,
    op: impl Fn(String, &str) -> String,
) -> Variant {
    let result = ensure_valid(args).and_then(|()| {
        ensure_arity(args, arity, function)?;
        let rendered: Vec<String> = args.iter().map(Variant::coerce_to_string).collect();
        match rendered.split_first() {
            Some((first, rest)) => Ok(Variant::String(
                rest.iter().fold(first.clone(), |acc, s| op(acc, s.as_str())),
            )),
            None => Err(EvalError::arity(function, Arity::AtLeast(1))),
        }
    });
    result.into()
}
