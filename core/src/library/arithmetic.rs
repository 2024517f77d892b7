//! Arithmetic builtins: add, sub, mul, div and pow, with the operator
//! aliases `+ - * / ^`.
//!
//! Integer results wrap on overflow. `div` and `pow` always produce floats.

use super::Library;
use super::common::{
    binary_op_floats, binary_op_numbers, fold_numbers, promoted_number_kind, unary_op_number,
};
use crate::error::{Arity, EvalError};
use crate::scope::FunctionTable;
use crate::variant::Variant;

pub struct Arithmetic;

/// Usage: (add 1 2 3) => 6, (+ 1 2.0) => 3.0
pub fn add(args: &[Variant]) -> Variant {
    fold_numbers(args, Arity::AtLeast(1), "add", i64::wrapping_add, |a, b| a + b)
}

/// Usage: (sub 5) => -5, (sub 5 2) => 3
pub fn sub(args: &[Variant]) -> Variant {
    const NAME: &str = "sub";

    if let Err(err) = promoted_number_kind(args, NAME) {
        return err.into();
    }

    match args.len() {
        1 => unary_op_number(args, NAME, i64::wrapping_neg, |x| -x),
        2 => binary_op_numbers(args, NAME, i64::wrapping_sub, |a, b| a - b),
        _ => EvalError::arity(NAME, Arity::OneOrTwo).into(),
    }
}

/// Usage: (mul 2 3 4) => 24
pub fn mul(args: &[Variant]) -> Variant {
    fold_numbers(args, Arity::AtLeast(1), "mul", i64::wrapping_mul, |a, b| a * b)
}

/// Usage: (div 1 2) => 0.5
pub fn div(args: &[Variant]) -> Variant {
    binary_op_floats(args, "div", |a, b| {
        if b == 0.0 {
            Err(EvalError::DivideByZero)
        } else {
            Ok(a / b)
        }
    })
}

/// Usage: (pow 2 10) => 1024.0
pub fn pow(args: &[Variant]) -> Variant {
    binary_op_floats(args, "pow", |a, b| Ok(a.powf(b)))
}

impl Library for Arithmetic {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn inject_functions(&self, table: &mut FunctionTable) {
        super::define(table, &["add", "+"], add);
        super::define(table, &["sub", "-"], sub);
        super::define(table, &["mul", "*"], mul);
        super::define(table, &["div", "/"], div);
        super::define(table, &["pow", "^"], pow);
    }
}
