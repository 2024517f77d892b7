//! Boolean builtins. Arguments are Bool or Int, with any non-zero Int true.

use super::Library;
use super::common::{fold_bools, unary_op_bool};
use crate::error::Arity;
use crate::scope::FunctionTable;
use crate::variant::Variant;

pub struct Logical;

/// Usage: (and t 1 T) => true
pub fn and(args: &[Variant]) -> Variant {
    fold_bools(args, Arity::AtLeast(2), "and", |a, b| a && b)
}

/// Usage: (or false 0) => false
pub fn or(args: &[Variant]) -> Variant {
    fold_bools(args, Arity::AtLeast(2), "or", |a, b| a || b)
}

pub fn nand(args: &[Variant]) -> Variant {
    negate(fold_bools(args, Arity::AtLeast(2), "nand", |a, b| a && b))
}

pub fn nor(args: &[Variant]) -> Variant {
    negate(fold_bools(args, Arity::AtLeast(2), "nor", |a, b| a || b))
}

pub fn xor(args: &[Variant]) -> Variant {
    fold_bools(args, Arity::Exactly(2), "xor", |a, b| a != b)
}

pub fn xnor(args: &[Variant]) -> Variant {
    fold_bools(args, Arity::Exactly(2), "xnor", |a, b| a == b)
}

/// Usage: (not 0) => true
pub fn not(args: &[Variant]) -> Variant {
    unary_op_bool(args, "not", |b| !b)
}

fn negate(result: Variant) -> Variant {
    match result {
        Variant::Bool(b) => Variant::Bool(!b),
        other => other,
    }
}

impl Library for Logical {
    fn name(&self) -> &'static str {
        "logical"
    }

    fn inject_functions(&self, table: &mut FunctionTable) {
        super::define(table, &["and", "&&"], and);
        super::define(table, &["or", "||"], or);
        super::define(table, &["nand"], nand);
        super::define(table, &["nor"], nor);
        super::define(table, &["xor"], xor);
        super::define(table, &["xnor"], xnor);
        super::define(table, &["not", "!"], not);
    }
}
