//! A standalone `+` that adds numbers and concatenates anything else.
//!
//! Not part of the merged default table's final `+` (arithmetic's wins), but
//! available to hosts that assemble their own function table.

use super::Library;
use super::common::{ensure_valid, fold_numbers, fold_strings};
use crate::error::Arity;
use crate::scope::FunctionTable;
use crate::variant::Variant;

pub struct Addition;

/// Usage: (+ 1 2.5) => 3.5, (+ "a" 1) => "a1"
pub fn plus(args: &[Variant]) -> Variant {
    if let Err(err) = ensure_valid(args) {
        return err.into();
    }

    let numeric = args
        .iter()
        .all(|arg| matches!(arg, Variant::Bool(_) | Variant::Int(_) | Variant::Float(_)));

    if numeric {
        fold_numbers(args, Arity::AtLeast(1), "+", i64::wrapping_add, |a, b| a + b)
    } else {
        fold_strings(args, Arity::AtLeast(1), "+", |acc, s| acc + s)
    }
}

impl Library for Addition {
    fn name(&self) -> &'static str {
        "addition"
    }

    fn inject_functions(&self, table: &mut FunctionTable) {
        super::define(table, &["+"], plus);
    }
}
