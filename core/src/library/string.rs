use super::Library;
use super::common::fold_strings;
use crate::error::Arity;
use crate::scope::FunctionTable;
use crate::variant::Variant;

pub struct Strings;

/// Join the string renderings of every argument.
/// Usage: (concat "n=" 27) => "n=27"
pub fn concat(args: &[Variant]) -> Variant {
    fold_strings(args, Arity::AtLeast(1), "concat", |mut acc, s| {
        acc.push_str(s);
        acc
    })
}

impl Library for Strings {
    fn name(&self) -> &'static str {
        "string"
    }

    fn inject_functions(&self, table: &mut FunctionTable) {
        super::define(table, &["concat", "++"], concat);
    }
}
