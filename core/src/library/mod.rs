//! Builtin function libraries
//!
//! A library is a named bundle of builtins that injects itself into a
//! [`FunctionTable`]. Every new scope starts from the default table, which
//! merges the bundled libraries in a fixed order so later libraries win on
//! name clashes.

pub mod addition;
pub mod arithmetic;
pub mod common;
pub mod logical;
pub mod string;

use once_cell::sync::Lazy;

use crate::interner::Name;
use crate::scope::FunctionTable;
use crate::variant::Builtin;

pub use addition::Addition;
pub use arithmetic::Arithmetic;
pub use logical::Logical;
pub use string::Strings;

pub trait Library {
    fn name(&self) -> &'static str;

    fn inject_functions(&self, table: &mut FunctionTable);
}

/// Insert `call` under each of `names`
pub(crate) fn define(table: &mut FunctionTable, names: &[&str], call: Builtin) {
    for name in names {
        table.insert(Name::new(name), call);
    }
}

// ============================================================================
// Default Table
// ============================================================================

static DEFAULT_FUNCTIONS: Lazy<FunctionTable> = Lazy::new(|| {
    let mut table = FunctionTable::default();
    load_default_libraries(&mut table);
    table
});

/// The bundled libraries in merge order. Arithmetic comes after Addition, so
/// its `+` is the one the default table keeps.
pub fn default_libraries() -> [&'static dyn Library; 4] {
    [&Addition, &Logical, &Arithmetic, &Strings]
}

pub fn load_default_libraries(table: &mut FunctionTable) {
    for library in default_libraries() {
        library.inject_functions(table);
    }
}

/// The merged default table, built once
pub fn default_functions() -> &'static FunctionTable {
    &DEFAULT_FUNCTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    fn call(name: &str, args: &[Variant]) -> Variant {
        let table = default_functions();
        let function = table.get(&Name::new(name)).expect("builtin is registered");
        function(args)
    }

    #[test]
    fn test_default_table_names() {
        let table = default_functions();
        for name in [
            "+", "-", "*", "/", "^", "add", "sub", "mul", "div", "pow", "and", "or", "nand",
            "nor", "xor", "xnor", "not", "&&", "||", "!", "concat", "++",
        ] {
            assert!(table.contains_key(&Name::new(name)), "missing {name}");
        }
    }

    #[test]
    fn test_arithmetic_plus_wins() {
        // Addition's `+` would concatenate; the default `+` rejects strings.
        let result = call("+", &[Variant::Int(1), Variant::from("a")]);
        assert!(result.is_error());
    }

    #[test]
    fn test_library_names() {
        let names: Vec<_> = default_libraries().iter().map(|lib| lib.name()).collect();
        assert_eq!(names, vec!["addition", "logical", "arithmetic", "string"]);
    }
}
