use std::mem;

use log::trace;
use rustc_hash::FxHashMap;

use crate::error::EvalError;
use crate::interner::Name;
use crate::library::{Library, default_functions};
use crate::variant::{Builtin, Function, Variant};

/// Builtins visible in one scope, keyed by name.
pub type FunctionTable = FxHashMap<Name, Builtin>;

// ============================================================================
// Scope
// ============================================================================

/// An evaluation environment.
///
/// A child scope borrows its parent, so a chain can never outlive the scope
/// it was started from. Lookups consult the local symbols, then the local
/// functions, then walk up the chain.
#[derive(Debug, Clone)]
pub struct Scope<'p> {
    parent: Option<&'p Scope<'p>>,
    evaluated_value: Variant,
    functions: FunctionTable,
    symbols: FxHashMap<Name, Variant>,
}

impl<'p> Scope<'p> {
    /// A scope carrying the default builtins
    pub fn new(parent: Option<&'p Scope<'p>>) -> Self {
        Scope::with_functions(parent, default_functions().clone())
    }

    /// A scope carrying exactly `functions`
    pub fn with_functions(parent: Option<&'p Scope<'p>>, functions: FunctionTable) -> Self {
        Scope {
            parent,
            evaluated_value: Variant::Unknown,
            functions,
            symbols: FxHashMap::default(),
        }
    }

    pub fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Bind a symbol in this scope, shadowing any binding further up.
    pub fn bind(&mut self, name: &str, value: impl Into<Variant>) {
        self.symbols.insert(Name::new(name), value.into());
    }

    pub fn unbind(&mut self, name: &str) -> Option<Variant> {
        self.symbols.remove(&Name::new(name))
    }

    pub fn define_function(&mut self, name: &str, call: Builtin) {
        self.functions.insert(Name::new(name), call);
    }

    /// Inject a library's builtins into this scope's own table.
    pub fn register(&mut self, library: &dyn Library) {
        trace!("registering library {}", library.name());
        library.inject_functions(&mut self.functions);
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn evaluated_value(&self) -> &Variant {
        &self.evaluated_value
    }

    pub fn set_evaluated_value(&mut self, value: Variant) {
        self.evaluated_value = value;
    }

    /// Move the result out, leaving `Unknown` behind
    pub fn take_evaluated_value(&mut self) -> Variant {
        mem::take(&mut self.evaluated_value)
    }

    /// Find `name` along the chain.
    pub fn lookup(&self, name: Name) -> Option<Variant> {
        let mut scope = Some(self);

        while let Some(current) = scope {
            if let Some(value) = current.symbols.get(&name) {
                return Some(value.clone());
            }
            if let Some(&call) = current.functions.get(&name) {
                return Some(Variant::Function(Function::new(name, call)));
            }
            scope = current.parent;
        }

        None
    }

    /// Like `lookup`, but a missing name becomes an `UnresolvedIdentifier`
    /// Error variant.
    pub fn resolve(&self, name: Name) -> Variant {
        match self.lookup(name) {
            Some(value) => {
                trace!("resolved {name} to {}", value.kind());
                value
            }
            None => {
                trace!("unresolved identifier {name}");
                EvalError::UnresolvedIdentifier(name.resolve()).into()
            }
        }
    }
}

impl Default for Scope<'_> {
    fn default() -> Self {
        Scope::new(None)
    }
}
