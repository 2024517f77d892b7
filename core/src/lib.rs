//! Core language definition for varlisp
//!
//! varlisp is a small embeddable expression language: S-expression text is
//! tokenized, parsed into an [`Expr`] tree and evaluated against a [`Scope`]
//! of builtin functions. Values are [`Variant`]s, and evaluation failures are
//! values too (`Variant::Error`), so a caller only has to inspect the kind of
//! the final result.
//!
//! ```
//! use varlisp::{Scope, Variant, parse};
//!
//! let expr = parse("(+ 1 (* 2 a))").unwrap();
//! let mut scope = Scope::new(None);
//! scope.bind("a", 20_i64);
//! assert_eq!(expr.evaluate(&scope), Variant::Int(41));
//! ```

pub mod error;
pub mod eval;
pub mod expr;
pub mod host;
pub mod interner;
pub mod lexer;
pub mod library;
pub mod literal;
pub mod numeric;
pub mod parser;
pub mod scope;
pub mod variant;

// Re-export commonly used items for convenience
pub use error::{Arity, DevError, EvalError, ParseError};
pub use expr::{Expr, MAX_NESTING_DEPTH};
pub use host::HostValue;
pub use interner::Name;
pub use lexer::{Lexer, LexerConfig, Token, TokenKind};
pub use library::{Library, default_functions, load_default_libraries};
pub use numeric::NumberKind;
pub use parser::{parse, parse_with};
pub use scope::{FunctionTable, Scope};
pub use variant::{Builtin, Function, Variant, VariantKind};
