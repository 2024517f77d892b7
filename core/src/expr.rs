use std::fmt;

use crate::variant::Variant;

/// Deepest list nesting the parser accepts and the evaluator descends into.
/// Both recurse once per level, so the bound keeps them within the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A parsed expression. Trees are immutable once built and may be evaluated
/// any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Null,
    /// A leaf: the text as written plus its value, typed at parse time.
    /// Names stay `Variant::Identifier` until a scope resolves them.
    Atom { raw: String, value: Variant },
    List(Vec<Expr>),
}

impl Expr {
    pub fn atom(raw: impl Into<String>, value: Variant) -> Self {
        Expr::Atom {
            raw: raw.into(),
            value,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Expr::Null)
    }

    /// Children of a list; empty for anything else
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::List(children) => children,
            _ => &[],
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Null => write!(f, "NIL"),
            Expr::Atom { raw, .. } => write!(f, "{raw}"),
            Expr::List(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}
