//! Error taxonomy.
//!
//! Parse failures are returned through `Result`. Evaluation failures are
//! values: an [`EvalError`] travels inside `Variant::Error` and flows through
//! the evaluator like any other result.

use std::fmt;

use crate::expr::MAX_NESTING_DEPTH;
use crate::variant::VariantKind;

// ============================================================================
// Parse Errors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended while a list was still open
    UnexpectedEndOfString,
    /// A `)` appeared with no list open
    UnexpectedClosedParen,
    /// Text remained after the single top-level expression
    UnexpectedTrailingText,
    /// Lists opened deeper than `MAX_NESTING_DEPTH`
    NestingTooDeep,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            ParseError::UnexpectedEndOfString => "unexpected end of string",
            ParseError::UnexpectedClosedParen => "unexpected close paren",
            ParseError::UnexpectedTrailingText => "unexpected trailing text",
            ParseError::NestingTooDeep => {
                return write!(
                    f,
                    "parse error: lists nested deeper than {MAX_NESTING_DEPTH}"
                );
            }
        };
        write!(f, "parse error: {what}")
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// Evaluation Errors
// ============================================================================

/// The argument count a builtin expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    OneOrTwo,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
            Arity::AtMost(n) => write!(f, "at most {n}"),
            Arity::OneOrTwo => write!(f, "exactly 1 or 2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A name reached evaluation (or a builtin) without a binding
    UnresolvedIdentifier(String),
    /// The head of a list did not resolve to a callable
    FunctionNameNotFound(String),
    Arity {
        function: String,
        expected: Arity,
    },
    /// An argument kind the builtin rejects outright
    ForbiddenType {
        function: String,
        kind: VariantKind,
    },
    /// An argument kind outside the builtin's accepted set
    UnacceptableType {
        kind: VariantKind,
        function: String,
    },
    /// A host payload that cannot be held by the requested kind
    InconsistentType {
        value: String,
        kind: VariantKind,
    },
    /// A coercion between kinds that has no defined conversion
    Type {
        actual: VariantKind,
        target: VariantKind,
    },
    DivideByZero,
    /// A hand-built tree nested deeper than `MAX_NESTING_DEPTH`
    NestingTooDeep,
    /// Failure reported by host code (registered libraries, host values)
    Host(String),
    Dev(DevError),
}

impl EvalError {
    pub fn arity(function: impl Into<String>, expected: Arity) -> Self {
        EvalError::Arity {
            function: function.into(),
            expected,
        }
    }

    pub fn unacceptable(kind: VariantKind, function: impl Into<String>) -> Self {
        EvalError::UnacceptableType {
            kind,
            function: function.into(),
        }
    }

    pub fn forbidden(function: impl Into<String>, kind: VariantKind) -> Self {
        EvalError::ForbiddenType {
            function: function.into(),
            kind,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnresolvedIdentifier(name) => {
                write!(f, "scope error: unresolved identifier {name:?}")
            }
            EvalError::FunctionNameNotFound(name) => {
                write!(f, "scope error: requested function {name:?} not found")
            }
            EvalError::Arity { function, expected } => {
                write!(
                    f,
                    "arity error: expected {expected} arguments for {function:?}"
                )
            }
            EvalError::ForbiddenType { function, kind } => write!(
                f,
                "type error: argument to {function:?} can never be of type \"{kind}\""
            ),
            EvalError::UnacceptableType { kind, function } => write!(
                f,
                "type error: argument of unacceptable type \"{kind}\" passed to {function:?}"
            ),
            EvalError::InconsistentType { value, kind } => write!(
                f,
                "type error: value [{value}] is inconsistent with type \"{kind}\""
            ),
            EvalError::Type { actual, target } => write!(
                f,
                "type error: cannot represent variant of type \"{actual}\" as \"{target}\""
            ),
            EvalError::DivideByZero => write!(f, "math error: attempt to divide by zero"),
            EvalError::NestingTooDeep => write!(
                f,
                "eval error: expression nested deeper than {MAX_NESTING_DEPTH}"
            ),
            EvalError::Host(message) => write!(f, "{message}"),
            EvalError::Dev(dev) => write!(f, "{dev}"),
        }
    }
}

impl std::error::Error for EvalError {}

// ============================================================================
// Developer Errors
// ============================================================================

/// Invariant violations. Seeing one of these means a defect, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevError {
    /// A raw kind tag decoded outside the known kinds
    KindOutOfRange(u8),
}

impl fmt::Display for DevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevError::KindOutOfRange(tag) => {
                write!(f, "dev error: variant kind tag {tag} is out of range")
            }
        }
    }
}

impl std::error::Error for DevError {}

impl From<DevError> for EvalError {
    fn from(dev: DevError) -> Self {
        EvalError::Dev(dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::UnexpectedEndOfString.to_string(),
            "parse error: unexpected end of string"
        );
        assert_eq!(
            ParseError::UnexpectedClosedParen.to_string(),
            "parse error: unexpected close paren"
        );
        assert_eq!(
            ParseError::UnexpectedTrailingText.to_string(),
            "parse error: unexpected trailing text"
        );
        assert_eq!(
            ParseError::NestingTooDeep.to_string(),
            "parse error: lists nested deeper than 256"
        );
    }

    #[test]
    fn test_arity_messages() {
        assert_eq!(
            EvalError::arity("test", Arity::AtMost(2)).to_string(),
            "arity error: expected at most 2 arguments for \"test\""
        );
        assert_eq!(
            EvalError::arity("test", Arity::AtLeast(2)).to_string(),
            "arity error: expected at least 2 arguments for \"test\""
        );
        assert_eq!(
            EvalError::arity("not", Arity::Exactly(1)).to_string(),
            "arity error: expected exactly 1 arguments for \"not\""
        );
        assert_eq!(
            EvalError::arity("sub", Arity::OneOrTwo).to_string(),
            "arity error: expected exactly 1 or 2 arguments for \"sub\""
        );
    }

    #[test]
    fn test_type_messages() {
        assert_eq!(
            EvalError::unacceptable(VariantKind::Float, "or").to_string(),
            "type error: argument of unacceptable type \"Float\" passed to \"or\""
        );
        assert_eq!(
            EvalError::forbidden("test", VariantKind::String).to_string(),
            "type error: argument to \"test\" can never be of type \"String\""
        );
        assert_eq!(
            EvalError::Type {
                actual: VariantKind::String,
                target: VariantKind::Int,
            }
            .to_string(),
            "type error: cannot represent variant of type \"String\" as \"Int\""
        );
    }

    #[test]
    fn test_scope_messages() {
        assert_eq!(
            EvalError::UnresolvedIdentifier("a".to_string()).to_string(),
            "scope error: unresolved identifier \"a\""
        );
        assert_eq!(
            EvalError::FunctionNameNotFound("1".to_string()).to_string(),
            "scope error: requested function \"1\" not found"
        );
    }

    #[test]
    fn test_dev_error_converts_into_eval_error() {
        let err: EvalError = DevError::KindOutOfRange(42).into();
        assert_eq!(err.to_string(), "dev error: variant kind tag 42 is out of range");
    }
}
