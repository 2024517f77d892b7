use rustyline::Result;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Helper, Highlighter, Hinter};
use varlisp::{LexerConfig, ParseError, parse_with};

/// Editor helper that keeps reading lines while a list is still open.
#[derive(Completer, Helper, Highlighter, Hinter)]
pub struct ReplHelper {
    config: LexerConfig,
}

impl ReplHelper {
    pub fn new(config: LexerConfig) -> Self {
        ReplHelper { config }
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
        if is_incomplete(ctx.input(), self.config) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// True when more input could still complete the expression
pub fn is_incomplete(input: &str, config: LexerConfig) -> bool {
    matches!(
        parse_with(input, config),
        Err(ParseError::UnexpectedEndOfString)
    )
}

#[test]
fn test_is_incomplete() {
    let config = LexerConfig::default();
    assert!(is_incomplete("(+ 1", config));
    assert!(is_incomplete("(concat \"a\"\n (+ 1 2)", config));
    assert!(!is_incomplete("(+ 1 2)", config));
    assert!(!is_incomplete("(+ 1 2))", config));
    assert!(!is_incomplete("", config));
}

#[test]
fn test_slash_separator_lines_complete() {
    let slash = LexerConfig::new().with_slash_separator(true);
    assert!(!is_incomplete("(/ 4 2)", slash));
    assert!(!is_incomplete("(concat a/b)", slash));
    assert!(is_incomplete("(/ 4\n", slash));
}
