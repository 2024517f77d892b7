use crate::error::ParseError;
use crate::expr::{Expr, MAX_NESTING_DEPTH};
use crate::lexer::{Lexer, LexerConfig, Token, TokenKind};
use crate::literal::classify;
use crate::variant::Variant;

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Lists currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, config: LexerConfig) -> Self {
        Parser {
            lexer: Lexer::with_config(source, config),
            depth: 0,
        }
    }

    /// Next token that is not a comment
    fn next_significant(&mut self) -> Option<Token> {
        self.lexer.find(|token| token.kind != TokenKind::Comment)
    }

    fn parse_expr(&mut self, token: Token) -> Result<Expr, ParseError> {
        let text = token.text(self.lexer.source());

        match token.kind {
            TokenKind::LParen => self.parse_list(),
            TokenKind::RParen => Err(ParseError::UnexpectedClosedParen),
            TokenKind::QuotedString => {
                let inner = &text[1..text.len() - 1];
                Ok(Expr::atom(text, Variant::from(inner)))
            }
            _ => Ok(Expr::atom(text, classify(text))),
        }
    }

    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep);
        }

        self.depth += 1;
        let list = self.parse_children();
        self.depth -= 1;
        list
    }

    fn parse_children(&mut self) -> Result<Expr, ParseError> {
        let mut children = Vec::new();

        loop {
            match self.next_significant() {
                None => return Err(ParseError::UnexpectedEndOfString),
                Some(token) if token.kind == TokenKind::RParen => {
                    return Ok(Expr::List(children));
                }
                Some(token) => children.push(self.parse_expr(token)?),
            }
        }
    }

    fn parse_top_level(&mut self) -> Result<Expr, ParseError> {
        let expr = match self.next_significant() {
            Some(token) => self.parse_expr(token)?,
            None => Expr::Null,
        };

        if self.next_significant().is_some() || self.lexer.has_more_text() {
            return Err(ParseError::UnexpectedTrailingText);
        }

        Ok(expr)
    }
}

/// Parse exactly one expression. Empty or comment-only input is `Expr::Null`.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    parse_with(input, LexerConfig::default())
}

pub fn parse_with(input: &str, config: LexerConfig) -> Result<Expr, ParseError> {
    Parser::new(input, config).parse_top_level()
}
