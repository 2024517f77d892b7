use std::fmt;

use log::trace;

// ============================================================================
// Configuration
// ============================================================================

/// Lexer options.
///
/// `/` is not a separator by default, so `11/11/1974` lexes as one Symbol and
/// `/` can be used as an operator name. Turning the flag on splits symbols at
/// every slash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerConfig {
    pub slash_is_separator: bool,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slash_separator(mut self, enabled: bool) -> Self {
        self.slash_is_separator = enabled;
        self
    }

    /// Characters that end a Symbol
    pub fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || c == '(' || c == ')' || (self.slash_is_separator && c == '/')
    }
}

// ============================================================================
// Token Types
// ============================================================================

/// Token classification. `Begin`, `End` and `Unknown` bracket the real kinds
/// and are never produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Begin,
    LParen,
    RParen,
    Comment,
    QuotedString,
    Symbol,
    End,
    Unknown,
}

impl TokenKind {
    /// Decode a kind from its ordinal; anything past `End` is `Unknown`.
    pub fn from_index(index: u8) -> TokenKind {
        match index {
            0 => TokenKind::Begin,
            1 => TokenKind::LParen,
            2 => TokenKind::RParen,
            3 => TokenKind::Comment,
            4 => TokenKind::QuotedString,
            5 => TokenKind::Symbol,
            6 => TokenKind::End,
            _ => TokenKind::Unknown,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Begin => "BEGIN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comment => "COMMENT",
            TokenKind::QuotedString => "QUOTEDSTRING",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::End => "END",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// A classified span of the source text, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// The slice of `source` this token covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

// ============================================================================
// Lexer
// ============================================================================

enum Scan {
    Matched(Token),
    Declined,
    /// The scanner recognised its opening but the token is malformed
    Failed,
}

type Scanner<'a> = fn(&mut Lexer<'a>) -> Scan;

/// Lazy tokenizer. Each call to `next_token` scans exactly one token.
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Lexer {
            source,
            position: 0,
            config,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    /// True while anything other than whitespace is left to scan
    pub fn has_more_text(&self) -> bool {
        self.rest().chars().any(|c| !c.is_whitespace())
    }

    fn read_char(&mut self, expected: char, kind: TokenKind) -> Scan {
        match self.current_char() {
            Some(c) if c == expected => {
                let start = self.position;
                self.position += c.len_utf8();
                Scan::Matched(Token {
                    kind,
                    start,
                    end: self.position,
                })
            }
            _ => Scan::Declined,
        }
    }

    fn read_lparen(&mut self) -> Scan {
        self.read_char('(', TokenKind::LParen)
    }

    fn read_rparen(&mut self) -> Scan {
        self.read_char(')', TokenKind::RParen)
    }

    /// Block comment `/* ... */`; without a closing `*/` the whole scan fails.
    fn read_comment(&mut self) -> Scan {
        let rest = self.rest();
        if !rest.starts_with("/*") {
            return Scan::Declined;
        }

        match rest[2..].find("*/") {
            Some(offset) => {
                let start = self.position;
                self.position += 2 + offset + 2;
                Scan::Matched(Token {
                    kind: TokenKind::Comment,
                    start,
                    end: self.position,
                })
            }
            None => Scan::Failed,
        }
    }

    /// Double-quoted string. An unterminated quote restores the cursor and
    /// declines, leaving the text to the symbol scanner.
    fn read_quoted_string(&mut self) -> Scan {
        if self.current_char() != Some('"') {
            return Scan::Declined;
        }

        let start = self.position;
        self.position += 1;

        while let Some(c) = self.current_char() {
            self.position += c.len_utf8();
            if c == '"' {
                return Scan::Matched(Token {
                    kind: TokenKind::QuotedString,
                    start,
                    end: self.position,
                });
            }
        }

        self.position = start;
        Scan::Declined
    }

    /// Maximal run of non-separators. When `/` separates symbols, a slash
    /// on its own is a one-character Symbol so it can still name division.
    fn read_symbol(&mut self) -> Scan {
        let start = self.position;

        if self.config.slash_is_separator && self.current_char() == Some('/') {
            self.position += 1;
            return Scan::Matched(Token {
                kind: TokenKind::Symbol,
                start,
                end: self.position,
            });
        }

        while let Some(c) = self.current_char() {
            if self.config.is_separator(c) {
                break;
            }
            self.position += c.len_utf8();
        }

        if start == self.position {
            return Scan::Declined;
        }

        Scan::Matched(Token {
            kind: TokenKind::Symbol,
            start,
            end: self.position,
        })
    }

    // ========================================================================
    // Main Tokenization
    // ========================================================================

    /// Scan the next token, or `None` once the input is exhausted or no
    /// scanner can make progress.
    pub fn next_token(&mut self) -> Option<Token> {
        let scanners: [Scanner<'a>; 5] = [
            Lexer::read_lparen,
            Lexer::read_rparen,
            Lexer::read_comment,
            Lexer::read_quoted_string,
            Lexer::read_symbol,
        ];

        self.skip_whitespace();
        if self.is_eof() {
            return None;
        }

        for scanner in scanners {
            match scanner(self) {
                Scan::Matched(token) => {
                    trace!(
                        "token {} {:?} at {}..{}",
                        token.kind,
                        token.text(self.source),
                        token.start,
                        token.end
                    );
                    return Some(token);
                }
                Scan::Declined => continue,
                Scan::Failed => break,
            }
        }

        trace!("lexer stopped at offset {}", self.position);
        None
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
