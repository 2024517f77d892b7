use anyhow::{Result, anyhow, bail};
use log::debug;
use varlisp::{Expr, LexerConfig, ParseError, Scope, Variant, parse_with};

/// One root scope shared by every line evaluated in a session.
pub struct Session {
    root: Scope<'static>,
    config: LexerConfig,
}

impl Session {
    pub fn new(config: LexerConfig) -> Self {
        Session {
            root: Scope::new(None),
            config,
        }
    }

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Seed the root scope from a `NAME=LITERAL` definition.
    pub fn define(&mut self, definition: &str) -> Result<()> {
        let (name, value) = parse_definition(definition, self.config)?;
        debug!("defining {name} as {value:?}");
        self.root.bind(&name, value);
        Ok(())
    }

    pub fn eval(&mut self, input: &str) -> Result<Variant, ParseError> {
        let expr = parse_with(input, self.config)?;
        Ok(expr.eval(&mut self.root).take_evaluated_value())
    }
}

/// Split `NAME=LITERAL` and type the literal the way the parser types atoms.
pub fn parse_definition(definition: &str, config: LexerConfig) -> Result<(String, Variant)> {
    let (name, literal) = definition
        .split_once('=')
        .ok_or_else(|| anyhow!("definition {definition:?} is not NAME=LITERAL"))?;

    let name = name.trim();
    if name.is_empty() {
        bail!("definition {definition:?} has an empty name");
    }

    match parse_with(literal.trim(), config)? {
        Expr::Atom {
            value: Variant::Identifier(ident),
            ..
        } => bail!("{ident:?} in definition of {name:?} is not a literal"),
        Expr::Atom { value, .. } => Ok((name.to_string(), value)),
        other => bail!("definition of {name:?} must be a single literal, got {other}"),
    }
}
