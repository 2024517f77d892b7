use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use log::{error, info};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config as EditorConfig, Editor};
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use varlisp::{LexerConfig, Variant};

mod helper;
mod session;

use helper::ReplHelper;
use session::Session;

const HISTORY_FILE: &str = ".varlisp_history";
const PROMPT: &str = "varlisp> ";

#[derive(Parser)]
#[command(version, about = "Evaluate varlisp expressions")]
struct Opt {
    /// Show debug output
    #[arg(short, long)]
    debug: bool,

    /// Treat `/` as a symbol separator
    #[arg(long)]
    slash_separator: bool,

    /// Evaluate one expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Bind NAME to a literal in the root scope (repeatable)
    #[arg(long, value_name = "NAME=LITERAL")]
    define: Vec<String>,
}

fn init_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    };

    match SimpleLogger::init(filter, LogConfig::default()) {
        Ok(_) => Ok(()),
        Err(e) => bail!("Failed to init logger: {}", e),
    }
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(HISTORY_FILE))
        .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
}

/// A missing history file is normal on first run
fn is_missing_file(err: &ReadlineError) -> bool {
    matches!(err, ReadlineError::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

fn load_history(editor: &mut Editor<ReplHelper, DefaultHistory>, history: &Path) {
    if let Err(e) = editor.load_history(history) {
        if !is_missing_file(&e) {
            error!("Failed to load history: {}", e);
        }
    }
}

fn init_editor(config: LexerConfig) -> Result<Editor<ReplHelper, DefaultHistory>> {
    let editor_config = EditorConfig::builder().auto_add_history(true).build();
    let mut editor = Editor::with_config(editor_config)?;
    editor.set_helper(Some(ReplHelper::new(config)));
    Ok(editor)
}

fn welcome() {
    println!("varlisp v{}", env!("CARGO_PKG_VERSION"));
    println!("Type expressions to evaluate, or (exit) to quit");
    println!();
}

/// Print a result; returns false when it was an error
fn report(value: &Variant) -> bool {
    match value {
        Variant::Error(err) => {
            eprintln!("{err}");
            false
        }
        other => {
            println!("{other}");
            true
        }
    }
}

fn eval_once(session: &mut Session, input: &str) -> Result<()> {
    let value = session.eval(input)?;
    if !report(&value) {
        bail!("evaluation failed");
    }
    Ok(())
}

fn repl(session: &mut Session) -> Result<()> {
    let mut editor = init_editor(session.config())?;
    let history = history_path();
    load_history(&mut editor, &history);
    welcome();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                info!("read: {}", &line);

                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input == "(exit)" || input == "exit" {
                    break;
                }

                match session.eval(input) {
                    Ok(value) => {
                        report(&value);
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("Press Ctrl-D or type (exit) to quit");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                error!("Unexpected error: {}", e);
                break;
            }
        }
    }

    if let Err(e) = editor.save_history(&history) {
        bail!("Failed to save history: {}", e);
    }

    Ok(())
}

fn main() -> Result<()> {
    let opts = Opt::parse();
    init_logging(opts.debug)?;

    let config = LexerConfig::new().with_slash_separator(opts.slash_separator);
    let mut session = Session::new(config);
    for definition in &opts.define {
        session.define(definition)?;
    }

    match &opts.eval {
        Some(input) => eval_once(&mut session, input),
        None => repl(&mut session),
    }
}

#[test]
fn test_only_missing_history_is_ignored() {
    let missing = ReadlineError::Io(io::Error::from(io::ErrorKind::NotFound));
    assert!(is_missing_file(&missing));

    let denied = ReadlineError::Io(io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(!is_missing_file(&denied));
    assert!(!is_missing_file(&ReadlineError::Eof));
}
