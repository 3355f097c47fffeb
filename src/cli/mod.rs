//! CLI argument parsing and query input

use crate::config::{Anchor, DiagnosticConfig, DEFAULT_PADDING};
use crate::diag::{ErrorKind, Position, QueryError};
use crate::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// querydiag - Caret diagnostics for query text
#[derive(Parser, Debug)]
#[command(name = "querydiag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a diagnostic for a query
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Character offset of the failure, or -1 for end of query
    #[arg(short, long, allow_negative_numbers = true)]
    pub position: i64,

    /// Diagnostic message
    #[arg(short, long)]
    pub message: String,

    /// Report an execute error instead of a syntax error
    #[arg(long)]
    pub execute: bool,

    /// Left margin for the caret and message lines
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub padding: usize,

    /// How the position relates to the query text
    #[arg(long, value_enum, default_value_t = AnchorArg::Trimmed)]
    pub anchor: AnchorArg,

    /// Read the query from a file
    #[arg(short, long, conflicts_with = "query")]
    pub file: Option<PathBuf>,

    /// Query text (use - for stdin); omit to render without context
    pub query: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorArg {
    /// Position counts from the first non-whitespace character
    Trimmed,
    /// Position counts from the start of the raw query
    Original,
}

impl From<AnchorArg> for Anchor {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Trimmed => Anchor::Trimmed,
            AnchorArg::Original => Anchor::Original,
        }
    }
}

impl RenderArgs {
    /// Configuration described by the flags
    pub fn config(&self) -> DiagnosticConfig {
        DiagnosticConfig::new()
            .with_padding(self.padding)
            .with_anchor(self.anchor.into())
    }

    pub fn kind(&self) -> ErrorKind {
        if self.execute {
            ErrorKind::Execute
        } else {
            ErrorKind::Syntax
        }
    }
}

/// Build, bind, and render the diagnostic described by `args`
pub fn render(args: &RenderArgs) -> Result<String> {
    let position = Position::from_raw(args.position)?;
    let config = args.config();
    let mut err = QueryError::with_config(args.kind(), position, args.message.as_str(), &config);

    if let Some(query) = read_query(args)? {
        err.bind(query)?;
    }

    Ok(err.render())
}

/// Resolve the query source: a file, stdin, an inline argument, or nothing
fn read_query(args: &RenderArgs) -> Result<Option<String>> {
    if let Some(path) = &args.file {
        return read_file(path).map(Some);
    }
    match args.query.as_deref() {
        Some("-") => read_stdin().map(Some),
        Some(query) => Ok(Some(query.to_string())),
        None => Ok(None),
    }
}

fn read_file(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading query file");
    Ok(fs::read_to_string(path)?)
}

fn read_stdin() -> Result<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}
