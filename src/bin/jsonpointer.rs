//! `jsonpointer`: print the value a JSON Pointer (RFC 6901) addresses.
//!
//! Usage:
//!   jsonpointer '<pointer>' [--input <FILE>] [--pretty]
//!
//! The document is read from stdin unless `--input` is given.

use clap::Parser;
use miette::{Context, IntoDiagnostic};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[command(name = "jsonpointer")]
#[command(about = "Look up a JSON Pointer in a JSON document", long_about = None)]
#[command(version)]
struct Cli {
    /// The pointer to resolve, e.g. "/foo/0". The empty string selects the
    /// whole document.
    pointer: String,

    /// Read the document from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the resulting value
    #[arg(short, long)]
    pretty: bool,
}

fn read_document(input: Option<&PathBuf>) -> miette::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let text = read_document(cli.input.as_ref())?;
    let doc: serde_json::Value = serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err("input is not valid JSON")?;

    let value = jsonpointer::get(&doc, &cli.pointer)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .into_diagnostic()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").into_diagnostic()?;
    Ok(())
}
