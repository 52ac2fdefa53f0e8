// src/main.rs
//
// htmlfmt — HTML pretty-printer and minifier
//
// - Default mode re-indents the document: every tag and text run on its own
//   line, two spaces of indentation per nesting level. Void elements and
//   self-closing tags never open a level; unbalanced markup clamps at zero
//   instead of failing.
// - --minify collapses the document instead: comments dropped, whitespace
//   runs shrunk to single spaces, no whitespace hugging tag punctuation.
//   Content of pre/textarea/script/style is copied through byte-for-byte.
//
// CLI flags:
//   --minify        : minify instead of pretty-printing
// Output defaults to rewriting the input file in place. On any error the
// output file is left untouched.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use htmlfmt::{format_bytes, minify_bytes};
use std::fs;
use std::path::PathBuf;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Collapse the document instead of re-indenting it
    #[arg(long, action = ArgAction::SetTrue)]
    minify: bool,

    /// Input file
    input: PathBuf,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let src = fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;

    let out = if cli.minify {
        minify_bytes(&src)
    } else {
        format_bytes(&src)
    }
    .with_context(|| format!("formatting {}", cli.input.display()))?;

    log::debug!("{} bytes in, {} bytes out", src.len(), out.len());

    let out_path = cli.output.as_ref().unwrap_or(&cli.input);
    fs::write(out_path, &out).with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}
