//! Counts the words of a text file and prints the resulting AVL tree.
//!
//! Set `RUST_LOG` to adjust diagnostics (default: `avl_words=info`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use avl_words::words::{self, WordCounts};

#[derive(Debug, Parser)]
#[command(version, about = "Count word occurrences with an AVL tree")]
struct Args {
    /// Text file to read
    #[arg(default_value = "Text.txt")]
    path: PathBuf,

    /// Also list the words ordered by number of occurrences
    #[arg(long)]
    by_count: bool,

    /// Print the tree in nested one-line form instead of indented form
    #[arg(long)]
    nested: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "avl_words=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let counts = words::count_words(&args.path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&counts, &args, &mut out)
}

/// Writes the tree, the optional listing, the insert counter and `end`.
///
/// The indented tree is followed by an empty line.
fn write_report<W: Write>(counts: &WordCounts, args: &Args, out: &mut W) -> anyhow::Result<()> {
    let written = if args.nested {
        writeln!(out, "{}", counts.to_nested_string())
    } else {
        counts.print(out).and_then(|()| writeln!(out))
    };
    written.context("failed to write tree")?;

    if args.by_count {
        words::write_listing(counts, out).context("failed to write listing")?;
    }

    writeln!(out, "{}", counts.size())?;
    writeln!(out, "end")?;
    Ok(())
}
