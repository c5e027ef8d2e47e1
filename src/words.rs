//! Word-frequency counting on top of [`AvlTreeMap`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::AvlTreeMap;

/// Occurrence count per word, ordered lexically.
pub type WordCounts = AvlTreeMap<String, u32>;

/// Failure to count the words of a file.
#[derive(Debug, Error)]
pub enum WordCountError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts the whitespace-separated words of `reader`.
///
/// Every token is inserted with a value of 1, so repeated words accumulate.
/// Bytes that are not valid UTF-8 are replaced, not rejected.
pub fn count_words_from<R: BufRead>(mut reader: R) -> io::Result<WordCounts> {
    let mut counts = WordCounts::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for word in String::from_utf8_lossy(&line).split_whitespace() {
            counts.insert(word.to_owned(), 1);
        }
    }
    Ok(counts)
}

/// Counts the words of the file at `path`.
pub fn try_count_words(path: impl AsRef<Path>) -> Result<WordCounts, WordCountError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordCountError::Open {
        path: path.to_owned(),
        source,
    })?;
    let counts = count_words_from(BufReader::new(file)).map_err(|source| {
        WordCountError::Read {
            path: path.to_owned(),
            source,
        }
    })?;
    tracing::debug!(
        path = %path.display(),
        words = counts.len(),
        "counted words"
    );
    Ok(counts)
}

/// Counts the words of the file at `path`.
///
/// A file that cannot be opened or read is reported through `tracing`
/// and yields an empty map.
pub fn count_words(path: impl AsRef<Path>) -> WordCounts {
    match try_count_words(path) {
        Ok(counts) => counts,
        Err(err) => {
            let cause = std::error::Error::source(&err).map(ToString::to_string);
            tracing::error!(error = %err, cause = cause.as_deref(), "word count failed");
            WordCounts::new()
        }
    }
}

/// Returns the entries of `map` ordered by count, highest first.
/// Entries with equal counts keep their lexical key order.
pub fn listing<K, V: Ord>(map: &AvlTreeMap<K, V>) -> Vec<(&K, &V)> {
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    // Stable sort, ties stay in key order
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
}

/// Writes one `word count` line per entry of `map`, in [`listing`] order.
pub fn write_listing<W: Write>(map: &WordCounts, out: &mut W) -> io::Result<()> {
    for (word, count) in listing(map) {
        writeln!(out, "{word} {count}")?;
    }
    Ok(())
}
