//! Two-column rule-table loading.
//!
//! Digit-rank tables and unit vocabularies are ordinary data: one
//! `key<TAB>value` row per line, `#` line comments and blank lines allowed.
//! Malformed rows are construction-time errors and must abort
//! initialization; a partially built relation is unsafe to share.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use winnow::prelude::*;
use winnow::token::take_while;

/// Errors raised while loading a two-column table.
#[derive(Debug, Error)]
pub enum TableError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row that is not two non-empty tab-separated columns.
    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Parse two-column table content into ordered pairs.
///
/// Row order is preserved; it is the declaration order used for
/// tie-breaking in relations built from the table.
///
/// # Example
///
/// ```
/// use cainte_relation::parse_pairs;
///
/// let pairs = parse_pairs("# units\niv\t4\nv\t5\n").unwrap();
/// assert_eq!(pairs, vec![("iv".to_string(), "4".to_string()),
///                        ("v".to_string(), "5".to_string())]);
/// ```
pub fn parse_pairs(content: &str) -> Result<Vec<(String, String)>, TableError> {
    parse_pairs_from(content, Path::new("<table>"))
}

/// Read and parse a two-column table file.
pub fn load_pairs(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, TableError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| TableError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_pairs_from(&content, path)
}

fn parse_pairs_from(content: &str, path: &Path) -> Result<Vec<(String, String)>, TableError> {
    let mut pairs = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut remaining = line;
        match pair_row(&mut remaining) {
            Ok(pair) if remaining.is_empty() => pairs.push(pair),
            _ => {
                return Err(TableError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!("expected two tab-separated columns, got '{line}'"),
                });
            }
        }
    }
    Ok(pairs)
}

/// Parse one `key<TAB>value` row.
fn pair_row(input: &mut &str) -> ModalResult<(String, String)> {
    let key: &str = take_while(1.., |c| c != '\t').parse_next(input)?;
    '\t'.parse_next(input)?;
    let value: &str = take_while(1.., |c| c != '\t').parse_next(input)?;
    Ok((key.to_string(), value.to_string()))
}
