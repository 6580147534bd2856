//! Keys from text: whitespace or newline separated integers.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read key file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The integers found in a text, in order, and the tokens that were not
/// integers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedKeys {
    pub keys: Vec<i64>,
    pub skipped: Vec<String>,
}

pub fn parse_keys(text: &str) -> ParsedKeys {
    let mut parsed = ParsedKeys::default();
    for token in text.split_whitespace() {
        match token.parse() {
            Ok(key) => parsed.keys.push(key),
            Err(_) => parsed.skipped.push(token.to_string()),
        }
    }
    parsed
}

#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn read_keys(path: impl AsRef<Path>) -> Result<ParsedKeys, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_keys(&text);
    debug!(
        keys = parsed.keys.len(),
        skipped = parsed.skipped.len(),
        "read key file"
    );
    Ok(parsed)
}
