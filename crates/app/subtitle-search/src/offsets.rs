/*!
Loading the `name: signed_integer_milliseconds` offsets file.
*/

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};

fn offsets_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.*): (-?\d+)\s*$").expect("valid regex"))
}

/// Parses one `name: signed_integer_milliseconds` line.
pub fn parse_offsets_line(line: &str) -> Result<(String, i64)> {
    let caps = offsets_line_pattern()
        .captures(line)
        .ok_or_else(|| AppError::MalformedOffsetsLine { line: line.to_string() })?;

    let name = caps[1].to_string();
    let offset_ms: i64 = caps[2].parse().expect("regex guarantees an optionally-signed integer");
    Ok((name, offset_ms))
}

/// Loads the offsets file at `path`, logging and skipping lines that don't parse.
pub fn load_offsets(path: &Path) -> anyhow::Result<HashMap<String, i64>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading offsets file {}: {e}", path.display()))?;

    let mut offsets = HashMap::new();
    for line in contents.lines() {
        if line.is_empty() {
            continue;
        }
        match parse_offsets_line(line) {
            Ok((name, offset_ms)) => {
                offsets.insert(name, offset_ms);
            }
            Err(err) => tracing::warn!("skipping malformed offsets line in {}: {err}", path.display()),
        }
    }

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_positive_offset() {
        assert_eq!(parse_offsets_line("Show S01E01: 1500").unwrap(), ("Show S01E01".to_string(), 1500));
    }

    #[test]
    fn parses_a_negative_offset() {
        assert_eq!(parse_offsets_line("Show S01E02: -750").unwrap(), ("Show S01E02".to_string(), -750));
    }

    #[test]
    fn rejects_a_malformed_offsets_line() {
        assert!(parse_offsets_line("no colon here").is_err());
    }
}
