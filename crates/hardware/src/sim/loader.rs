//! Program image loader.
//!
//! Parses the text machine-code format: one hexadecimal 32-bit word per
//! line (a leading `0x` is optional), `#` starts a line comment, blank
//! lines are ignored. Words are big-endian and loaded contiguously at the
//! configured base address by the simulator.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Parses a text program image into machine words.
///
/// # Errors
///
/// Returns [`LoadError::NonHexToken`] for any token that is not a
/// hexadecimal word.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_image;
///
/// let words = parse_image("# add five\n0x20020005\n20030003\n").unwrap();
/// assert_eq!(words, vec![0x20020005, 0x20030003]);
/// ```
pub fn parse_image(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        for token in code.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::NonHexToken {
                line: idx + 1,
                token: token.to_string(),
            })?;
            words.push(word);
        }
    }
    tracing::debug!(words = words.len(), "parsed program image");
    Ok(words)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::NonHexToken`] for malformed content.
pub fn load_image_file<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_image(&text)
}
