//! Engine error types.
//!
//! Only program loading can fail from the caller's point of view. Everything
//! that goes wrong *inside* a cycle (unknown encodings, out-of-range memory
//! accesses) is recorded in the statistics and execution continues, so a
//! buggy guest program runs to completion instead of crashing the engine.

use thiserror::Error;

/// Errors raised while parsing or installing a program image.
///
/// When `load` fails the simulator state is left fully reset: no partial
/// image is ever visible to a subsequent `run`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read from disk.
    #[error("failed to read program image: {0}")]
    Io(#[from] std::io::Error),

    /// A token in the text image was not a hexadecimal machine word.
    #[error("line {line}: `{token}` is not a hexadecimal machine word")]
    NonHexToken {
        /// 1-based line number of the offending token.
        line: usize,
        /// The token as it appeared in the image.
        token: String,
    },

    /// The image holds more words than fit between the base address and the
    /// end of memory.
    #[error("program image of {words} words does not fit ({capacity} words available at base)")]
    ImageTooLarge {
        /// Number of words in the image.
        words: usize,
        /// Number of words available from the base address.
        capacity: usize,
    },
}
