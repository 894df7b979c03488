//! Error kinds shared by translation, encoding and signing

use thiserror::Error;

/// Legacy signer errors
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid base58, checksum, version or curve point in a key
    #[error("malformed key: {0}")]
    MalformedKey(String),
    /// Non-numeric or out-of-range string for a fixed-width field
    #[error("malformed numeric value {value:?} for field {field}")]
    MalformedNumeric {
        /// Name of the offending field
        field: &'static str,
        /// The rejected input
        value: String,
    },
    /// Invalid signature encoding
    #[error("malformed signature: {0}")]
    MalformedSignature(String),
    /// Memo does not fit the fixed-length memo encoding
    #[error("memo of {len} bytes exceeds the maximum memo length")]
    InvalidMemo {
        /// Length of the memo in bytes
        len: usize,
    },
    /// Malformed JSON text
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Legacy signer result
pub type Result<T> = core::result::Result<T, Error>;
