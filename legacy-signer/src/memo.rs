//! Fixed-length user command memo

use crate::error::{Error, Result};
use core::str::FromStr;

/// Memo field size in bytes
pub const MEMO_BYTES: usize = 34;

/// Maximum number of user bytes a memo can carry
pub const MAX_MEMO_LEN: usize = MEMO_BYTES - 2;

/// Leading byte of memos built from user bytes
const USER_MEMO_TAG: u8 = 0x01;

/// A transaction memo (34 bytes).
///
/// Format: byte 0 = tag (0x01 for user bytes), byte 1 = length,
/// bytes 2..34 = content (padded with zeros).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Memo([u8; MEMO_BYTES]);

impl Memo {
    /// Encode the UTF-8 bytes of `text` as a memo
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMemo`] if `text` is longer than
    /// [`MAX_MEMO_LEN`] bytes.
    pub fn from_text(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() > MAX_MEMO_LEN {
            return Err(Error::InvalidMemo { len: bytes.len() });
        }

        let mut memo = [0u8; MEMO_BYTES];
        memo[0] = USER_MEMO_TAG;
        memo[1] = bytes.len() as u8;
        memo[2..2 + bytes.len()].copy_from_slice(bytes);
        Ok(Self(memo))
    }

    /// Borrow the encoded memo bytes
    pub const fn as_bytes(&self) -> &[u8; MEMO_BYTES] {
        &self.0
    }
}

impl Default for Memo {
    /// The memo of the empty string
    fn default() -> Self {
        let mut memo = [0u8; MEMO_BYTES];
        memo[0] = USER_MEMO_TAG;
        Self(memo)
    }
}

impl FromStr for Memo {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_text(text)
    }
}
