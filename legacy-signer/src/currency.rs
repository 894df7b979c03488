//! Fixed-width numeric types for legacy user commands.
//!
//! Every value crosses the JSON boundary as a decimal string to avoid precision
//! loss, so each type parses from a string of ASCII digits and rejects
//! anything that does not fit its bit width.

use crate::error::{Error, Result};
use core::fmt;

/// Parse an unsigned decimal string of ASCII digits only.
///
/// Signs, whitespace and the empty string are rejected, as is any value that
/// overflows `T`.
fn parse_decimal<T: core::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    let malformed = || Error::MalformedNumeric {
        field,
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    value.parse::<T>().map_err(|_| malformed())
}

/// Generates a newtype wrapper around a fixed-width unsigned integer.
macro_rules! impl_number {
    ($name:ident, $inner:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($inner);

        impl $name {
            /// The zero value.
            pub const ZERO: Self = Self(0);

            /// The maximum value.
            pub const MAX: Self = Self(<$inner>::MAX);

            /// Creates a new value.
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns the inner value.
            #[must_use]
            pub const fn inner(&self) -> $inner {
                self.0
            }

            /// Parses the decimal string `value` of the JSON field `field`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::MalformedNumeric`] if `value` is not a decimal
            /// number or does not fit the bit width.
            pub fn from_decimal(field: &'static str, value: &str) -> Result<Self> {
                parse_decimal::<$inner>(field, value).map(Self)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> $inner {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_number!(
    Amount,
    u64,
    "An amount of currency in nanomina (1 MINA = 1e9 nanomina)."
);

impl_number!(Fee, u64, "A transaction fee in nanomina.");

impl_number!(Nonce, u32, "An account nonce.");

impl_number!(
    Slot,
    u32,
    "A global slot number, used as the `valid_until` bound of a command."
);
