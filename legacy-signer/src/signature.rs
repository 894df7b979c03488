//! Signature wire formats
//!
//! A legacy signature travels as a pair of decimal strings, the x-coordinate
//! of the commitment point (`field`) and the signature scalar (`scalar`). It
//! also has a base58check text form.

use crate::error::{Error, Result};
use mina_signer::{BaseField, ScalarField, Signature};
use num_bigint::BigUint;
use o1_utils::FieldHelpers;
use serde::{Deserialize, Serialize};

/// Base58check version byte of signatures
pub const SIGNATURE_VERSION: u8 = 0x9a;

/// Serialization version following the base58check version byte
const SIGNATURE_INNER_VERSION: u8 = 0x01;

/// Size in bytes of each encoded signature component
const COMPONENT_BYTES: usize = 32;

/// JSON form of a signature
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureJson {
    /// x-coordinate of the commitment point R, as a decimal string
    pub field: String,
    /// Signature scalar, as a decimal string
    pub scalar: String,
}

fn malformed(name: &str, value: &str) -> Error {
    Error::MalformedSignature(format!("invalid {name} {value:?}"))
}

/// Parse an unsigned decimal string of ASCII digits only
fn parse_decimal(name: &str, value: &str) -> Result<BigUint> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(name, value));
    }
    value.parse().map_err(|_| malformed(name, value))
}

/// Decode a decimal component into a field element strictly below the modulus
fn component_from_decimal<F>(name: &str, value: &str) -> Result<F>
where
    F: FieldHelpers<F> + Copy,
{
    let mut bytes = parse_decimal(name, value)?.to_bytes_le();
    if bytes.len() > COMPONENT_BYTES {
        return Err(malformed(name, value));
    }
    bytes.resize(COMPONENT_BYTES, 0);
    component_from_bytes(name, &bytes).map_err(|_| malformed(name, value))
}

/// Decode little-endian component bytes into a field element strictly below
/// the modulus
fn component_from_bytes<F>(name: &str, bytes: &[u8]) -> Result<F>
where
    F: FieldHelpers<F> + Copy,
{
    // values at or above the modulus do not survive the round trip
    F::from_bytes(bytes)
        .ok()
        .filter(|f| f.to_bytes() == bytes)
        .ok_or_else(|| Error::MalformedSignature(format!("invalid {name}")))
}

fn component_to_decimal<F: FieldHelpers<F>>(f: F) -> String {
    BigUint::from_bytes_le(&f.to_bytes()).to_string()
}

impl SignatureJson {
    /// Decode into a signature
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSignature`] if either component is not a
    /// decimal number below its field modulus.
    pub fn to_signature(&self) -> Result<Signature> {
        let rx: BaseField = component_from_decimal("field", &self.field)?;
        let s: ScalarField = component_from_decimal("scalar", &self.scalar)?;
        Ok(Signature::new(rx, s))
    }

    /// Encode as base58check text
    ///
    /// # Errors
    ///
    /// See [`SignatureJson::to_signature`].
    pub fn to_base58(&self) -> Result<String> {
        let signature = self.to_signature()?;
        let mut raw = vec![SIGNATURE_VERSION, SIGNATURE_INNER_VERSION];
        raw.extend(signature.rx.to_bytes());
        raw.extend(signature.s.to_bytes());
        Ok(bs58::encode(raw).with_check().into_string())
    }

    /// Decode base58check text
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSignature`] on bad base58, checksum, version,
    /// length or out-of-range components.
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let raw = bs58::decode(encoded)
            .with_check(None)
            .into_vec()
            .map_err(|e| Error::MalformedSignature(format!("invalid base58: {e}")))?;

        let components = match raw.as_slice() {
            [SIGNATURE_VERSION, SIGNATURE_INNER_VERSION, components @ ..]
                if components.len() == 2 * COMPONENT_BYTES =>
            {
                components
            }
            _ => {
                return Err(Error::MalformedSignature(
                    "invalid version or length".to_string(),
                ))
            }
        };

        let (rx, s) = components.split_at(COMPONENT_BYTES);
        let rx: BaseField = component_from_bytes("field", rx)?;
        let s: ScalarField = component_from_bytes("scalar", s)?;
        Ok(Signature::new(rx, s).into())
    }
}

impl From<Signature> for SignatureJson {
    fn from(signature: Signature) -> Self {
        Self {
            field: component_to_decimal(signature.rx),
            scalar: component_to_decimal(signature.s),
        }
    }
}
