//! Key text formats
//!
//! Private keys travel as base58check strings (`EK…`) and public keys as Mina
//! addresses (`B62…`). Both are decoded here into the `mina-signer` key types.

use crate::error::{Error, Result};
use mina_signer::{CompressedPubKey, Keypair, PubKey, ScalarField, SecKey};
use o1_utils::FieldHelpers;

/// Base58check version byte of private keys
pub const SECRET_KEY_VERSION: u8 = 0x5a;

/// Serialization version following the base58check version byte
const SECRET_KEY_INNER_VERSION: u8 = 0x01;

/// Size in bytes of an encoded scalar
const SCALAR_BYTES: usize = 32;

/// Secret signing key
///
/// Held only for the duration of one signing call.
#[derive(Clone)] // No Debug nor Display
pub struct PrivateKey(SecKey);

impl PrivateKey {
    /// Create a private key from a scalar field element
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] for the zero scalar.
    pub fn from_scalar(scalar: ScalarField) -> Result<Self> {
        if scalar.to_bytes().iter().all(|b| *b == 0) {
            return Err(Error::MalformedKey("zero private key".to_string()));
        }
        Ok(Self(SecKey::new(scalar)))
    }

    /// Decode a base58check private key
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] on bad base58, checksum, version,
    /// length or an out-of-range scalar.
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let raw = bs58::decode(encoded)
            .with_check(None)
            .into_vec()
            .map_err(|e| Error::MalformedKey(format!("invalid private key base58: {e}")))?;

        let scalar_bytes = match raw.as_slice() {
            [SECRET_KEY_VERSION, SECRET_KEY_INNER_VERSION, scalar @ ..]
                if scalar.len() == SCALAR_BYTES =>
            {
                scalar
            }
            [SECRET_KEY_VERSION, ..] => {
                return Err(Error::MalformedKey("invalid private key length".to_string()))
            }
            _ => return Err(Error::MalformedKey("invalid private key version".to_string())),
        };

        let scalar = ScalarField::from_bytes(scalar_bytes)
            .map_err(|_| Error::MalformedKey("private key out of range".to_string()))?;
        Self::from_scalar(scalar)
    }

    /// Encode as a base58check private key
    pub fn to_base58(&self) -> String {
        let mut raw = vec![SECRET_KEY_VERSION, SECRET_KEY_INNER_VERSION];
        raw.extend(self.0.clone().into_scalar().to_bytes());
        bs58::encode(raw).with_check().into_string()
    }

    /// Derive the signing key pair
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] if no valid public key can be derived.
    pub fn keypair(&self) -> Result<Keypair> {
        Keypair::from_secret_key(self.0.clone()).map_err(|e| Error::MalformedKey(e.to_string()))
    }

    /// Derive the public key
    ///
    /// # Errors
    ///
    /// See [`PrivateKey::keypair`].
    pub fn public_key(&self) -> Result<PubKey> {
        Ok(self.keypair()?.public)
    }
}

/// Decode a Mina address into a public key
///
/// # Errors
///
/// Returns [`Error::MalformedKey`] if `address` is not a valid address of a
/// point on the curve.
pub fn public_key_from_address(address: &str) -> Result<PubKey> {
    PubKey::from_address(address).map_err(|e| Error::MalformedKey(format!("{address:?}: {e}")))
}

/// Decode a Mina address into a compressed public key
///
/// # Errors
///
/// See [`public_key_from_address`].
pub fn compressed_from_address(address: &str) -> Result<CompressedPubKey> {
    Ok(public_key_from_address(address)?.into_compressed())
}

/// Address of the public key belonging to a base58 private key
///
/// # Errors
///
/// Returns [`Error::MalformedKey`] if `private_key` does not decode.
pub fn public_key_of(private_key: &str) -> Result<String> {
    let public = PrivateKey::from_base58(private_key)?.public_key()?;
    Ok(public.into_address())
}
