//! Signing and verification of legacy user commands and strings
//!
//! Each call builds its own legacy Poseidon signer context for the requested
//! network, so calls share no state.
//!
//! Signing surfaces every decoding failure to the caller. Verification
//! reports typed failures from the `try_verify_*` functions, while the
//! `verify_*` functions treat any failure as an invalid signature and return
//! `false`.

use crate::{
    encoding::StringMessage,
    error::Result,
    json::{delegation_from_json, payment_from_json, DelegationJson, PaymentJson},
    keys::{public_key_from_address, PrivateKey},
    network::Network,
    signature::SignatureJson,
    UserCommand,
};
use log::{debug, trace};
use mina_hasher::Hashable;
use mina_signer::{NetworkId, PubKey, Signature, Signer};

fn sign_hashable<H>(input: &H, private_key: &PrivateKey, network: Network) -> Result<Signature>
where
    H: 'static + Hashable<D = NetworkId>,
{
    trace_input_size(input);
    let keypair = private_key.keypair()?;
    let mut ctx = mina_signer::create_legacy::<H>(network.into());
    Ok(ctx.sign(&keypair, input))
}

fn verify_hashable<H>(
    input: &H,
    signature: &Signature,
    public_key: &PubKey,
    network: Network,
) -> bool
where
    H: 'static + Hashable<D = NetworkId>,
{
    trace_input_size(input);
    let mut ctx = mina_signer::create_legacy::<H>(network.into());
    ctx.verify(signature, public_key, input)
}

fn trace_input_size<H: Hashable>(input: &H) {
    if log::log_enabled!(log::Level::Trace) {
        let roi = input.to_roinput();
        trace!(
            "hash input of {} bytes, {} packed fields",
            roi.to_bytes().len(),
            roi.to_fields().len()
        );
    }
}

/// Collapse a verification result at the public boundary
fn valid_or_false(result: Result<bool>) -> bool {
    result.unwrap_or_else(|e| {
        debug!("rejecting signature: {e}");
        false
    })
}

/// Sign a user command
///
/// # Errors
///
/// Returns [`crate::Error::MalformedKey`] if no key pair can be derived from
/// `private_key`.
pub fn sign(
    command: &UserCommand,
    private_key: &PrivateKey,
    network: Network,
) -> Result<Signature> {
    let signature = sign_hashable(command, private_key, network)?;
    debug!("signed {:?} command on {network}", command.tag());
    Ok(signature)
}

/// Verify a user command signature
pub fn verify(
    command: &UserCommand,
    signature: &Signature,
    public_key: &PubKey,
    network: Network,
) -> bool {
    let valid = verify_hashable(command, signature, public_key, network);
    debug!(
        "{:?} command signature on {network} is {}",
        command.tag(),
        if valid { "valid" } else { "invalid" }
    );
    valid
}

/// Sign a string
///
/// # Errors
///
/// See [`sign`].
pub fn sign_message(text: &str, private_key: &PrivateKey, network: Network) -> Result<Signature> {
    let signature = sign_hashable(&StringMessage(text.to_string()), private_key, network)?;
    debug!("signed {} byte string on {network}", text.len());
    Ok(signature)
}

/// Verify a string signature
pub fn verify_message(
    text: &str,
    signature: &Signature,
    public_key: &PubKey,
    network: Network,
) -> bool {
    let valid = verify_hashable(
        &StringMessage(text.to_string()),
        signature,
        public_key,
        network,
    );
    debug!(
        "{} byte string signature on {network} is {}",
        text.len(),
        if valid { "valid" } else { "invalid" }
    );
    valid
}

/// Sign a payment with a base58 private key
///
/// # Errors
///
/// Returns any translation error of `payment` and
/// [`crate::Error::MalformedKey`] for a bad `private_key`.
pub fn sign_payment(
    payment: &PaymentJson,
    private_key: &str,
    network: Network,
) -> Result<SignatureJson> {
    let command = payment_from_json(payment)?;
    let private_key = PrivateKey::from_base58(private_key)?;
    Ok(sign(&command, &private_key, network)?.into())
}

/// Sign a stake delegation with a base58 private key
///
/// # Errors
///
/// See [`sign_payment`].
pub fn sign_stake_delegation(
    delegation: &DelegationJson,
    private_key: &str,
    network: Network,
) -> Result<SignatureJson> {
    let command = delegation_from_json(delegation)?;
    let private_key = PrivateKey::from_base58(private_key)?;
    Ok(sign(&command, &private_key, network)?.into())
}

/// Sign a string with a base58 private key
///
/// # Errors
///
/// Returns [`crate::Error::MalformedKey`] for a bad `private_key`.
pub fn sign_string(text: &str, private_key: &str, network: Network) -> Result<SignatureJson> {
    let private_key = PrivateKey::from_base58(private_key)?;
    Ok(sign_message(text, &private_key, network)?.into())
}

/// Verify a payment signature against a public key address
///
/// # Errors
///
/// Returns the first translation or decoding error of the inputs.
pub fn try_verify_payment(
    payment: &PaymentJson,
    signature: &SignatureJson,
    public_key: &str,
    network: Network,
) -> Result<bool> {
    let command = payment_from_json(payment)?;
    let signature = signature.to_signature()?;
    let public_key = public_key_from_address(public_key)?;
    Ok(verify(&command, &signature, &public_key, network))
}

/// Verify a stake delegation signature against a public key address
///
/// # Errors
///
/// See [`try_verify_payment`].
pub fn try_verify_stake_delegation(
    delegation: &DelegationJson,
    signature: &SignatureJson,
    public_key: &str,
    network: Network,
) -> Result<bool> {
    let command = delegation_from_json(delegation)?;
    let signature = signature.to_signature()?;
    let public_key = public_key_from_address(public_key)?;
    Ok(verify(&command, &signature, &public_key, network))
}

/// Verify a string signature against a public key address
///
/// # Errors
///
/// Returns the first decoding error of `signature` or `public_key`.
pub fn try_verify_string_signature(
    text: &str,
    signature: &SignatureJson,
    public_key: &str,
    network: Network,
) -> Result<bool> {
    let signature = signature.to_signature()?;
    let public_key = public_key_from_address(public_key)?;
    Ok(verify_message(text, &signature, &public_key, network))
}

/// Verify a payment signature; any malformed input is an invalid signature
pub fn verify_payment(
    payment: &PaymentJson,
    signature: &SignatureJson,
    public_key: &str,
    network: Network,
) -> bool {
    valid_or_false(try_verify_payment(payment, signature, public_key, network))
}

/// Verify a stake delegation signature; any malformed input is an invalid
/// signature
pub fn verify_stake_delegation(
    delegation: &DelegationJson,
    signature: &SignatureJson,
    public_key: &str,
    network: Network,
) -> bool {
    valid_or_false(try_verify_stake_delegation(
        delegation, signature, public_key, network,
    ))
}

/// Verify a string signature; any malformed input is an invalid signature
pub fn verify_string_signature(
    text: &str,
    signature: &SignatureJson,
    public_key: &str,
    network: Network,
) -> bool {
    valid_or_false(try_verify_string_signature(
        text, signature, public_key, network,
    ))
}
