#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod command;
pub mod currency;
pub mod encoding;
pub mod error;
pub mod json;
pub mod keys;
pub mod memo;
pub mod network;
pub mod signature;
pub mod signer;

pub use command::{Body, Common, Tag, UserCommand};
pub use encoding::{encode_command, encode_string, hash_input_fields, StringMessage};
pub use error::{Error, Result};
pub use json::{
    common_from_json, delegation_from_json, payment_from_json, CommonJson, DelegationJson,
    PaymentJson,
};
pub use keys::{public_key_of, PrivateKey};
pub use memo::Memo;
pub use network::Network;
pub use signature::SignatureJson;
pub use signer::{
    sign, sign_message, sign_payment, sign_stake_delegation, sign_string,
    try_verify_payment, try_verify_stake_delegation, try_verify_string_signature, verify,
    verify_message, verify_payment, verify_stake_delegation, verify_string_signature,
};
