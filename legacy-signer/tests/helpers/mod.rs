#![allow(dead_code)]

use mina_legacy_signer::{
    json::{CommonJson, DelegationBodyJson, PaymentBodyJson},
    DelegationJson, PaymentJson, PrivateKey,
};
use mina_signer::ScalarField;
use o1_utils::FieldHelpers;
use rand::RngCore;

pub const SK_A_HEX: &str = "164244176fddb5d769b7de2027469d027ad428fadcc0c02396e6280142efb718";
pub const PK_A: &str = "B62qnzbXmRNo9q32n4SNu2mpB8e7FYYLH8NmaX6oFCBYjjQ8SbD7uzV";

pub const SK_B_HEX: &str = "3ca187a58f09da346844964310c7e0dd948a9105702b716f4d732e042e0c172e";
pub const PK_B: &str = "B62qicipYxyEHu7QjUqS7QvBipTs5CzgkYZZZkPoKVYBu6tnDUcE9Zt";

pub const PK_C: &str = "B62qrKG4Z8hnzZqp1AL8WsQhQYah3quN1qUj3SyfJA8Lw135qWWg1mi";

/// Base58 private key of a big-endian hex scalar
pub fn private_key(sec_key_hex: &str) -> String {
    let mut bytes = hex::decode(sec_key_hex).expect("invalid hex");
    bytes.reverse();
    let scalar = ScalarField::from_bytes(&bytes).expect("invalid scalar");
    PrivateKey::from_scalar(scalar)
        .expect("invalid private key")
        .to_base58()
}

/// Random base58 private key
pub fn random_private_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    // clear the top bits so the scalar is below the modulus
    bytes[31] &= 0b0011_1111;
    let scalar = ScalarField::from_bytes(&bytes).expect("invalid scalar");
    PrivateKey::from_scalar(scalar)
        .expect("invalid private key")
        .to_base58()
}

pub fn common(fee_payer: &str) -> CommonJson {
    CommonJson {
        fee: "1000000".to_string(),
        fee_payer: fee_payer.to_string(),
        nonce: "0".to_string(),
        valid_until: "4294967295".to_string(),
        memo: "hello".to_string(),
    }
}

pub fn payment(source: &str, receiver: &str, amount: &str) -> PaymentJson {
    PaymentJson {
        common: common(source),
        body: PaymentBodyJson {
            source: source.to_string(),
            receiver: receiver.to_string(),
            amount: amount.to_string(),
        },
    }
}

pub fn delegation(delegator: &str, new_delegate: &str) -> DelegationJson {
    DelegationJson {
        common: common(delegator),
        body: DelegationBodyJson {
            delegator: delegator.to_string(),
            new_delegate: new_delegate.to_string(),
        },
    }
}
