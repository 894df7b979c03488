mod helpers;

use helpers::{payment, private_key, random_private_key, PK_A, PK_B, PK_C, SK_A_HEX};
use mina_legacy_signer::{
    public_key_of, sign_payment, try_verify_payment, verify_payment, Error, Network, PaymentJson,
    SignatureJson,
};

#[test]
fn test_sign_payment_scenario() {
    let sk = private_key(SK_A_HEX);
    assert_eq!(public_key_of(&sk).unwrap(), PK_A);

    let payment = payment(PK_A, PK_B, "5000000000");
    let signature = sign_payment(&payment, &sk, Network::Testnet).expect("failed to sign");

    assert!(verify_payment(&payment, &signature, PK_A, Network::Testnet));
    assert!(!verify_payment(&payment, &signature, PK_A, Network::Mainnet));
}

#[test]
fn test_sign_payment_deterministic() {
    let sk = private_key(SK_A_HEX);
    let payment = payment(PK_A, PK_B, "1");

    assert_eq!(
        sign_payment(&payment, &sk, Network::Mainnet).unwrap(),
        sign_payment(&payment, &sk, Network::Mainnet).unwrap()
    );
    assert_ne!(
        sign_payment(&payment, &sk, Network::Mainnet).unwrap(),
        sign_payment(&payment, &sk, Network::Testnet).unwrap()
    );
}

#[test]
fn test_random_keys_round_trip() {
    for _ in 0..4 {
        let sk = random_private_key();
        let pk = public_key_of(&sk).unwrap();
        let payment = payment(&pk, PK_C, "123456789");

        for network in [Network::Mainnet, Network::Testnet] {
            let signature = sign_payment(&payment, &sk, network).unwrap();
            assert!(verify_payment(&payment, &signature, &pk, network));
            // wrong signer
            assert!(!verify_payment(&payment, &signature, PK_C, network));
        }
    }
}

#[test]
fn test_tampered_payment_rejected() {
    let sk = private_key(SK_A_HEX);
    let signed = payment(PK_A, PK_B, "5000000000");
    let signature = sign_payment(&signed, &sk, Network::Testnet).unwrap();

    let tampers: [(&str, fn(&mut PaymentJson)); 7] = [
        ("amount", |p| p.body.amount = "5000000001".to_string()),
        ("nonce", |p| p.common.nonce = "1".to_string()),
        ("fee", |p| p.common.fee = "1000001".to_string()),
        ("validUntil", |p| p.common.valid_until = "4294967294".to_string()),
        ("source", |p| p.body.source = PK_C.to_string()),
        ("receiver", |p| p.body.receiver = PK_C.to_string()),
        ("memo", |p| p.common.memo = "hellp".to_string()),
    ];

    for (name, tamper) in tampers {
        let mut tampered = signed.clone();
        tamper(&mut tampered);
        assert!(
            !verify_payment(&tampered, &signature, PK_A, Network::Testnet),
            "tampered {name} still verifies"
        );
    }

    assert!(verify_payment(&signed, &signature, PK_A, Network::Testnet));
}

#[test]
fn test_tampered_signature_rejected() {
    let sk = private_key(SK_A_HEX);
    let payment = payment(PK_A, PK_B, "5000000000");
    let signature = sign_payment(&payment, &sk, Network::Testnet).unwrap();

    let mut bumped_scalar = signature.clone();
    bumped_scalar.scalar = bump(&signature.scalar);
    assert!(!verify_payment(&payment, &bumped_scalar, PK_A, Network::Testnet));

    let mut bumped_field = signature.clone();
    bumped_field.field = bump(&signature.field);
    assert!(!verify_payment(&payment, &bumped_field, PK_A, Network::Testnet));
}

/// Change the last decimal digit of `value`
fn bump(value: &str) -> String {
    let (head, last) = value.split_at(value.len() - 1);
    let last = if last == "0" { "1" } else { "0" };
    format!("{head}{last}")
}

#[test]
fn test_verify_never_raises() {
    let sk = private_key(SK_A_HEX);
    let payment = payment(PK_A, PK_B, "5000000000");
    let signature = sign_payment(&payment, &sk, Network::Testnet).unwrap();

    let malformed_signatures = [
        SignatureJson {
            field: String::new(),
            scalar: signature.scalar.clone(),
        },
        SignatureJson {
            field: signature.field.clone(),
            scalar: "not a number".to_string(),
        },
        SignatureJson {
            field: "9".repeat(90),
            scalar: signature.scalar.clone(),
        },
    ];
    for bad in &malformed_signatures {
        assert!(!verify_payment(&payment, bad, PK_A, Network::Testnet));
        assert!(matches!(
            try_verify_payment(&payment, bad, PK_A, Network::Testnet),
            Err(Error::MalformedSignature(_))
        ));
    }

    for bad_key in ["", "B62q", "EKFdTXQ9Rv5Ae4h9ZFyEzDjGrFRDBeqDnxa2vhzqUzKLqtgWFDrX", PK_B] {
        assert!(!verify_payment(&payment, &signature, bad_key, Network::Testnet));
    }
    assert!(matches!(
        try_verify_payment(&payment, &signature, "B62q", Network::Testnet),
        Err(Error::MalformedKey(_))
    ));
    assert!(!try_verify_payment(&payment, &signature, PK_B, Network::Testnet).unwrap());

    let mut bad_command = payment.clone();
    bad_command.body.amount = "-5".to_string();
    assert!(!verify_payment(&bad_command, &signature, PK_A, Network::Testnet));
    assert!(matches!(
        try_verify_payment(&bad_command, &signature, PK_A, Network::Testnet),
        Err(Error::MalformedNumeric {
            field: "amount",
            ..
        })
    ));
}

#[test]
fn test_sign_payment_errors() {
    let payment = payment(PK_A, PK_B, "5000000000");

    for bad_key in ["", "EKnotakey", PK_A] {
        assert!(matches!(
            sign_payment(&payment, bad_key, Network::Mainnet),
            Err(Error::MalformedKey(_))
        ));
    }

    let mut long_memo = payment.clone();
    long_memo.common.memo = "m".repeat(33);
    assert!(matches!(
        sign_payment(&long_memo, &private_key(SK_A_HEX), Network::Mainnet),
        Err(Error::InvalidMemo { len: 33 })
    ));
}
