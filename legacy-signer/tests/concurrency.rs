mod helpers;

use helpers::{delegation, payment, private_key, PK_A, PK_B, SK_A_HEX};
use mina_legacy_signer::{
    sign_payment, sign_stake_delegation, sign_string, verify_payment, verify_stake_delegation,
    verify_string_signature, Network, SignatureJson,
};
use std::thread;

const THREADS: usize = 8;

fn sign_all(sk: &str) -> [SignatureJson; 3] {
    [
        sign_payment(&payment(PK_A, PK_B, "1000"), sk, Network::Testnet).unwrap(),
        sign_stake_delegation(&delegation(PK_A, PK_B), sk, Network::Mainnet).unwrap(),
        sign_string("hello world", sk, Network::Mainnet).unwrap(),
    ]
}

#[test]
fn test_concurrent_signing() {
    let sk = private_key(SK_A_HEX);
    let expected = sign_all(&sk);

    let results: Vec<[SignatureJson; 3]> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS).map(|_| s.spawn(|| sign_all(&sk))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), THREADS);
    for signatures in results {
        assert_eq!(signatures, expected);
    }
}

#[test]
fn test_concurrent_verification() {
    let sk = private_key(SK_A_HEX);
    let [payment_sig, delegation_sig, string_sig] = sign_all(&sk);
    let pay = payment(PK_A, PK_B, "1000");
    let delegate = delegation(PK_A, PK_B);

    let results: Vec<[bool; 4]> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    [
                        verify_payment(&pay, &payment_sig, PK_A, Network::Testnet),
                        verify_stake_delegation(&delegate, &delegation_sig, PK_A, Network::Mainnet),
                        verify_string_signature("hello world", &string_sig, PK_A, Network::Mainnet),
                        verify_payment(&pay, &payment_sig, PK_A, Network::Mainnet),
                    ]
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for outcome in results {
        assert_eq!(outcome, [true, true, true, false]);
    }
}
