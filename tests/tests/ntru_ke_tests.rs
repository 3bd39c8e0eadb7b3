// tests/ntru_ke_tests.rs
// End-to-end NTRU key exchange tests over every strength and profile

use pqkex_algorithms::drbg::HmacDrbg;
use pqkex_api::{Error as ApiError, KeyExchange};
use pqkex_kem::ntru::{NtruKe, NtruParamSet, NtruPrivateKey, NtruProfile, NtruStrength};
use pqkex_params::pqc::ntru::NTRU_KE_PERSONALIZATION;
use pqkex_tests::{run_exchange, seeded_session, FixedEntropy};

#[test]
fn test_ntru_ke_all_methods_and_profiles() {
    let mut seed = 0;
    for strength in NtruStrength::ALL {
        assert_eq!(strength.to_string().len(), 8);

        for profile in NtruProfile::ALL {
            let mut i_ke = seeded_session(strength, profile, seed);
            let mut r_ke = seeded_session(strength, profile, seed + 1);
            seed += 2;
            assert_eq!(i_ke.method(), strength.method_name());

            let public_key = i_ke.public_key().unwrap();
            assert!(!public_key.is_empty());

            r_ke.set_public_key(&public_key).unwrap();
            let ciphertext = r_ke.public_key().unwrap();
            assert!(!ciphertext.is_empty());
            assert_eq!(ciphertext.len(), r_ke.param_set().ring_element_len());

            let r_secret = r_ke.shared_secret().unwrap();
            assert_eq!(r_secret.len(), strength.shared_secret_len());

            i_ke.set_public_key(&ciphertext).unwrap();
            let i_secret = i_ke.shared_secret().unwrap();
            assert_eq!(*i_secret, *r_secret, "{} {}", strength, profile);
        }
    }
}

#[test]
fn test_ntru_retransmission() {
    let mut i_ke = seeded_session(NtruStrength::Bits256, NtruProfile::Optimum, 11);
    let pub_key1 = i_ke.public_key().unwrap();
    let pub_key2 = i_ke.public_key().unwrap();
    assert_eq!(pub_key1, pub_key2);
}

#[test]
fn test_ntru_pubkey_oid() {
    let oid_tests: [&[u8]; 8] = [
        &[],
        &[0x00],
        &[0x01],
        &[0x02],
        &[0x02, 0x03, 0x00, 0x03, 0x10],
        &[0x01, 0x04, 0x00, 0x03, 0x10],
        &[0x01, 0x03, 0x00, 0x03, 0x10],
        &[0x01, 0x03, 0xff, 0x03, 0x10],
    ];

    for (i, oid) in oid_tests.iter().enumerate() {
        let mut r_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, 20 + i as u64);
        assert!(r_ke.set_public_key(oid).is_err(), "oid test {}", i);
        assert!(r_ke.public_key().unwrap().is_empty());
        assert!(r_ke.shared_secret().is_err());
    }
}

#[test]
fn test_ntru_wrong_set() {
    let mut i_ke = seeded_session(NtruStrength::Bits112, NtruProfile::X998Bandwidth, 30);
    let pub_key = i_ke.public_key().unwrap();

    let mut r_ke = seeded_session(NtruStrength::Bits112, NtruProfile::Optimum, 31);
    let err = r_ke.set_public_key(&pub_key).unwrap_err();
    assert!(matches!(err, ApiError::InvalidState { .. }));
    assert!(r_ke.public_key().unwrap().is_empty());
    assert!(r_ke.shared_secret().is_err());
}

#[test]
fn test_ntru_ciphertext() {
    let buf_00 = [0x00u8; 604];
    let buf_ff = [0xffu8; 604];
    let tests: [&[u8]; 4] = [&[], &[0x00], &buf_00, &buf_ff];

    for (i, ciphertext) in tests.iter().enumerate() {
        let mut i_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, 40 + i as u64);
        i_ke.public_key().unwrap();
        let err = i_ke.set_public_key(ciphertext).unwrap_err();
        if ciphertext.len() == 604 {
            assert!(matches!(err, ApiError::DecryptionFailed { .. }), "ciphertext test {}", i);
        } else {
            assert!(matches!(err, ApiError::InvalidCiphertext { .. }), "ciphertext test {}", i);
        }
        assert!(i_ke.shared_secret().is_err());
    }
}

#[test]
fn test_ntru_wrong_ciphertext() {
    let mut i_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, 50);
    let mut r_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, 51);
    let mut m_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, 52);

    i_ke.public_key().unwrap();
    let pub_key_m = m_ke.public_key().unwrap();
    r_ke.set_public_key(&pub_key_m).unwrap();
    let ciphertext = r_ke.public_key().unwrap();

    let err = i_ke.set_public_key(&ciphertext).unwrap_err();
    assert!(matches!(err, ApiError::DecryptionFailed { .. }));
    assert!(i_ke.shared_secret().is_err());

    // the intended recipient still succeeds
    m_ke.set_public_key(&ciphertext).unwrap();
    assert_eq!(*m_ke.shared_secret().unwrap(), *r_ke.shared_secret().unwrap());
}

#[test]
fn test_ntru_responder_first_message_is_ciphertext() {
    let mut i_ke = seeded_session(NtruStrength::Bits192, NtruProfile::X998Speed, 60);
    let mut r_ke = seeded_session(NtruStrength::Bits192, NtruProfile::X998Speed, 61);

    let (i_secret, r_secret) = run_exchange(&mut i_ke, &mut r_ke).unwrap();
    assert_eq!(*i_secret, *r_secret);
    assert_eq!(i_secret.len(), 48);

    // both sides keep answering with their own message
    assert_eq!(r_ke.public_key().unwrap().len(), r_ke.param_set().ring_element_len());
    assert_eq!(i_ke.public_key().unwrap().len(), i_ke.param_set().public_key_len());
}

#[test]
fn test_ntru_session_entropy_failure() {
    // too little entropy to instantiate the DRBG
    let entropy = FixedEntropy::new(vec![0x5a; 8]);
    assert!(NtruKe::new(NtruStrength::Bits128, NtruProfile::Optimum, entropy).is_err());
}

#[test]
fn test_ntru_drbg_reseed_failure_propagates() {
    let params = NtruParamSet::for_profile(NtruProfile::Optimum, NtruStrength::Bits128);
    let entropy = FixedEntropy::new(vec![0x33; 24]);
    let mut drbg =
        HmacDrbg::with_reseed_interval(params.strength_bits(), entropy, NTRU_KE_PERSONALIZATION, 1)
            .unwrap();

    // the second request needs a reseed the entropy source cannot serve
    assert!(NtruPrivateKey::generate(&mut drbg, params).is_err());
}

#[test]
fn test_ntru_os_entropy() {
    let mut i_ke = NtruKe::with_os_entropy(NtruStrength::Bits128, NtruProfile::Optimum).unwrap();
    let mut r_ke = NtruKe::with_os_entropy(NtruStrength::Bits128, NtruProfile::Optimum).unwrap();
    let (i_secret, r_secret) = run_exchange(&mut i_ke, &mut r_ke).unwrap();
    assert_eq!(*i_secret, *r_secret);
}
