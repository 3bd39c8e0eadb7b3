//! Property-based tests for the NTRU engine and key exchange

use pqkex_algorithms::xof::XofType;
use pqkex_api::KeyExchange;
use pqkex_kem::ntru::{
    NtruParamSet, NtruPoly, NtruPrivateKey, NtruProfile, NtruPublicKey, NtruStrength, NtruTrits,
};
use pqkex_params::pqc::ntru::NTRU_PARAM_SET_COUNT;
use pqkex_tests::{run_exchange, seeded_session};
use proptest::prelude::*;

fn strength() -> impl Strategy<Value = NtruStrength> {
    prop::sample::select(NtruStrength::ALL.to_vec())
}

fn profile() -> impl Strategy<Value = NtruProfile> {
    prop::sample::select(NtruProfile::ALL.to_vec())
}

fn param_set() -> impl Strategy<Value = NtruParamSet> {
    (0..NTRU_PARAM_SET_COUNT as i32).prop_map(|id| NtruParamSet::by_id(id).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn exchange_agrees(
        strength in strength(),
        profile in profile(),
        seed in any::<u64>()
    ) {
        let mut i_ke = seeded_session(strength, profile, seed);
        let mut r_ke = seeded_session(strength, profile, seed.wrapping_add(1));

        let (i_secret, r_secret) = run_exchange(&mut i_ke, &mut r_ke).unwrap();
        prop_assert_eq!(i_secret.len(), strength.shared_secret_len());
        prop_assert_eq!(&*i_secret, &*r_secret);
    }

    #[test]
    fn random_ciphertext_is_rejected(
        seed in any::<u64>(),
        ciphertext in prop::collection::vec(any::<u8>(), 604)
    ) {
        let mut i_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, seed);
        i_ke.public_key().unwrap();

        prop_assert!(i_ke.set_public_key(&ciphertext).is_err());
        prop_assert!(i_ke.shared_secret().is_err());
    }
}

proptest! {
    #[test]
    fn garbage_public_key_leaves_no_state(
        seed in any::<u64>(),
        blob in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut r_ke = seeded_session(NtruStrength::Bits128, NtruProfile::Optimum, seed);

        prop_assert!(r_ke.set_public_key(&blob).is_err());
        prop_assert!(r_ke.public_key().unwrap().is_empty());
        prop_assert!(r_ke.shared_secret().is_err());
    }

    #[test]
    fn key_decoding_never_panics(blob in prop::collection::vec(any::<u8>(), 0..700)) {
        let _ = NtruPublicKey::decode(&blob);
        let _ = NtruPrivateKey::decode(&blob);
    }

    #[test]
    fn trits_are_exact_and_prefix_consistent(
        seed in prop::collection::vec(any::<u8>(), 1..64),
        len in 0usize..800,
        sha256 in any::<bool>()
    ) {
        let xof = if sha256 { XofType::Mgf1Sha256 } else { XofType::Mgf1Sha1 };
        let trits = NtruTrits::generate(len, xof, &seed).unwrap();
        prop_assert_eq!(trits.len(), len);
        prop_assert!(trits.as_slice().iter().all(|&t| t < 3));

        let prefix = NtruTrits::generate(len / 2, xof, &seed).unwrap();
        prop_assert_eq!(prefix.as_slice(), &trits.as_slice()[..len / 2]);
    }

    #[test]
    fn sampled_indices_are_distinct_per_factor(
        params in param_set(),
        seed in prop::collection::vec(any::<u8>(), 1..48)
    ) {
        let poly = NtruPoly::from_seed(
            params.xof_type(),
            &seed,
            params.c_bits,
            params.n,
            params.q,
            params.df,
            params.df,
            params.is_product_form,
        )
        .unwrap();
        prop_assert_eq!(poly.size(), params.private_index_count());

        let (counts, factors) = params.factor_counts();
        let mut rest = poly.indices();
        for &count in &counts[..factors] {
            let (factor, tail) = rest.split_at(2 * count as usize);
            rest = tail;

            let mut sorted = factor.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), factor.len());
            prop_assert!(factor.iter().all(|&i| i < params.n));
        }
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn dense_form_has_zero_sum(
        params in param_set(),
        seed in prop::collection::vec(any::<u8>(), 1..48)
    ) {
        let poly = NtruPoly::from_seed(
            params.xof_type(),
            &seed,
            params.c_bits,
            params.n,
            params.q,
            params.df,
            params.df,
            params.is_product_form,
        )
        .unwrap();

        // every factor has as many +1 as -1 coefficients, so F(1) = 0
        let dense = poly.to_dense();
        let sum = dense.iter().fold(0u16, |acc, &x| acc.wrapping_add(x)) & (params.q - 1);
        prop_assert_eq!(sum, 0);

        if !params.is_product_form {
            let ones = dense.iter().filter(|&&x| x == 1).count();
            let minus_ones = dense.iter().filter(|&&x| x == params.q - 1).count();
            prop_assert_eq!(ones, params.df as usize);
            prop_assert_eq!(minus_ones, params.df as usize);
        }
    }
}
