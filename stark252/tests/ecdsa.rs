//! STARK ECDSA tests.

#![cfg(feature = "ecdsa")]

use hex_literal::hex;
use proptest::prelude::*;
use stark252::{
    Error, FieldElement,
    ecdsa::{
        self, RecoverableSignature, Signature, SigningKey, VerifyingKey,
        signature::{Signer, Verifier, hazmat::PrehashSigner, hazmat::PrehashVerifier},
    },
};

fn fe(bytes: [u8; 32]) -> FieldElement {
    FieldElement::from_bytes(&bytes.into()).unwrap()
}

const PRIVATE_KEY: [u8; 32] =
    hex!("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79");
const STARK_KEY: [u8; 32] =
    hex!("02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159");
const MESSAGE_HASH: [u8; 32] =
    hex!("06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76");

#[test]
fn rfc6979_signature() {
    let signature = ecdsa::sign(&fe(PRIVATE_KEY), &fe(MESSAGE_HASH)).unwrap();

    assert_eq!(
        signature.signature().r_bytes().as_slice(),
        &hex!("061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f")
    );
    assert_eq!(
        signature.signature().s_bytes().as_slice(),
        &hex!("04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9a")
    );
    assert_eq!(signature.v(), 1);
}

#[test]
fn public_key() {
    assert_eq!(
        ecdsa::get_public_key(&fe(PRIVATE_KEY)),
        Ok(fe(STARK_KEY))
    );
}

#[test]
fn verify_accepts_either_sign_of_public_key() {
    let signing_key = SigningKey::from_bytes(&PRIVATE_KEY.into()).unwrap();
    let signature = signing_key
        .sign_prehash_recoverable(&fe(MESSAGE_HASH))
        .unwrap();

    let positive = signing_key.verifying_key().clone();
    let negative = VerifyingKey::from_affine(-*positive.as_affine()).unwrap();

    for verifying_key in [positive, negative] {
        assert_eq!(
            verifying_key.verify_prehash_field(&fe(MESSAGE_HASH), signature.signature()),
            Ok(true)
        );
    }
}

#[test]
fn verify_rejects_other_message() {
    let signature = ecdsa::sign(&fe(PRIVATE_KEY), &fe(MESSAGE_HASH)).unwrap();
    let other = fe(MESSAGE_HASH) + FieldElement::ONE;
    assert_eq!(
        ecdsa::verify(&fe(STARK_KEY), &other, signature.signature()),
        Ok(false)
    );
}

#[test]
fn verify_rejects_other_key() {
    let signature = ecdsa::sign(&fe(PRIVATE_KEY), &fe(MESSAGE_HASH)).unwrap();
    let other_key = ecdsa::get_public_key(&FieldElement::from_u64(2)).unwrap();
    assert_eq!(
        ecdsa::verify(&other_key, &fe(MESSAGE_HASH), signature.signature()),
        Ok(false)
    );
}

#[test]
fn verify_rejects_out_of_range_message_hash() {
    let signature = ecdsa::sign(&fe(PRIVATE_KEY), &fe(MESSAGE_HASH)).unwrap();
    let too_large = fe(hex!(
        "0800000000000000000000000000000000000000000000000000000000000000"
    ));
    assert_eq!(
        ecdsa::verify(&fe(STARK_KEY), &too_large, signature.signature()),
        Err(Error::InvalidMessageHash)
    );
}

#[test]
fn signature_components_are_range_checked() {
    let bound = fe(hex!(
        "0800000000000000000000000000000000000000000000000000000000000000"
    ));
    assert_eq!(
        Signature::new(FieldElement::ZERO, FieldElement::ONE),
        Err(Error::InvalidR)
    );
    assert_eq!(Signature::new(bound, FieldElement::ONE), Err(Error::InvalidR));
    assert_eq!(
        Signature::new(FieldElement::ONE, FieldElement::ZERO),
        Err(Error::InvalidS)
    );
    assert_eq!(Signature::new(FieldElement::ONE, bound), Err(Error::InvalidS));
}

#[test]
fn recover_public_key() {
    let signature = ecdsa::sign(&fe(PRIVATE_KEY), &fe(MESSAGE_HASH)).unwrap();
    assert_eq!(
        ecdsa::recover(&fe(MESSAGE_HASH), signature.signature(), signature.v()),
        Ok(fe(STARK_KEY))
    );

    let recovered = signature
        .recover_verifying_key(&fe(MESSAGE_HASH))
        .unwrap();
    let signing_key = SigningKey::from_bytes(&PRIVATE_KEY.into()).unwrap();
    assert_eq!(&recovered, signing_key.verifying_key());
}

#[test]
fn signature_traits() {
    let signing_key = SigningKey::from_bytes(&PRIVATE_KEY.into()).unwrap();
    let verifying_key = signing_key.verifying_key();

    let msg = b"starknet";
    let signature: Signature = signing_key.sign(msg);
    assert!(verifying_key.verify(msg, &signature).is_ok());
    assert!(verifying_key.verify(b"other", &signature).is_err());

    let recoverable: RecoverableSignature = signing_key.sign(msg);
    assert_eq!(Signature::from(recoverable), signature);

    let prehash_signature: Signature = signing_key.sign_prehash(&MESSAGE_HASH).unwrap();
    assert!(verifying_key
        .verify_prehash(&MESSAGE_HASH, &prehash_signature)
        .is_ok());

    // prehashes must be 32 bytes below 2²⁵¹
    assert!(PrehashSigner::<Signature>::sign_prehash(&signing_key, &[0xff; 32]).is_err());
    assert!(PrehashSigner::<Signature>::sign_prehash(&signing_key, &[0x01; 31]).is_err());
}

#[cfg(feature = "test-vectors")]
#[test]
fn test_vectors() {
    use stark252::test_vectors::ecdsa::{ECDSA_TEST_VECTORS, PUBLIC_KEY_TEST_VECTORS};

    for vector in ECDSA_TEST_VECTORS {
        let signing_key = SigningKey::from_bytes(&vector.d.into()).unwrap();
        assert_eq!(signing_key.verifying_key().stark_key(), fe(vector.q_x));

        let message_hash = fe(vector.m);
        let signature = if vector.k == [0; 32] {
            signing_key.sign_prehash_recoverable(&message_hash).unwrap()
        } else {
            match sign_with_explicit_k(&signing_key, &message_hash, vector.k) {
                Some(signature) => signature,
                None => continue,
            }
        };

        assert_eq!(signature.signature().r(), &fe(vector.r));
        assert_eq!(signature.signature().s(), &fe(vector.s));
        assert_eq!(signature.v(), vector.v);
        assert_eq!(
            ecdsa::verify(&fe(vector.q_x), &message_hash, signature.signature()),
            Ok(true)
        );
    }

    for (d, q_x) in PUBLIC_KEY_TEST_VECTORS {
        assert_eq!(ecdsa::get_public_key(&fe(*d)), Ok(fe(*q_x)));
    }
}

#[cfg(all(feature = "test-vectors", feature = "hazmat"))]
fn sign_with_explicit_k(
    signing_key: &SigningKey,
    message_hash: &FieldElement,
    k: [u8; 32],
) -> Option<RecoverableSignature> {
    Some(stark252::hazmat::sign_prehash_with_k(signing_key, message_hash, &fe(k)).unwrap())
}

#[cfg(all(feature = "test-vectors", not(feature = "hazmat")))]
fn sign_with_explicit_k(
    _signing_key: &SigningKey,
    _message_hash: &FieldElement,
    _k: [u8; 32],
) -> Option<RecoverableSignature> {
    None
}

prop_compose! {
    fn signing_key()(bytes in any::<[u8; 32]>()) -> SigningKey {
        let mut bytes = bytes;
        bytes[0] &= 0x07;
        bytes[31] |= 1;
        SigningKey::from_bytes(&bytes.into()).unwrap()
    }
}

prop_compose! {
    fn message_hash()(bytes in any::<[u8; 32]>()) -> FieldElement {
        let mut bytes = bytes;
        bytes[0] &= 0x07;
        fe(bytes)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_and_verify(signing_key in signing_key(), z in message_hash()) {
        let signature = signing_key.sign_prehash_recoverable(&z).unwrap();
        let stark_key = signing_key.verifying_key().stark_key();
        prop_assert_eq!(ecdsa::verify(&stark_key, &z, signature.signature()), Ok(true));
        prop_assert_eq!(
            ecdsa::recover(&z, signature.signature(), signature.v()),
            Ok(stark_key)
        );
    }

    #[test]
    fn reject_invalid_signature(
        signing_key in signing_key(),
        z in message_hash(),
        byte in 0usize..64,
        bit in 0usize..8,
    ) {
        let signature = signing_key.sign_prehash_recoverable(&z).unwrap();
        let mut bytes = signature.signature().to_bytes();
        bytes[byte] ^= 1 << bit;

        // flipping a bit either yields an unparseable signature or one which
        // no longer verifies
        if let Ok(tampered) = Signature::from_bytes(&bytes) {
            prop_assert_ne!(
                signing_key.verifying_key().verify_prehash_field(&z, &tampered),
                Ok(true)
            );
        }
    }
}
