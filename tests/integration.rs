use rand_core::{RngCore, SeedableRng};

#[cfg(feature = "kpke-1024")]
use kpke::kpke_1024;
#[cfg(feature = "kpke-512")]
use kpke::kpke_512;
#[cfg(feature = "kpke-768")]
use kpke::kpke_768;

use kpke::errors::Error;
use kpke::traits::{Decrypt, Encrypt, KeyGen, SerDes};


// Keygen/encrypt/decrypt round trips across fresh keys, one macro body per
// parameter set so a failure names the set that broke.
macro_rules! round_trip_test {
    ($name:ident, $module:ident, $seed:literal) => {
        #[test]
        fn $name() {
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64($seed);
            for _ in 0..50 {
                let mut d = [0u8; 32];
                let mut m = [0u8; 32];
                let mut r = [0u8; 32];
                rng.fill_bytes(&mut d);
                rng.fill_bytes(&mut m);
                rng.fill_bytes(&mut r);

                let (ek, dk) = $module::KG::keygen_from_seed(&d).unwrap();
                let ct = ek.encrypt_from_seed(&m, &r).unwrap();
                assert_eq!(dk.try_decrypt(&ct).unwrap(), m);
            }
        }
    };
}

#[cfg(feature = "kpke-512")]
round_trip_test!(kpke_512_round_trip, kpke_512, 512);
#[cfg(feature = "kpke-768")]
round_trip_test!(kpke_768_round_trip, kpke_768, 768);
#[cfg(feature = "kpke-1024")]
round_trip_test!(kpke_1024_round_trip, kpke_1024, 1024);


#[cfg(all(feature = "kpke-512", feature = "kpke-768", feature = "kpke-1024"))]
#[test]
fn serialized_lengths_match_parameter_sets() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(99);
    let mut d = [0u8; 32];
    rng.fill_bytes(&mut d);
    let m = [0u8; 32];
    let r = [7u8; 32];

    let (ek, dk) = kpke_512::KG::keygen_from_seed(&d).unwrap();
    let ct = ek.encrypt_from_seed(&m, &r).unwrap();
    assert_eq!(ek.into_bytes().len(), kpke_512::EK_LEN);
    assert_eq!(dk.into_bytes().len(), kpke_512::DK_LEN);
    assert_eq!(ct.into_bytes().len(), 768);

    let (ek, dk) = kpke_768::KG::keygen_from_seed(&d).unwrap();
    let ct = ek.encrypt_from_seed(&m, &r).unwrap();
    assert_eq!(ek.into_bytes().len(), 1184);
    assert_eq!(dk.into_bytes().len(), 1152);
    assert_eq!(ct.into_bytes().len(), 1088);

    let (ek, dk) = kpke_1024::KG::keygen_from_seed(&d).unwrap();
    let ct = ek.encrypt_from_seed(&m, &r).unwrap();
    assert_eq!(ek.into_bytes().len(), 1568);
    assert_eq!(dk.into_bytes().len(), 1536);
    assert_eq!(ct.into_bytes().len(), 1568);
}


#[cfg(feature = "kpke-768")]
#[test]
fn seeded_operations_are_deterministic() {
    let d = [0x42u8; 32];
    let m = [0x33u8; 32];
    let r = [0x77u8; 32];

    let (ek1, dk1) = kpke_768::KG::keygen_from_seed(&d).unwrap();
    let (ek2, dk2) = kpke_768::KG::keygen_from_seed(&d).unwrap();
    assert_eq!(hex::encode(ek1.clone().into_bytes()), hex::encode(ek2.into_bytes()));
    assert_eq!(hex::encode(dk1.into_bytes()), hex::encode(dk2.into_bytes()));

    let ct1 = ek1.encrypt_from_seed(&m, &r).unwrap();
    let ct2 = ek1.encrypt_from_seed(&m, &r).unwrap();
    assert_eq!(hex::encode(ct1.into_bytes()), hex::encode(ct2.into_bytes()));

    // a different randomness seed must move the ciphertext
    let ct3 = ek1.encrypt_from_seed(&m, &[0x78u8; 32]).unwrap();
    let ct4 = ek1.encrypt_from_seed(&m, &r).unwrap();
    assert_ne!(ct3.into_bytes(), ct4.into_bytes());
}


#[cfg(feature = "kpke-768")]
#[test]
fn serde_round_trip_through_bytes() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(5);
    let (ek, dk) = kpke_768::KG::try_keygen_with_rng(&mut rng).unwrap();
    let m = [0xC1u8; 32];
    let ct = ek.clone().try_encrypt_with_rng(&mut rng, &m).unwrap();

    let ek2 = kpke_768::EncryptionKey::try_from_bytes(ek.into_bytes()).unwrap();
    let dk2 = kpke_768::DecryptionKey::try_from_bytes(dk.into_bytes()).unwrap();
    let ct2 = kpke_768::Ciphertext::try_from_bytes(ct.into_bytes()).unwrap();

    assert_eq!(dk2.try_decrypt(&ct2).unwrap(), m);
    let ct3 = ek2.try_encrypt_with_rng(&mut rng, &m).unwrap();
    assert_eq!(dk2.try_decrypt(&ct3).unwrap(), m);
}


#[cfg(feature = "kpke-768")]
#[test]
fn unreduced_key_bytes_are_rejected() {
    assert_eq!(
        kpke_768::EncryptionKey::try_from_bytes([0xFFu8; kpke_768::EK_LEN]).err(),
        Some(Error::InvalidCoefficient)
    );
    assert_eq!(
        kpke_768::DecryptionKey::try_from_bytes([0xFFu8; kpke_768::DK_LEN]).err(),
        Some(Error::InvalidCoefficient)
    );
    // ciphertext bytes are full-range, nothing to reject
    assert!(kpke_768::Ciphertext::try_from_bytes([0xFFu8; kpke_768::CT_LEN]).is_ok());
}


#[cfg(feature = "kpke-768")]
#[test]
fn decrypting_with_the_wrong_key_garbles_the_message() {
    let (_ek1, dk1) = kpke_768::KG::keygen_from_seed(&[1u8; 32]).unwrap();
    let (ek2, _dk2) = kpke_768::KG::keygen_from_seed(&[2u8; 32]).unwrap();
    let m = [0xABu8; 32];
    let ct = ek2.encrypt_from_seed(&m, &[3u8; 32]).unwrap();
    // decryption always "succeeds" for well-formed inputs; only the right
    // key recovers the plaintext
    assert_ne!(dk1.try_decrypt(&ct).unwrap(), m);
}
