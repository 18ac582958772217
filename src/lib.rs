#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]


// Implements the K-PKE component of FIPS 203, the Module-Lattice-based
// Key-Encapsulation Mechanism Standard.
// See <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.203.pdf>
//
// Functionality map per FIPS 203:
//
// Algorithm 3  BitsToBytes(b)                        --> byte_fns.rs
// Algorithm 4  BytesToBits(B)                        --> byte_fns.rs
// Algorithm 5  ByteEncode_d(F)                       --> byte_fns.rs
// Algorithm 6  ByteDecode_d(B)                       --> byte_fns.rs
// Algorithm 7  SampleNTT(B)                          --> sampling.rs
// Algorithm 8  SamplePolyCBD_eta(B)                  --> sampling.rs
// Algorithm 9  NTT(f)                                --> ntt.rs
// Algorithm 10 NTT^-1(f_hat)                         --> ntt.rs
// Algorithm 11 MultiplyNTTs(f_hat, g_hat)            --> ntt.rs
// Algorithm 12 BaseCaseMultiply(a0, a1, b0, b1, gm)  --> ntt.rs
// Algorithm 13 K-PKE.KeyGen(d)                       --> k_pke.rs
// Algorithm 14 K-PKE.Encrypt(ek_pke, m, r)           --> k_pke.rs
// Algorithm 15 K-PKE.Decrypt(dk_pke, c)              --> k_pke.rs
// PRF, XOF and hash function G                       --> helpers.rs
// Compress_d and Decompress_d                        --> helpers.rs
//
// The ML-KEM layer above K-PKE (Algorithms 16-21, the Fujisaki-Okamoto
// transform producing shared secrets) is deliberately not part of this
// crate. The three parameter sets are modules in this file with injected
// macro code connecting them to k_pke.rs.

mod byte_fns;
mod helpers;
mod k_pke;
mod ntt;
mod sampling;
mod types;

/// Typed errors; every fallible operation reports one of these.
pub mod errors;
/// All functionality is covered by traits, so consumers can hold trait
/// objects as desired.
pub mod traits;

// Relevant to all parameter sets
const Q: u32 = 3329;
const ZETA: u32 = 17;


// This common functionality is injected into each parameter-set module
macro_rules! functionality {
    () => {
        const ETA1_64: usize = ETA1 as usize * 64; // Rust does not (yet) allow expressions...
        const ETA2_64: usize = ETA2 as usize * 64; // ...involving constants in generics.

        use rand_core::CryptoRngCore;
        use zeroize::{Zeroize, ZeroizeOnDrop};

        use crate::byte_fns::byte_decode;
        use crate::errors::Error;
        use crate::k_pke::{k_pke_decrypt, k_pke_encrypt, k_pke_key_gen};
        use crate::traits::{Decrypt, Encrypt, KeyGen, SerDes};

        /// Correctly sized encryption key specific to this parameter set.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct EncryptionKey([u8; EK_LEN]);

        /// Correctly sized decryption key specific to this parameter set.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct DecryptionKey([u8; DK_LEN]);

        /// Correctly sized ciphertext specific to this parameter set.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct Ciphertext([u8; CT_LEN]);

        /// Key generation for this parameter set. Per FIPS 203 Algorithm 13,
        /// key generation consumes a 32-byte seed (freshly random, or caller
        /// supplied for deterministic use) and produces an encryption key and
        /// a decryption key as opaque structs.
        pub struct KG;

        impl KeyGen for KG {
            type DecryptionKey = DecryptionKey;
            type EncryptionKey = EncryptionKey;

            fn try_keygen_with_rng(
                rng: &mut impl CryptoRngCore,
            ) -> Result<(EncryptionKey, DecryptionKey), Error> {
                let mut d = [0u8; 32];
                rng.try_fill_bytes(&mut d).map_err(|_| Error::RandomSource)?;
                Self::keygen_from_seed(&d)
            }

            fn keygen_from_seed(d: &[u8; 32]) -> Result<(EncryptionKey, DecryptionKey), Error> {
                let (mut ek, mut dk) = ([0u8; EK_LEN], [0u8; DK_LEN]);
                k_pke_key_gen::<K, ETA1_64>(ETA1, d, &mut ek, &mut dk)?;
                Ok((EncryptionKey(ek), DecryptionKey(dk)))
            }
        }

        impl Encrypt for EncryptionKey {
            type Ciphertext = Ciphertext;

            fn try_encrypt_with_rng(
                &self, rng: &mut impl CryptoRngCore, m: &[u8; 32],
            ) -> Result<Ciphertext, Error> {
                let mut r = [0u8; 32];
                rng.try_fill_bytes(&mut r).map_err(|_| Error::RandomSource)?;
                self.encrypt_from_seed(m, &r)
            }

            fn encrypt_from_seed(&self, m: &[u8; 32], r: &[u8; 32]) -> Result<Ciphertext, Error> {
                let mut ct = [0u8; CT_LEN];
                k_pke_encrypt::<K, ETA1_64, ETA2_64>(
                    DU, DV, ETA1, ETA2, &self.0, m, r, &mut ct,
                )?;
                Ok(Ciphertext(ct))
            }
        }

        impl Decrypt for DecryptionKey {
            type Ciphertext = Ciphertext;

            fn try_decrypt(&self, ct: &Ciphertext) -> Result<[u8; 32], Error> {
                k_pke_decrypt::<K>(DU, DV, &self.0, &ct.0)
            }
        }

        impl SerDes for EncryptionKey {
            type ByteArray = [u8; EK_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(ek: Self::ByteArray) -> Result<Self, Error> {
                // Modulus check: every 12-bit field of t_hat must already be
                // reduced. Taking a fixed-size array rules out bad lengths.
                for i in 0..K {
                    byte_decode(12, &ek[384 * i..384 * (i + 1)])?;
                }
                Ok(EncryptionKey(ek))
            }
        }

        impl SerDes for DecryptionKey {
            type ByteArray = [u8; DK_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(dk: Self::ByteArray) -> Result<Self, Error> {
                // Same modulus check as the encryption key, applied to s_hat
                for i in 0..K {
                    byte_decode(12, &dk[384 * i..384 * (i + 1)])?;
                }
                Ok(DecryptionKey(dk))
            }
        }

        impl SerDes for Ciphertext {
            type ByteArray = [u8; CT_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(ct: Self::ByteArray) -> Result<Self, Error> {
                // Compressed fields are full-range, so a correctly sized array
                // leaves nothing to validate; Result is kept for symmetry.
                Ok(Ciphertext(ct))
            }
        }
    };
}


/// Functionality for the parameter set tracking ML-KEM-512 (claimed security
/// category 1; see table 2 on page 39 of FIPS 203).
#[cfg(feature = "kpke-512")]
pub mod kpke_512 {
    //!
    //! Typical usage flow:
    //! 1. The key owner runs `KG::try_keygen()` to get an encryption key `ek` and decryption key `dk`.
    //! 2. The key owner serializes the encryption key via `ek.into_bytes()` and publishes it.
    //! 3. The sender deserializes with `EncryptionKey::try_from_bytes(<bytes>)`, then runs
    //!    `try_encrypt(&msg)` on a 32-byte message to obtain a ciphertext.
    //! 4. The sender serializes the ciphertext via `ct.into_bytes()` and transmits it.
    //! 5. The key owner deserializes with `Ciphertext::try_from_bytes(<bytes>)`, then runs
    //!    `dk.try_decrypt(&ct)` to recover the message.

    const K: usize = 2;
    const ETA1: u32 = 3;
    const ETA2: u32 = 2;
    const DU: u32 = 10;
    const DV: u32 = 4;

    /// Serialized Encryption Key length (in bytes)
    pub const EK_LEN: usize = 800;
    /// Serialized Decryption Key length (in bytes)
    pub const DK_LEN: usize = 768;
    /// Serialized Ciphertext length (in bytes)
    pub const CT_LEN: usize = 768;

    functionality!();
}


/// Functionality for the parameter set tracking ML-KEM-768 (claimed security
/// category 3; see table 2 on page 39 of FIPS 203).
#[cfg(feature = "kpke-768")]
pub mod kpke_768 {
    //!
    //! Typical usage flow:
    //! 1. The key owner runs `KG::try_keygen()` to get an encryption key `ek` and decryption key `dk`.
    //! 2. The key owner serializes the encryption key via `ek.into_bytes()` and publishes it.
    //! 3. The sender deserializes with `EncryptionKey::try_from_bytes(<bytes>)`, then runs
    //!    `try_encrypt(&msg)` on a 32-byte message to obtain a ciphertext.
    //! 4. The sender serializes the ciphertext via `ct.into_bytes()` and transmits it.
    //! 5. The key owner deserializes with `Ciphertext::try_from_bytes(<bytes>)`, then runs
    //!    `dk.try_decrypt(&ct)` to recover the message.

    const K: usize = 3;
    const ETA1: u32 = 2;
    const ETA2: u32 = 2;
    const DU: u32 = 10;
    const DV: u32 = 4;

    /// Serialized Encryption Key length (in bytes)
    pub const EK_LEN: usize = 1184;
    /// Serialized Decryption Key length (in bytes)
    pub const DK_LEN: usize = 1152;
    /// Serialized Ciphertext length (in bytes)
    pub const CT_LEN: usize = 1088;

    functionality!();
}


/// Functionality for the parameter set tracking ML-KEM-1024 (claimed security
/// category 5; see table 2 on page 39 of FIPS 203).
#[cfg(feature = "kpke-1024")]
pub mod kpke_1024 {
    //!
    //! Typical usage flow:
    //! 1. The key owner runs `KG::try_keygen()` to get an encryption key `ek` and decryption key `dk`.
    //! 2. The key owner serializes the encryption key via `ek.into_bytes()` and publishes it.
    //! 3. The sender deserializes with `EncryptionKey::try_from_bytes(<bytes>)`, then runs
    //!    `try_encrypt(&msg)` on a 32-byte message to obtain a ciphertext.
    //! 4. The sender serializes the ciphertext via `ct.into_bytes()` and transmits it.
    //! 5. The key owner deserializes with `Ciphertext::try_from_bytes(<bytes>)`, then runs
    //!    `dk.try_decrypt(&ct)` to recover the message.

    const K: usize = 4;
    const ETA1: u32 = 2;
    const ETA2: u32 = 2;
    const DU: u32 = 11;
    const DV: u32 = 5;

    /// Serialized Encryption Key length (in bytes)
    pub const EK_LEN: usize = 1568;
    /// Serialized Decryption Key length (in bytes)
    pub const DK_LEN: usize = 1536;
    /// Serialized Ciphertext length (in bytes)
    pub const CT_LEN: usize = 1568;

    functionality!();
}
