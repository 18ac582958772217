use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

use crate::errors::Error;


/// The `KeyGen` trait is implemented by the `KG` struct of each parameter-set
/// module; its associated functions produce the opaque key pair.
pub trait KeyGen {
    /// The (public) encryption key, sent to whoever wants to encrypt.
    type EncryptionKey;
    /// The (private) decryption key, kept by the key owner.
    type DecryptionKey;

    /// Generates a key pair using the OS default random number generator to
    /// draw the 32-byte key-generation seed.
    ///
    /// # Errors
    /// Returns an error if the random number generator fails.
    ///
    /// # Examples
    /// ```rust
    /// # fn main() -> Result<(), kpke::errors::Error> {
    /// # #[cfg(all(feature = "kpke-768", feature = "default-rng"))] {
    /// use kpke::kpke_768;  // Could also be kpke_512 or kpke_1024.
    /// use kpke::traits::{Decrypt, Encrypt, KeyGen, SerDes};
    ///
    /// let (ek, dk) = kpke_768::KG::try_keygen()?;  // Key owner generates both keys
    /// let ek_bytes = ek.into_bytes();  // ... and publishes the encryption key
    ///
    /// let ek2 = kpke_768::EncryptionKey::try_from_bytes(ek_bytes)?;  // Sender restores it
    /// let msg = [0x5Au8; 32];
    /// let ct = ek2.try_encrypt(&msg)?;  // ... and encrypts a 32-byte message
    /// let ct_bytes = ct.into_bytes();
    ///
    /// let ct2 = kpke_768::Ciphertext::try_from_bytes(ct_bytes)?;  // Key owner restores it
    /// let pt = dk.try_decrypt(&ct2)?;  // ... and decrypts
    /// assert_eq!(msg, pt);
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen() -> Result<(Self::EncryptionKey, Self::DecryptionKey), Error> {
        Self::try_keygen_with_rng(&mut OsRng)
    }

    /// Generates a key pair using a provided random number generator to draw
    /// the 32-byte key-generation seed.
    ///
    /// # Errors
    /// Returns an error if the random number generator fails.
    ///
    /// # Examples
    /// ```rust
    /// # fn main() -> Result<(), kpke::errors::Error> {
    /// # #[cfg(feature = "kpke-768")] {
    /// use kpke::kpke_768;
    /// use kpke::traits::KeyGen;
    /// use rand_chacha::rand_core::SeedableRng;
    ///
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(123);
    /// let (ek, dk) = kpke_768::KG::try_keygen_with_rng(&mut rng)?;
    /// # let _ = (ek, dk);
    /// # }
    /// # Ok(())}
    /// ```
    fn try_keygen_with_rng(
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::EncryptionKey, Self::DecryptionKey), Error>;

    /// Generates a key pair deterministically from the given 32-byte seed.
    /// The same seed always yields the same key pair, which is the hook used
    /// by known-answer tests.
    ///
    /// # Errors
    /// Cannot fail for a well-formed parameter set; the `Result` is kept for
    /// signature symmetry across the trait.
    fn keygen_from_seed(
        d: &[u8; 32],
    ) -> Result<(Self::EncryptionKey, Self::DecryptionKey), Error>;
}


/// The `Encrypt` trait is implemented by each parameter set's
/// `EncryptionKey`. Encryption is randomized by a 32-byte seed; two
/// ciphertexts of the same message under different seeds differ.
pub trait Encrypt {
    /// The ciphertext sent back to the key owner.
    type Ciphertext;

    /// Encrypts a 32-byte message, drawing the encryption randomness from the
    /// OS default random number generator.
    ///
    /// # Errors
    /// Returns an error if the random number generator fails or the key
    /// material is malformed.
    ///
    /// # Examples
    /// ```rust
    /// # fn main() -> Result<(), kpke::errors::Error> {
    /// # #[cfg(all(feature = "kpke-768", feature = "default-rng"))] {
    /// use kpke::kpke_768;
    /// use kpke::traits::{Decrypt, Encrypt, KeyGen};
    ///
    /// let (ek, dk) = kpke_768::KG::try_keygen()?;
    /// let ct = ek.try_encrypt(&[0x11u8; 32])?;
    /// assert_eq!(dk.try_decrypt(&ct)?, [0x11u8; 32]);
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_encrypt(&self, m: &[u8; 32]) -> Result<Self::Ciphertext, Error> {
        self.try_encrypt_with_rng(&mut OsRng, m)
    }

    /// Encrypts a 32-byte message, drawing the encryption randomness from a
    /// provided random number generator.
    ///
    /// # Errors
    /// Returns an error if the random number generator fails or the key
    /// material is malformed.
    fn try_encrypt_with_rng(
        &self, rng: &mut impl CryptoRngCore, m: &[u8; 32],
    ) -> Result<Self::Ciphertext, Error>;

    /// Encrypts a 32-byte message deterministically under the given 32-byte
    /// randomness seed. The same `(key, m, r)` triple always yields the same
    /// ciphertext.
    ///
    /// # Errors
    /// Returns an error if the key material is malformed.
    fn encrypt_from_seed(&self, m: &[u8; 32], r: &[u8; 32]) -> Result<Self::Ciphertext, Error>;
}


/// The `Decrypt` trait is implemented by each parameter set's
/// `DecryptionKey`.
pub trait Decrypt {
    /// The ciphertext received from the encrypting party.
    type Ciphertext;

    /// Decrypts a ciphertext back into its 32-byte message. This scheme is
    /// only IND-CPA secure: any fixed-size byte string decrypts to *some*
    /// message, and tampering is not detected here. Chosen-ciphertext
    /// security is the job of the KEM transform built on top.
    ///
    /// # Errors
    /// Returns an error if the decryption key material is malformed.
    fn try_decrypt(&self, ct: &Self::Ciphertext) -> Result<[u8; 32], Error>;
}


/// The `SerDes` trait provides the fixed-size byte-array wire form of each
/// key and ciphertext struct.
pub trait SerDes {
    /// The fixed-size byte array specific to the struct being de/serialized.
    type ByteArray;

    /// Produces the wire-format byte array, consuming the struct.
    fn into_bytes(self) -> Self::ByteArray;

    /// Reconstructs the struct from its wire-format byte array, validating
    /// where the encoding permits it.
    ///
    /// # Errors
    /// Returns an error on malformed input, e.g. unreduced 12-bit fields.
    fn try_from_bytes(ba: Self::ByteArray) -> Result<Self, Error>
    where
        Self: Sized;
}
