use crate::errors::Error;
use crate::helpers::ensure;
use crate::types::{Poly, Zq};
use crate::Q;


/// Algorithm 3 `BitsToBytes(b)` on page 20.
/// Packs a bit array (each entry 0 or 1, length a multiple of eight) into a
/// byte array, LSB-first within each byte.
pub(crate) fn bits_to_bytes(bits: &[u8], bytes: &mut [u8]) -> Result<(), Error> {
    ensure!(bits.len() == 8 * bytes.len(), Error::InvalidLength);
    bytes.iter_mut().for_each(|b| *b = 0);
    for (i, bit) in bits.iter().enumerate() {
        bytes[i / 8] |= bit << (i % 8);
    }
    Ok(())
}


/// Algorithm 4 `BytesToBits(B)` on page 20.
/// The inverse of `bits_to_bytes`: explodes each byte into eight bits,
/// least significant first.
pub(crate) fn bytes_to_bits(bytes: &[u8], bits: &mut [u8]) -> Result<(), Error> {
    ensure!(bits.len() == 8 * bytes.len(), Error::InvalidLength);
    for (i, byte) in bytes.iter().enumerate() {
        for j in 0..8 {
            bits[8 * i + j] = (byte >> j) & 1;
        }
    }
    Ok(())
}


/// Algorithm 5 `ByteEncode_d(F)` on page 22.
/// Encodes 256 d-bit integers into `32 * d` bytes, for `1 <= d <= 12`.
/// Coefficients must lie in `[0, m)` where `m = 2^d` if `d < 12`, else `m = q`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn byte_encode(d: u32, f: &Poly, bytes: &mut [u8]) -> Result<(), Error> {
    ensure!((1..=12).contains(&d), Error::InvalidParameter);
    let d = d as usize;
    ensure!(bytes.len() == 32 * d, Error::InvalidLength);
    let m = if d < 12 { 1u32 << d } else { Q };

    let mut bits = [0u8; 256 * 12];
    for (i, coeff) in f.iter().enumerate() {
        let a = coeff.get_u32();
        ensure!(a < m, Error::InvalidCoefficient);
        for j in 0..d {
            bits[i * d + j] = ((a >> j) & 1) as u8;
        }
    }
    bits_to_bytes(&bits[..256 * d], bytes)
}


/// Algorithm 6 `ByteDecode_d(B)` on page 22.
/// Decodes `32 * d` bytes into 256 d-bit integers, for `1 <= d <= 12`.
/// For `d = 12` any field at or above q is rejected rather than reduced, so
/// encode and decode are exact inverses on their shared domain.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn byte_decode(d: u32, bytes: &[u8]) -> Result<Poly, Error> {
    ensure!((1..=12).contains(&d), Error::InvalidParameter);
    ensure!(bytes.len() == 32 * d as usize, Error::InvalidLength);

    let mut f = [Zq::ZERO; 256];
    let mask = (1u32 << d) - 1;
    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut index = 0usize;
    for byte in bytes {
        acc |= u32::from(*byte) << acc_bits;
        acc_bits += 8;
        while (acc_bits >= d) & (index < 256) {
            f[index].set_u16((acc & mask) as u16);
            acc >>= d;
            acc_bits -= d;
            index += 1;
        }
    }
    if d == 12 {
        ensure!(f.iter().all(|c| c.get_u32() < Q), Error::InvalidCoefficient);
    }
    Ok(f)
}
