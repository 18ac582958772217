use sha3::digest::XofReader;

use crate::byte_fns::bytes_to_bits;
use crate::errors::Error;
use crate::helpers::ensure;
use crate::types::{Poly, Zq};
use crate::Q;


/// Algorithm 7 `SampleNTT(B)` on page 23.
/// Rejection-samples a uniform NTT-basis polynomial from a SHAKE-128 stream,
/// pulling three bytes at a time for two 12-bit candidates. Byte consumption
/// is data-dependent with no fixed upper count, which is why this takes an
/// incremental `XofReader` rather than a preallocated buffer. The loop shape
/// depends only on the public matrix seed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn sample_ntt(mut reader: impl XofReader) -> Poly {
    let mut a_hat = [Zq::ZERO; 256];
    let mut c = [0u8; 3];
    let mut j = 0usize;
    while j < 256 {
        reader.read(&mut c);

        // d1 <- C[0] + 256 * (C[1] mod 16); d2 <- C[1] / 16 + 16 * C[2]
        let d1 = u32::from(c[0]) + 256 * (u32::from(c[1]) & 0x0F);
        let d2 = (u32::from(c[1]) >> 4) + 16 * u32::from(c[2]);

        if d1 < Q {
            a_hat[j] = Zq::new(d1 as u16);
            j += 1;
        }
        if (d2 < Q) & (j < 256) {
            a_hat[j] = Zq::new(d2 as u16);
            j += 1;
        }
    }
    a_hat
}


/// Algorithm 8 `SamplePolyCBD_eta(B)` on page 23.
/// Maps `64 * eta` PRF bytes onto a polynomial whose coefficients follow the
/// centered binomial distribution on `[-eta, eta]`, reduced mod q: each
/// coefficient is the difference of two eta-bit popcounts.
pub(crate) fn sample_poly_cbd(bytes: &[u8], eta: u32) -> Result<Poly, Error> {
    ensure!((eta == 2) | (eta == 3), Error::InvalidParameter);
    let eta = eta as usize;
    ensure!(bytes.len() == 64 * eta, Error::InvalidLength);

    let mut bits = [0u8; 512 * 3];
    let bits = &mut bits[..512 * eta];
    bytes_to_bits(bytes, bits)?;

    let mut f = [Zq::ZERO; 256];
    for (i, coeff) in f.iter_mut().enumerate() {
        let base = 2 * i * eta;
        let mut x = 0u16;
        let mut y = 0u16;
        for j in 0..eta {
            x += u16::from(bits[base + j]);
            y += u16::from(bits[base + eta + j]);
        }
        *coeff = Zq::new(x).sub(Zq::new(y));
    }
    Ok(f)
}
