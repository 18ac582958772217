use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_512, Shake128, Shake256};

use crate::ntt::multiply_ntts;
use crate::types::{Poly, Zq};
use crate::Q;


/// Early-return with the given error when the condition fails. Borrowed in
/// spirit from the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub(crate) use ensure; // make available throughout crate


/// Coefficient-wise polynomial addition mod q.
#[must_use]
pub(crate) fn poly_add(a: &Poly, b: &Poly) -> Poly {
    core::array::from_fn(|n| a[n].add(b[n]))
}


/// Coefficient-wise polynomial subtraction mod q.
#[must_use]
pub(crate) fn poly_sub(a: &Poly, b: &Poly) -> Poly {
    core::array::from_fn(|n| a[n].sub(b[n]))
}


/// Coordinate-wise vector addition; commentary on (2.11) page 10.
#[must_use]
pub(crate) fn vec_add<const K: usize>(a: &[Poly; K], b: &[Poly; K]) -> [Poly; K] {
    core::array::from_fn(|k| poly_add(&a[k], &b[k]))
}


/// Coordinate-wise vector subtraction; commentary on (2.11) page 10.
#[must_use]
pub(crate) fn vec_sub<const K: usize>(a: &[Poly; K], b: &[Poly; K]) -> [Poly; K] {
    core::array::from_fn(|k| poly_sub(&a[k], &b[k]))
}


/// `w_hat = A_hat o u_hat`; commentary on (2.12) page 10. Everything stays
/// in the NTT basis.
#[must_use]
pub(crate) fn mat_vec_mul<const K: usize>(
    a_hat: &[[Poly; K]; K], u_hat: &[Poly; K],
) -> [Poly; K] {
    let mut w_hat = [[Zq::ZERO; 256]; K];
    #[allow(clippy::needless_range_loop)] // the alternative is harder to read
    for i in 0..K {
        for j in 0..K {
            w_hat[i] = poly_add(&w_hat[i], &multiply_ntts(&a_hat[i][j], &u_hat[j]));
        }
    }
    w_hat
}


/// `y_hat = A_hat^T o u_hat`; commentary on (2.13) page 10. Only the index
/// order differs from `mat_vec_mul`.
#[must_use]
pub(crate) fn mat_t_vec_mul<const K: usize>(
    a_hat: &[[Poly; K]; K], u_hat: &[Poly; K],
) -> [Poly; K] {
    let mut y_hat = [[Zq::ZERO; 256]; K];
    #[allow(clippy::needless_range_loop)] // the alternative is harder to read
    for i in 0..K {
        for j in 0..K {
            y_hat[i] = poly_add(&y_hat[i], &multiply_ntts(&a_hat[j][i], &u_hat[j]));
        }
    }
    y_hat
}


/// `u_hat^T o v_hat`; commentary on (2.14) page 10.
#[must_use]
pub(crate) fn dot_prod<const K: usize>(u_hat: &[Poly; K], v_hat: &[Poly; K]) -> Poly {
    let mut out = [Zq::ZERO; 256];
    for j in 0..K {
        out = poly_add(&out, &multiply_ntts(&u_hat[j], &v_hat[j]));
    }
    out
}


/// `Compress_d` from page 21 (4.7): `x -> round((2^d / q) * x) mod 2^d`,
/// ties rounding up. Division by q is replaced with a precomputed
/// `ceil(2^36 / q)` multiplier, which is exact for every `x < q` and
/// `d <= 12`; exact halves cannot occur because q is odd.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn compress_poly(d: u32, inout: &mut [Zq]) {
    const M: u64 = ((1u64 << 36) + Q as u64 - 1) / (Q as u64);
    debug_assert!((1..=12).contains(&d), "Compress: d out of range");
    for x in &mut *inout {
        let dividend = (x.get_u32() << d) + (Q >> 1);
        let quot = (u64::from(dividend) * M) >> 36;
        x.set_u16((quot as u16) & ((1u16 << d) - 1));
    }
}


/// `Decompress_d` from page 21 (4.8): `y -> round((q / 2^d) * y)`, ties
/// rounding up. The result is already below q, so nothing gets reduced.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn decompress_poly(d: u32, inout: &mut [Zq]) {
    debug_assert!((1..=12).contains(&d), "Decompress: d out of range");
    for y in &mut *inout {
        let qy = Q * y.get_u32() + (1 << (d - 1));
        y.set_u16((qy >> d) as u16);
    }
}


/// Function `PRF_eta` on page 18 (4.3): SHAKE-256 over the seed and a single
/// counter byte, truncated to `64 * eta` bytes.
#[must_use]
pub(crate) fn prf<const ETA_64: usize>(s: &[u8; 32], b: u8) -> [u8; ETA_64] {
    let mut hasher = Shake256::default();
    hasher.update(s);
    hasher.update(&[b]);
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; ETA_64];
    reader.read(&mut out);
    out
}


/// Function `XOF` on page 19 (4.6): SHAKE-128 over `rho || j || i`, squeezed
/// incrementally by the rejection sampler.
#[must_use]
pub(crate) fn xof(rho: &[u8; 32], j: u8, i: u8) -> impl XofReader {
    let mut hasher = Shake128::default();
    hasher.update(rho);
    hasher.update(&[j]);
    hasher.update(&[i]);
    hasher.finalize_xof()
}


/// Function `G` on page 19 (4.5): SHA3-512 over the concatenated parts,
/// split into two 32-byte seeds.
pub(crate) fn g(parts: &[&[u8]]) -> ([u8; 32], [u8; 32]) {
    let mut hasher = Sha3_512::new();
    parts.iter().for_each(|p| Digest::update(&mut hasher, p));
    let digest = hasher.finalize();
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    a.copy_from_slice(&digest[0..32]);
    b.copy_from_slice(&digest[32..64]);
    (a, b)
}


#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use crate::helpers::{compress_poly, decompress_poly, g, prf};
    use crate::types::Zq;
    use crate::Q;

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn compress_matches_rounding_definition() {
        // round((2^d / q) x) mod 2^d as plain integer arithmetic, sidestepping
        // the Barrett multiplier entirely
        for d in 1..=12u32 {
            for x in 0..Q {
                let expected =
                    (((u64::from(x) << (d + 1)) + u64::from(Q)) / (2 * u64::from(Q)))
                        % (1u64 << d);
                let mut v = [Zq::new(x as u16)];
                compress_poly(d, &mut v);
                assert_eq!(u64::from(v[0].get_u16()), expected, "d={d} x={x}");
            }
        }
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn decompress_of_compress_stays_close() {
        for d in 1..=12u32 {
            let bound = (Q + (1 << (d + 1)) - 1) >> (d + 1); // ceil(q / 2^(d+1))
            for x in 0..Q {
                let mut v = [Zq::new(x as u16)];
                compress_poly(d, &mut v);
                decompress_poly(d, &mut v);
                let x2 = v[0].get_u32();
                let dist = if x2 >= x { x2 - x } else { x - x2 };
                let dist = dist.min(Q - dist);
                assert!(dist <= bound, "d={d} x={x} x2={x2}");
            }
        }
    }

    #[test]
    fn prf_and_g_known_answers() {
        let seed = b"qjdhfyritoprlkdjfkrjfbdnzyhdjrtr";
        let out = prf::<128>(seed, b'a');
        assert_eq!(
            out[..],
            hex!(
                "eedb2631fdc3c6748dc567534e90eb016d087e6c088f3de6f815e854e6a78daf"
                "4181a01d80f26c1f9d2816f95e2427b8e261cc45dc2a98f96a81db2235b0f4d0"
                "2c4a6b2ad94e3444dc921fc0ed378bca86a9eec7179c45be3f6b9809a4770012"
                "e7cd143872e45b7bf8f34e6819102d5a55f32a1f9d105a8b3dfe25af75d76f93"
            )[..]
        );

        let (left, right) = g(&[seed]);
        assert_eq!(
            left,
            hex!("132f6750e8aafeee8cff75bafdf1cae43307ac23878d5403990b33664bdec268")
        );
        assert_eq!(
            right,
            hex!("73fe4185b09c291388961a4420b40a44705538502490b755b27e88d723f85192")
        );
    }
}
