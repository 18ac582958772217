use crate::types::{Poly, Zq};
use crate::{Q, ZETA};


/// Algorithm 9 `NTT(f)` on page 26.
/// Maps a polynomial from `R_q` into the NTT basis with seven layers of
/// in-place decimation-in-time butterflies. Since `X^256 + 1` splits into 128
/// irreducible quadratics mod q, the output holds 128 interleaved degree-one
/// residues: positions `2i` and `2i + 1` belong to the i-th quadratic.
#[must_use]
#[allow(clippy::module_name_repetitions)]
pub(crate) fn ntt(f: &Poly) -> Poly {
    let mut f_hat = *f;
    let mut i = 1;
    for len in [128, 64, 32, 16, 8, 4, 2] {
        for start in (0..256).step_by(2 * len) {
            let zeta = ZETA_TABLE[i << 1]; // zeta^{BitRev7(i)}
            i += 1;
            for j in start..(start + len) {
                let t = f_hat[j + len].mul(zeta);
                f_hat[j + len] = f_hat[j].sub(t);
                f_hat[j] = f_hat[j].add(t);
            }
        }
    }
    f_hat
}


/// Algorithm 10 `NTT^{-1}(f_hat)` on page 26.
/// Undoes `ntt` by running the butterfly layers in reverse, then folds in the
/// scale factor `128^{-1} = 3303 mod q`.
#[must_use]
#[allow(clippy::module_name_repetitions)]
pub(crate) fn ntt_inv(f_hat: &Poly) -> Poly {
    let mut f = *f_hat;
    let mut i = 127;
    for len in [2, 4, 8, 16, 32, 64, 128] {
        for start in (0..256).step_by(2 * len) {
            let zeta = ZETA_TABLE[i << 1]; // zeta^{BitRev7(i)}
            i -= 1;
            for j in start..(start + len) {
                let t = f[j];
                f[j] = t.add(f[j + len]);
                f[j + len] = zeta.mul(f[j + len].sub(t));
            }
        }
    }
    let inv128 = Zq::new(3303);
    f.iter_mut().for_each(|c| *c = c.mul(inv128));
    f
}


/// Algorithm 11 `MultiplyNTTs(f_hat, g_hat)` on page 27.
/// Ring multiplication in the NTT basis: 128 independent degree-one products,
/// the i-th taken modulo `X^2 - gamma_i` with `gamma_i = zeta^{2 BitRev7(i) + 1}`.
#[must_use]
pub(crate) fn multiply_ntts(f_hat: &Poly, g_hat: &Poly) -> Poly {
    let mut h_hat = [Zq::ZERO; 256];
    for i in 0..128 {
        let gamma = ZETA_TABLE[i ^ 0x80]; // zeta^{2 BitRev7(i) + 1}
        let (c0, c1) = base_case_multiply(
            f_hat[2 * i],
            f_hat[2 * i + 1],
            g_hat[2 * i],
            g_hat[2 * i + 1],
            gamma,
        );
        h_hat[2 * i] = c0;
        h_hat[2 * i + 1] = c1;
    }
    h_hat
}


/// Algorithm 12 `BaseCaseMultiply(a0, a1, b0, b1, gamma)` on page 27.
/// Schoolbook product of `a0 + a1 X` and `b0 + b1 X` modulo `X^2 - gamma`.
#[must_use]
pub(crate) fn base_case_multiply(a0: Zq, a1: Zq, b0: Zq, b1: Zq, gamma: Zq) -> (Zq, Zq) {
    let c0 = a0.mul(b0).add(a1.mul(b1).mul(gamma));
    let c1 = a0.mul(b1).add(a1.mul(b0));
    (c0, c1)
}


// Powers of zeta, computed at compile time and stored bit-reverse indexed:
// entry `BitRev8(k)` holds `zeta^k mod q`. Both access patterns the
// transforms need then come out as index tricks: `ZETA_TABLE[i << 1]` is
// `zeta^{BitRev7(i)}` and `ZETA_TABLE[i ^ 0x80]` is `zeta^{2 BitRev7(i) + 1}`.
#[allow(clippy::cast_possible_truncation)]
const fn gen_zeta_table() -> [Zq; 256] {
    let mut table = [Zq::ZERO; 256];
    let mut x = 1u32;
    let mut k = 0u32;
    while k < 256 {
        table[(k as u8).reverse_bits() as usize] = Zq::new(x as u16);
        x = (x * ZETA) % Q;
        k += 1;
    }
    table
}

pub(crate) static ZETA_TABLE: [Zq; 256] = gen_zeta_table();
