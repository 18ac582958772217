use crate::byte_fns::{byte_decode, byte_encode};
use crate::errors::Error;
use crate::helpers::{
    compress_poly, decompress_poly, dot_prod, ensure, g, mat_t_vec_mul, mat_vec_mul, poly_add,
    prf, vec_add, vec_sub, xof,
};
use crate::ntt::{ntt, ntt_inv};
use crate::sampling::{sample_ntt, sample_poly_cbd};
use crate::types::{Poly, Zq};


/// Expands the public matrix `A_hat` from the 32-byte seed rho, shared by
/// key generation (steps 3-7) and encryption (steps 4-8). Entry `(i, j)` is
/// seeded by `rho || j || i`; the byte order is part of the wire contract.
#[allow(clippy::cast_possible_truncation)]
fn expand_a<const K: usize>(rho: &[u8; 32]) -> [[Poly; K]; K] {
    core::array::from_fn(|i| core::array::from_fn(|j| sample_ntt(xof(rho, j as u8, i as u8))))
}


/// Algorithm 13 `K-PKE.KeyGen(d)` on page 29.
/// Derives an encryption/decryption key pair deterministically from the
/// 32-byte seed `d`.
///
/// Output: `ek_pke` of `384 * K + 32` bytes holding `ByteEncode_12(t_hat)`
/// followed by rho, and `dk_pke` of `384 * K` bytes holding
/// `ByteEncode_12(s_hat)`.
#[allow(clippy::similar_names)]
pub(crate) fn k_pke_key_gen<const K: usize, const ETA1_64: usize>(
    eta1: u32, d: &[u8; 32], ek_pke: &mut [u8], dk_pke: &mut [u8],
) -> Result<(), Error> {
    ensure!(ek_pke.len() == 384 * K + 32, Error::InvalidLength);
    ensure!(dk_pke.len() == 384 * K, Error::InvalidLength);

    // 1: (rho, sigma) <- G(d || k); the single byte k separates parameter sets
    let mut seed = [0u8; 33];
    seed[0..32].copy_from_slice(d);
    seed[32] = K.to_le_bytes()[0];
    let (rho, sigma) = g(&[&seed]);

    // 3-7: A_hat straight into the NTT basis, directly from rho
    let a_hat = expand_a::<K>(&rho);

    // 8-15: secrets and errors from CBD_eta1, each off a fresh PRF stream,
    // 16-17: then through the NTT
    let mut n = 0u8;
    let mut s_hat = [[Zq::ZERO; 256]; K];
    for s_i in &mut s_hat {
        *s_i = ntt(&sample_poly_cbd(&prf::<ETA1_64>(&sigma, n), eta1)?);
        n += 1;
    }
    let mut e_hat = [[Zq::ZERO; 256]; K];
    for e_i in &mut e_hat {
        *e_i = ntt(&sample_poly_cbd(&prf::<ETA1_64>(&sigma, n), eta1)?);
        n += 1;
    }

    // 18: t_hat <- A_hat o s_hat + e_hat
    let t_hat = vec_add(&mat_vec_mul(&a_hat, &s_hat), &e_hat);

    // 19: ek_pke <- ByteEncode_12(t_hat) || rho
    for (i, chunk) in ek_pke.chunks_mut(384).enumerate().take(K) {
        byte_encode(12, &t_hat[i], chunk)?;
    }
    ek_pke[384 * K..].copy_from_slice(&rho);

    // 20: dk_pke <- ByteEncode_12(s_hat)
    for (i, chunk) in dk_pke.chunks_mut(384).enumerate() {
        byte_encode(12, &s_hat[i], chunk)?;
    }
    Ok(())
}


/// Algorithm 14 `K-PKE.Encrypt(ek_pke, m, r)` on page 30.
/// Encrypts a 32-byte message under the encryption key, with all randomness
/// expanded from the 32-byte seed `r`. Noise widths: `eta1` for the secret
/// vector y, `eta2` for the errors e1 and e2.
#[allow(clippy::many_single_char_names, clippy::similar_names, clippy::too_many_arguments)]
pub(crate) fn k_pke_encrypt<const K: usize, const ETA1_64: usize, const ETA2_64: usize>(
    du: u32, dv: u32, eta1: u32, eta2: u32, ek_pke: &[u8], m: &[u8; 32], r: &[u8; 32],
    ct: &mut [u8],
) -> Result<(), Error> {
    ensure!(ek_pke.len() == 384 * K + 32, Error::InvalidLength);
    ensure!(ct.len() == 32 * (du as usize * K + dv as usize), Error::InvalidLength);

    // 2: t_hat <- ByteDecode_12(ek_pke[0 : 384k]), rejecting unreduced fields
    let mut t_hat = [[Zq::ZERO; 256]; K];
    for (i, chunk) in ek_pke.chunks(384).enumerate().take(K) {
        t_hat[i] = byte_decode(12, chunk)?;
    }

    // 3: rho <- ek_pke[384k : 384k + 32]
    let mut rho = [0u8; 32];
    rho.copy_from_slice(&ek_pke[384 * K..]);

    // 4-8: regenerate A_hat exactly as key generation built it
    let a_hat = expand_a::<K>(&rho);

    // 9-12: y from CBD_eta1, 18: straight through the NTT
    let mut n = 0u8;
    let mut y_hat = [[Zq::ZERO; 256]; K];
    for y_i in &mut y_hat {
        *y_i = ntt(&sample_poly_cbd(&prf::<ETA1_64>(r, n), eta1)?);
        n += 1;
    }

    // 13-16: e1 from CBD_eta2, kept in the standard basis
    let mut e1 = [[Zq::ZERO; 256]; K];
    for e_i in &mut e1 {
        *e_i = sample_poly_cbd(&prf::<ETA2_64>(r, n), eta2)?;
        n += 1;
    }

    // 17: e2 from CBD_eta2
    let e2 = sample_poly_cbd(&prf::<ETA2_64>(r, n), eta2)?;

    // 19: u <- NTT^-1(A_hat^T o y_hat) + e1
    let mut u = mat_t_vec_mul(&a_hat, &y_hat);
    for u_i in &mut u {
        *u_i = ntt_inv(u_i);
    }
    u = vec_add(&u, &e1);

    // 20: mu <- Decompress_1(ByteDecode_1(m)); the message rides in as 256
    // one-bit coefficients scaled to q/2
    let mut mu = byte_decode(1, m)?;
    decompress_poly(1, &mut mu);

    // 21: v <- NTT^-1(t_hat^T o y_hat) + e2 + mu
    let mut v = poly_add(&poly_add(&ntt_inv(&dot_prod(&t_hat, &y_hat)), &e2), &mu);

    // 22: c1 <- ByteEncode_du(Compress_du(u)), K blocks
    let step = 32 * du as usize;
    for (i, chunk) in ct.chunks_mut(step).enumerate().take(K) {
        compress_poly(du, &mut u[i]);
        byte_encode(du, &u[i], chunk)?;
    }

    // 23: c2 <- ByteEncode_dv(Compress_dv(v))
    compress_poly(dv, &mut v);
    byte_encode(dv, &v, &mut ct[K * step..])?;

    // 24: c is c1 || c2, already in place
    Ok(())
}


/// Algorithm 15 `K-PKE.Decrypt(dk_pke, c)` on page 31.
/// Recovers the 32-byte message from a ciphertext. The result is exact as
/// long as the accumulated noise stays below q/4 per coefficient, which holds
/// except with negligible probability for honestly produced inputs.
pub(crate) fn k_pke_decrypt<const K: usize>(
    du: u32, dv: u32, dk_pke: &[u8], ct: &[u8],
) -> Result<[u8; 32], Error> {
    ensure!(dk_pke.len() == 384 * K, Error::InvalidLength);
    ensure!(ct.len() == 32 * (du as usize * K + dv as usize), Error::InvalidLength);

    // 1-2: split c into the compressed vector part and the compressed scalar
    let (c1, c2) = ct.split_at(32 * du as usize * K);

    // 3: u' <- Decompress_du(ByteDecode_du(c1)), then back into the NTT basis
    let mut u_hat = [[Zq::ZERO; 256]; K];
    for (i, chunk) in c1.chunks(32 * du as usize).enumerate() {
        let mut u_i = byte_decode(du, chunk)?;
        decompress_poly(du, &mut u_i);
        u_hat[i] = ntt(&u_i);
    }

    // 4: v' <- Decompress_dv(ByteDecode_dv(c2))
    let mut v = byte_decode(dv, c2)?;
    decompress_poly(dv, &mut v);

    // 5: s_hat <- ByteDecode_12(dk_pke)
    let mut s_hat = [[Zq::ZERO; 256]; K];
    for (i, chunk) in dk_pke.chunks(384).enumerate() {
        s_hat[i] = byte_decode(12, chunk)?;
    }

    // 6: w <- v' - NTT^-1(s_hat^T o NTT(u'))
    let mut w = vec_sub(&[v], &[ntt_inv(&dot_prod(&s_hat, &u_hat))])[0];

    // 7: m <- ByteEncode_1(Compress_1(w))
    compress_poly(1, &mut w);
    let mut m = [0u8; 32];
    byte_encode(1, &w, &mut m)?;
    Ok(m)
}
