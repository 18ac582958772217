use criterion::{criterion_group, criterion_main, Criterion};

use kpke::traits::{Decrypt, Encrypt, KeyGen};
use kpke::{kpke_1024, kpke_512, kpke_768};

#[allow(clippy::redundant_closure)]
pub fn criterion_benchmark(c: &mut Criterion) {
    let m = [0x5Au8; 32];
    let r = [0xA5u8; 32];

    let (ek_512, dk_512) = kpke_512::KG::try_keygen().unwrap();
    let ct_512 = ek_512.encrypt_from_seed(&m, &r).unwrap();
    let (ek_768, dk_768) = kpke_768::KG::try_keygen().unwrap();
    let ct_768 = ek_768.encrypt_from_seed(&m, &r).unwrap();
    let (ek_1024, dk_1024) = kpke_1024::KG::try_keygen().unwrap();
    let ct_1024 = ek_1024.encrypt_from_seed(&m, &r).unwrap();

    c.bench_function("kpke_512 KeyGen", |b| b.iter(|| kpke_512::KG::try_keygen()));
    c.bench_function("kpke_512 Encrypt", |b| b.iter(|| ek_512.encrypt_from_seed(&m, &r)));
    c.bench_function("kpke_512 Decrypt", |b| b.iter(|| dk_512.try_decrypt(&ct_512)));

    c.bench_function("kpke_768 KeyGen", |b| b.iter(|| kpke_768::KG::try_keygen()));
    c.bench_function("kpke_768 Encrypt", |b| b.iter(|| ek_768.encrypt_from_seed(&m, &r)));
    c.bench_function("kpke_768 Decrypt", |b| b.iter(|| dk_768.try_decrypt(&ct_768)));

    c.bench_function("kpke_1024 KeyGen", |b| b.iter(|| kpke_1024::KG::try_keygen()));
    c.bench_function("kpke_1024 Encrypt", |b| b.iter(|| ek_1024.encrypt_from_seed(&m, &r)));
    c.bench_function("kpke_1024 Decrypt", |b| b.iter(|| dk_1024.try_decrypt(&ct_1024)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
