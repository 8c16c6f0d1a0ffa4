use hashes::{
  Digest,
  crypto::{Keccakf1600KernelId, Sha3_256},
};

// FIPS 202 / NIST CSRC example vectors for SHA3-256.
const VECTORS: &[(&[u8], &str)] = &[
  (b"", "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
  (b"abc", "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
  (
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
    "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
  ),
  (
    b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
    "916f6061fe879741ca6469b43971dfdb28b1a32dc36cb3254e812be27aad1d18",
  ),
  (b"Hello World", "e167f68d6563d75bb25f3aa49c29ef612d41352dc00606de7cbd630bb2665f51"),
  (b"Hello World!", "d0e47486bbf4c16acac26f8b653592973c1362909f90262877089f9c8a4536af"),
];

fn hex(bytes: &[u8]) -> String {
  bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn run_fixed_vectors(name: &str, mut digest: impl FnMut(&[u8]) -> [u8; 32]) {
  for (i, (input, expected)) in VECTORS.iter().enumerate() {
    let actual = digest(*input);
    assert_eq!(hex(&actual), *expected, "{name} vector mismatch at case {i} (len={})", input.len());
  }
}

#[test]
fn sha3_256_official_vectors() {
  run_fixed_vectors("sha3-256", Sha3_256::digest);
}

#[test]
fn sha3_256_official_vectors_portable_kernel() {
  run_fixed_vectors("sha3-256/portable", |data| {
    let mut h = Sha3_256::with_kernel(Keccakf1600KernelId::Portable);
    h.update(data);
    h.finalize()
  });
}

#[test]
fn sha3_256_official_vectors_compact_kernel() {
  run_fixed_vectors("sha3-256/compact", |data| {
    let mut h = Sha3_256::with_kernel(Keccakf1600KernelId::Compact);
    h.update(data);
    h.finalize()
  });
}

#[test]
fn sha3_256_million_a() {
  let data = vec![b'a'; 1_000_000];
  assert_eq!(
    hex(&Sha3_256::digest(&data)),
    "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1"
  );
}
