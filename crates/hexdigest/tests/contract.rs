use hexdigest::{Algorithm, DigestError, Hasher, digest};

fn sha256(data: &[u8]) -> String {
  digest(Some(data), Algorithm::Sha256).unwrap().into_string()
}

fn sha3_256(data: &[u8]) -> String {
  digest(Some(data), Algorithm::Sha3_256).unwrap().into_string()
}

#[test]
fn empty_input() {
  assert_eq!(sha256(b""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
  assert_eq!(sha3_256(b""), "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
}

#[test]
fn hello_world_vectors() {
  assert_eq!(
    sha256(b"Hello World!"),
    "7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069"
  );
  assert_eq!(
    sha3_256(b"Hello World!"),
    "d0e47486bbf4c16acac26f8b653592973c1362909f90262877089f9c8a4536af"
  );
  assert_eq!(
    sha256(b"Hello World"),
    "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e"
  );
  assert_eq!(
    sha3_256(b"Hello World"),
    "e167f68d6563d75bb25f3aa49c29ef612d41352dc00606de7cbd630bb2665f51"
  );
}

#[test]
fn published_vectors() {
  let msg448 = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
  let msg896 = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

  assert_eq!(sha256(b"abc"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
  assert_eq!(sha3_256(b"abc"), "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532");
  assert_eq!(sha256(msg448), "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1");
  assert_eq!(sha3_256(msg448), "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376");
  assert_eq!(sha256(msg896), "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1");
  assert_eq!(sha3_256(msg896), "916f6061fe879741ca6469b43971dfdb28b1a32dc36cb3254e812be27aad1d18");
}

#[test]
fn one_million_a() {
  let data = vec![b'a'; 1_000_000];
  assert_eq!(sha256(&data), "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0");
  assert_eq!(sha3_256(&data), "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1");
}

#[test]
fn block_boundaries() {
  let data: Vec<u8> = (0..300u32).map(|i| (i % 251) as u8).collect();
  let sha256_cases = [
    (55, "463eb28e72f82e0a96c0a4cc53690c571281131f672aa229e0d45ae59b598b59"),
    (56, "da2ae4d6b36748f2a318f23e7ab1dfdf45acdc9d049bd80e59de82a60895f562"),
    (63, "29af2686fd53374a36b0846694cc342177e428d1647515f078784d69cdb9e488"),
    (64, "fdeab9acf3710362bd2658cdc9a29e8f9c757fcf9811603a8c447cd1d9151108"),
    (65, "4bfd2c8b6f1eec7a2afeb48b934ee4b2694182027e6d0fc075074f2fabb31781"),
  ];
  for (len, expected) in sha256_cases {
    assert_eq!(sha256(&data[..len]), expected, "sha256 len={len}");
  }

  let sha3_cases = [
    (135, "fded8fd9d6551c601eeb3b7c6bc5e5cfd8aad1d015b7e9aaa9c9b9475231d5e2"),
    (136, "cf3ccff92480a29160c2d38317c430e14749bfee1788106957dfe73f8c4930e5"),
    (137, "ce9d7dc90913ee5d92745019479a5352c6d6279bef18ed07dc0a83ee8084daca"),
    (273, "4827800416bd25b01f53360454943ef688112eaee40422929a59af596a2c0be7"),
  ];
  for (len, expected) in sha3_cases {
    assert_eq!(sha3_256(&data[..len]), expected, "sha3-256 len={len}");
  }
}

#[test]
fn output_is_64_lowercase_hex_chars() {
  for alg in Algorithm::ALL {
    for input in [&b""[..], &b"x"[..], &[0xFFu8; 200][..]] {
      let hex = digest(Some(input), alg).unwrap();
      assert_eq!(hex.len(), 64);
      assert!(hex.as_str().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')), "{alg}: {hex}");
    }
  }
}

#[test]
fn deterministic() {
  for alg in Algorithm::ALL {
    let a = digest(Some(b"same input".as_slice()), alg).unwrap();
    let b = digest(Some(b"same input".as_slice()), alg).unwrap();
    assert_eq!(a, b);
  }
}

#[test]
fn single_bit_flip_changes_digest() {
  // '!' (0x21) -> ' ' (0x20)
  assert_eq!(
    sha256(b"Hello World "),
    "a2f63ad70f3e5c61e5eafa164e95cbe40c9689c304ddd9b74fddf4169e3e838b"
  );
  assert_eq!(
    sha3_256(b"Hello World "),
    "288c4218f740af07343f7981b98b5129936bc11ef1d0d6f6f46e5587b3531bf1"
  );

  let base = b"Hello World!".to_vec();
  for alg in Algorithm::ALL {
    let reference = digest(Some(base.as_slice()), alg).unwrap();
    for byte in 0..base.len() {
      for bit in 0..8 {
        let mut flipped = base.clone();
        flipped[byte] ^= 1 << bit;
        assert_ne!(digest(Some(flipped.as_slice()), alg).unwrap(), reference, "{alg} byte={byte} bit={bit}");
      }
    }
  }
}

#[test]
fn algorithms_disagree() {
  assert_ne!(sha256(b"Hello World!"), sha3_256(b"Hello World!"));
}

#[test]
fn absent_input_is_invalid() {
  for alg in Algorithm::ALL {
    assert_eq!(digest(None, alg), Err(DigestError::InvalidInput));
  }
  assert_eq!(digest(None, "sha256"), Err(DigestError::InvalidInput));
}

#[test]
fn unknown_tags_are_unsupported() {
  let data = Some(b"Hello World!".as_slice());
  assert_eq!(digest(data, 99u32), Err(DigestError::UnsupportedAlgorithm("99".into())));
  assert_eq!(digest(data, 0u32), Err(DigestError::UnsupportedAlgorithm("0".into())));
  assert_eq!(digest(data, -2i32), Err(DigestError::UnsupportedAlgorithm("-2".into())));
  assert_eq!(digest(data, "md5"), Err(DigestError::UnsupportedAlgorithm("md5".into())));
}

#[test]
fn raw_tags_match_enum() {
  let data = Some(b"Hello World!".as_slice());
  assert_eq!(digest(data, 1u32), digest(data, Algorithm::Sha256));
  assert_eq!(digest(data, 2i32), digest(data, Algorithm::Sha3_256));
  assert_eq!(digest(data, "SHA3-256"), digest(data, Algorithm::Sha3_256));
  assert_eq!(digest(data, String::from("sha-256").as_str()), digest(data, Algorithm::Sha256));
}

#[test]
fn streaming_matches_one_shot() {
  let data: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();
  for alg in Algorithm::ALL {
    let expected = digest(Some(data.as_slice()), alg).unwrap();
    for chunk in [1usize, 7, 64, 136, 999] {
      let mut h = Hasher::new(alg).unwrap();
      for part in data.chunks(chunk) {
        h.update(part).unwrap();
      }
      assert_eq!(h.finalize().unwrap(), expected, "{alg} chunk={chunk}");
    }
  }
}

#[test]
fn streaming_is_one_shot() {
  let mut h = Hasher::new(Algorithm::Sha256).unwrap();
  h.update(b"abc").unwrap();
  let first = h.finalize().unwrap();
  assert_eq!(first, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
  assert_eq!(h.finalize(), Err(DigestError::AlreadyFinalized));
  assert_eq!(h.update(b"d"), Err(DigestError::AlreadyFinalized));
}
