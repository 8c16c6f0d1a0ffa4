//! Fuzz target for the streaming facade.
//!
//! Arbitrary update splits must reproduce the one-shot hex digest, and the
//! hasher must refuse reuse after finalization.

#![no_main]

use arbitrary::Arbitrary;
use hexdigest::{Algorithm, DigestError, Hasher, digest};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Raw algorithm code; anything but 1 and 2 must be rejected
  code: u32,
}

fuzz_target!(|input: Input| {
  let data = input.data.as_slice();

  let Some(algorithm) = Algorithm::from_code(input.code) else {
    assert_eq!(
      digest(Some(data), input.code),
      Err(DigestError::UnsupportedAlgorithm(input.code.to_string()))
    );
    assert!(Hasher::new(input.code).is_err());
    return;
  };

  let expected = digest(Some(data), algorithm).expect("supported algorithm");

  let mut hasher = Hasher::new(algorithm).expect("supported algorithm");
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 512).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]).expect("hasher is live");
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize().expect("first finalize"), expected, "{algorithm} streaming mismatch");
  assert_eq!(hasher.finalize(), Err(DigestError::AlreadyFinalized));
  assert_eq!(hasher.update(data), Err(DigestError::AlreadyFinalized));
});
