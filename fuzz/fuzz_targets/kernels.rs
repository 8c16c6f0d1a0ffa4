//! Cross-kernel equivalence fuzzing.
//!
//! Every compression kernel must produce the same digest for any input.

#![no_main]

use hashes::__internal::kernel_test::{verify_keccakf1600_kernels, verify_sha256_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  verify_sha256_kernels(data).expect("sha256 kernels should agree");
  verify_keccakf1600_kernels(data).expect("keccakf1600 kernels should agree");
});
