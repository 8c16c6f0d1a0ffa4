//! Native SHA-256 and SHA3-256 digest engines.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - SHA-256 (FIPS 180-4) and SHA3-256 (FIPS 202) engines, their
//!   compression kernels, and kernel selection overrides.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod util;

pub use traits::Digest;

/// Cross-kernel verification hooks for fuzzing and benchmarks.
///
/// Not part of the stable API.
#[cfg(feature = "alloc")]
#[doc(hidden)]
pub mod __internal {
  pub mod kernel_test {
    pub use crate::crypto::keccak::kernel_test::{run_all_keccakf1600_kernels, verify_keccakf1600_kernels};
    pub use crate::crypto::sha256::kernel_test::{run_all_sha256_kernels, verify_sha256_kernels};
  }
}
