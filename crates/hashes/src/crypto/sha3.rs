//! SHA3-256 (FIPS 202).
//!
//! Portable, `no_std`, pure Rust Keccak-f[1600] sponge with a 136-byte rate
//! and 512-bit capacity.

use traits::Digest;

use super::keccak::{KeccakCore, kernels::Keccakf1600KernelId};

const SHA3_256_RATE: usize = 136;

/// SHA-3 domain separation suffix `01`, followed by the first pad bit.
const SHA3_DS: u8 = 0x06;

/// SHA3-256.
#[derive(Clone, Default)]
pub struct Sha3_256 {
  core: KeccakCore<SHA3_256_RATE>,
}

impl Sha3_256 {
  /// Create a hasher pinned to a specific Keccak-f[1600] kernel.
  #[inline]
  #[must_use]
  pub fn with_kernel(kernel: Keccakf1600KernelId) -> Self {
    Self {
      core: KeccakCore::with_kernel(kernel),
    }
  }

  /// Kernel this hasher permutes with.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Keccakf1600KernelId {
    self.core.kernel()
  }
}

impl core::fmt::Debug for Sha3_256 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Sha3_256")
      .field("kernel", &self.kernel().as_str())
      .field("buffered", &self.core.buffered())
      .finish_non_exhaustive()
  }
}

impl Digest for Sha3_256 {
  const OUTPUT_SIZE: usize = 32;
  const BLOCK_SIZE: usize = SHA3_256_RATE;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.core.update(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 32];
    self.core.finalize_into_fixed(SHA3_DS, &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    self.core.reset();
  }
}
