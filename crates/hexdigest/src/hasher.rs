//! Incremental hashing behind the same algorithm tags as [`crate::digest`].
//!
//! The engines' own `finalize` is idempotent; this wrapper makes it one-shot
//! so a hasher cannot be silently reused after it has produced a digest.

use hashes::{
  Digest as _,
  crypto::{Sha3_256, Sha256},
};
use tracing::{debug, warn};

use crate::{
  algorithm::{Algorithm, AlgorithmTag},
  error::DigestError,
  hex::{self, HexString},
};

#[derive(Clone, Debug)]
enum Engine {
  Sha256(Sha256),
  Sha3_256(Sha3_256),
}

impl Engine {
  fn new(algorithm: Algorithm) -> Self {
    match algorithm {
      Algorithm::Sha256 => Self::Sha256(Sha256::new()),
      Algorithm::Sha3_256 => Self::Sha3_256(Sha3_256::new()),
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    match self {
      Self::Sha256(h) => h.update(data),
      Self::Sha3_256(h) => h.update(data),
    }
  }

  #[inline]
  fn finalize(&self) -> [u8; 32] {
    match self {
      Self::Sha256(h) => h.finalize(),
      Self::Sha3_256(h) => h.finalize(),
    }
  }

  #[inline]
  fn reset(&mut self) {
    match self {
      Self::Sha256(h) => h.reset(),
      Self::Sha3_256(h) => h.reset(),
    }
  }
}

/// Streaming digest producing a [`HexString`] once.
///
/// ```
/// use hexdigest::{Algorithm, Hasher};
///
/// let mut h = Hasher::new(Algorithm::Sha256)?;
/// h.update(b"Hello ")?;
/// h.update(b"World!")?;
/// assert_eq!(
///   h.finalize()?,
///   "7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069"
/// );
/// assert!(h.finalize().is_err());
/// # Ok::<(), hexdigest::DigestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Hasher {
  algorithm: Algorithm,
  engine: Engine,
  bytes_hashed: u64,
  finalized: bool,
}

impl Hasher {
  /// Start a hasher for `tag`, failing with
  /// [`DigestError::UnsupportedAlgorithm`] for an unknown tag.
  pub fn new<T: AlgorithmTag>(tag: T) -> Result<Self, DigestError> {
    let algorithm = tag.resolve().inspect_err(|err| warn!(%err, "hasher rejected"))?;
    crate::log_kernel_config();
    Ok(Self {
      algorithm,
      engine: Engine::new(algorithm),
      bytes_hashed: 0,
      finalized: false,
    })
  }

  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  #[inline]
  #[must_use]
  pub const fn is_finalized(&self) -> bool {
    self.finalized
  }

  /// Bytes absorbed since creation or the last reset.
  #[inline]
  #[must_use]
  pub const fn bytes_hashed(&self) -> u64 {
    self.bytes_hashed
  }

  /// Absorb more input.
  pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
    if self.finalized {
      warn!(algorithm = %self.algorithm, "update after finalize");
      return Err(DigestError::AlreadyFinalized);
    }
    self.engine.update(data);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(data.len() as u64);
    Ok(())
  }

  /// Produce the digest. Only the first call succeeds.
  pub fn finalize(&mut self) -> Result<HexString, DigestError> {
    if self.finalized {
      warn!(algorithm = %self.algorithm, "finalize called twice");
      return Err(DigestError::AlreadyFinalized);
    }
    self.finalized = true;
    let out = hex::encode(self.engine.finalize());
    debug!(algorithm = %self.algorithm, len = self.bytes_hashed, "streaming digest finalized");
    Ok(out)
  }

  /// Return to a fresh state for the same algorithm, clearing the finalized
  /// flag.
  pub fn reset(&mut self) {
    self.engine.reset();
    self.bytes_hashed = 0;
    self.finalized = false;
  }
}
