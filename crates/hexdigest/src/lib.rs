//! SHA-256 and SHA3-256 digests as lowercase hex strings.
//!
//! [`digest`] validates its input and algorithm tag, runs the selected engine
//! from the `hashes` crate, and renders the 32-byte result as 64 lowercase hex
//! characters.
//!
//! ```
//! use hexdigest::{Algorithm, digest};
//!
//! let hex = digest(Some(b"Hello World!".as_slice()), Algorithm::Sha3_256)?;
//! assert_eq!(hex, "d0e47486bbf4c16acac26f8b653592973c1362909f90262877089f9c8a4536af");
//!
//! // Raw numeric and named tags resolve the same way.
//! assert_eq!(digest(Some(b"".as_slice()), 1u32)?, digest(Some(b"".as_slice()), "sha256")?);
//! # Ok::<(), hexdigest::DigestError>(())
//! ```
//!
//! Incremental input goes through [`Hasher`].

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod algorithm;
pub mod error;
pub mod hasher;
pub mod hex;
pub mod input;

use std::sync::Once;

use hashes::crypto::config;
use tracing::{debug, trace, warn};

pub use crate::{
  algorithm::{Algorithm, AlgorithmTag},
  error::DigestError,
  hasher::Hasher,
  hex::HexString,
  input::ByteSequence,
};

/// Digest `data` with `algorithm` and render it as lowercase hex.
///
/// # Errors
///
/// - [`DigestError::InvalidInput`] if `data` is `None`.
/// - [`DigestError::UnsupportedAlgorithm`] if `algorithm` names neither
///   SHA-256 nor SHA3-256.
///
/// Input is checked before the tag.
pub fn digest<T: AlgorithmTag>(data: Option<&[u8]>, algorithm: T) -> Result<HexString, DigestError> {
  let bytes = ByteSequence::new(data).inspect_err(|err| warn!(%err, "digest rejected"))?;
  let algorithm = algorithm
    .resolve()
    .inspect_err(|err| warn!(%err, "digest rejected"))?;

  log_kernel_config();
  let out = algorithm.compute(bytes);
  debug!(algorithm = %algorithm, len = bytes.len(), "digest computed");
  Ok(crate::hex::encode(out))
}

/// Report the engine kernels in effect, once per process.
pub(crate) fn log_kernel_config() {
  static LOGGED: Once = Once::new();
  LOGGED.call_once(|| {
    let sha256 = config::sha256();
    let keccak = config::keccak();
    trace!(
      sha256.force = sha256.requested_force.as_str(),
      sha256.kernel = sha256.kernel.as_str(),
      keccak.force = keccak.requested_force.as_str(),
      keccak.kernel = keccak.kernel.as_str(),
      "kernel configuration"
    );
  });
}
