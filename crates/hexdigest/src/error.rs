//! Errors surfaced by the digest facade.

use thiserror::Error;

/// Rejection reasons for a digest request.
///
/// Every variant is raised before any hashing work begins; the engines
/// themselves cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DigestError {
  /// The input reference was absent.
  #[error("invalid input: no byte sequence supplied")]
  InvalidInput,

  /// The algorithm tag is not one of the supported algorithms.
  #[error("unsupported algorithm: {0}")]
  UnsupportedAlgorithm(String),

  /// A streaming hasher was updated or finalized after it produced its digest.
  #[error("hasher already finalized")]
  AlreadyFinalized,
}
