//! Algorithm tags and their resolution.
//!
//! Callers name an algorithm either through the closed [`Algorithm`] enum or
//! through a raw tag: a numeric code (`1` = SHA-256, `2` = SHA3-256) or a
//! name. Raw tags are resolved here and nowhere else, so an unrecognized tag
//! never reaches an engine.

use core::{fmt, str::FromStr};

use hashes::{
  Digest as _,
  crypto::{Sha3_256, Sha256},
};

use crate::{error::DigestError, input::ByteSequence};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// SHA-256 (FIPS 180-4).
  Sha256,
  /// SHA3-256 (FIPS 202).
  Sha3_256,
}

impl Algorithm {
  /// Every supported algorithm, in code order.
  pub const ALL: [Self; 2] = [Self::Sha256, Self::Sha3_256];

  /// Canonical lowercase name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Sha256 => "sha256",
      Self::Sha3_256 => "sha3-256",
    }
  }

  /// Numeric code.
  #[must_use]
  pub const fn code(self) -> u32 {
    match self {
      Self::Sha256 => 1,
      Self::Sha3_256 => 2,
    }
  }

  #[must_use]
  pub const fn from_code(code: u32) -> Option<Self> {
    match code {
      1 => Some(Self::Sha256),
      2 => Some(Self::Sha3_256),
      _ => None,
    }
  }

  /// Look up an algorithm by name, ignoring ASCII case and surrounding
  /// whitespace.
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    const SHA256: &[&str] = &["sha256", "sha-256", "sha2-256"];
    const SHA3_256: &[&str] = &["sha3-256", "sha3_256", "sha3"];

    let name = name.trim();
    if SHA256.iter().any(|alias| name.eq_ignore_ascii_case(alias)) {
      return Some(Self::Sha256);
    }
    if SHA3_256.iter().any(|alias| name.eq_ignore_ascii_case(alias)) {
      return Some(Self::Sha3_256);
    }
    None
  }

  /// Length of the raw digest in bytes.
  #[must_use]
  pub const fn output_size(self) -> usize {
    match self {
      Self::Sha256 => Sha256::OUTPUT_SIZE,
      Self::Sha3_256 => Sha3_256::OUTPUT_SIZE,
    }
  }

  /// Run the selected engine over `bytes`.
  #[inline]
  #[must_use]
  pub fn compute(self, bytes: ByteSequence<'_>) -> [u8; 32] {
    match self {
      Self::Sha256 => Sha256::digest(bytes.as_bytes()),
      Self::Sha3_256 => Sha3_256::digest(bytes.as_bytes()),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Algorithm {
  type Err = DigestError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.resolve()
  }
}

/// Anything that can name an [`Algorithm`].
pub trait AlgorithmTag {
  /// Resolve to a supported algorithm or fail with
  /// [`DigestError::UnsupportedAlgorithm`].
  fn resolve(&self) -> Result<Algorithm, DigestError>;
}

impl AlgorithmTag for Algorithm {
  #[inline]
  fn resolve(&self) -> Result<Algorithm, DigestError> {
    Ok(*self)
  }
}

impl AlgorithmTag for u32 {
  fn resolve(&self) -> Result<Algorithm, DigestError> {
    Algorithm::from_code(*self).ok_or_else(|| DigestError::UnsupportedAlgorithm(self.to_string()))
  }
}

impl AlgorithmTag for i32 {
  fn resolve(&self) -> Result<Algorithm, DigestError> {
    u32::try_from(*self)
      .ok()
      .and_then(Algorithm::from_code)
      .ok_or_else(|| DigestError::UnsupportedAlgorithm(self.to_string()))
  }
}

impl AlgorithmTag for str {
  fn resolve(&self) -> Result<Algorithm, DigestError> {
    Algorithm::from_name(self).ok_or_else(|| DigestError::UnsupportedAlgorithm(self.to_owned()))
  }
}

impl<T: AlgorithmTag + ?Sized> AlgorithmTag for &T {
  #[inline]
  fn resolve(&self) -> Result<Algorithm, DigestError> {
    (**self).resolve()
  }
}
