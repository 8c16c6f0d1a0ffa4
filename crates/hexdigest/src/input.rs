//! Byte source normalization.

use crate::error::DigestError;

/// A present, borrowed byte sequence ready to be hashed.
///
/// Wraps the caller's slice without copying it. The empty sequence is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSequence<'a>(&'a [u8]);

impl<'a> ByteSequence<'a> {
  /// Accept a candidate input, rejecting an absent one with
  /// [`DigestError::InvalidInput`].
  #[inline]
  pub fn new(source: Option<&'a [u8]>) -> Result<Self, DigestError> {
    source.map(Self).ok_or(DigestError::InvalidInput)
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &'a [u8] {
    self.0
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<'a> From<&'a [u8]> for ByteSequence<'a> {
  #[inline]
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes)
  }
}

impl AsRef<[u8]> for ByteSequence<'_> {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}
