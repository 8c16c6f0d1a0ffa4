//! Lowercase hexadecimal rendering of digests.

use core::fmt;

/// A digest rendered as lowercase hex, two characters per byte, most
/// significant byte first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexString(String);

impl HexString {
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Number of hex characters (twice the digest length).
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[inline]
  #[must_use]
  pub fn into_string(self) -> String {
    self.0
  }
}

/// Encode raw digest bytes as a [`HexString`].
#[must_use]
pub fn encode<T: AsRef<[u8]>>(bytes: T) -> HexString {
  HexString(::hex::encode(bytes))
}

impl fmt::Display for HexString {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for HexString {
  #[inline]
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl From<HexString> for String {
  #[inline]
  fn from(hex: HexString) -> Self {
    hex.0
  }
}

impl PartialEq<str> for HexString {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for HexString {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

impl PartialEq<HexString> for &str {
  fn eq(&self, other: &HexString) -> bool {
    *self == other.0
  }
}
