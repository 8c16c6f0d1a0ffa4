//! Runtime kernel selection (overrides) for SHA-256 and Keccak-f[1600].
//!
//! Every kernel is portable and bit-identical to the others; forcing one only
//! changes how the compression loop is scheduled. Overrides come from:
//! - `HEXDIGEST_SHA256_FORCE` = `auto` | `portable` | `rolling`
//! - `HEXDIGEST_KECCAK_FORCE` = `auto` | `portable` | `compact`
//!
//! The environment is read once per process (feature `std`). Unrecognized or
//! empty values fall back to `auto`.

use super::{keccak::kernels::Keccakf1600KernelId, sha256::kernels::Sha256KernelId};

/// Forced kernel selection for SHA-256.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sha256Force {
  /// Use the default kernel.
  #[default]
  Auto,
  /// Force the full 64-word message schedule kernel.
  Portable,
  /// Force the 16-word rolling schedule kernel.
  Rolling,
}

impl Sha256Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Rolling => "rolling",
    }
  }

  /// Parse an override value. Returns `None` for unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("full")
    {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("rolling") || value.eq_ignore_ascii_case("ring") {
      return Some(Self::Rolling);
    }

    None
  }

  /// Kernel this force mode selects.
  #[inline]
  #[must_use]
  pub const fn kernel(self) -> Sha256KernelId {
    match self {
      Self::Auto => Sha256KernelId::DEFAULT,
      Self::Portable => Sha256KernelId::Portable,
      Self::Rolling => Sha256KernelId::Rolling,
    }
  }
}

/// Forced kernel selection for Keccak-f[1600].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeccakForce {
  /// Use the default kernel.
  #[default]
  Auto,
  /// Force the 5×5 lane grid kernel with separate step mappings.
  Portable,
  /// Force the flat-state kernel with the combined ρ/π lane walk.
  Compact,
}

impl KeccakForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Compact => "compact",
    }
  }

  /// Parse an override value. Returns `None` for unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("scalar")
      || value.eq_ignore_ascii_case("grid")
    {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("compact") || value.eq_ignore_ascii_case("flat") {
      return Some(Self::Compact);
    }

    None
  }

  /// Kernel this force mode selects.
  #[inline]
  #[must_use]
  pub const fn kernel(self) -> Keccakf1600KernelId {
    match self {
      Self::Auto => Keccakf1600KernelId::DEFAULT,
      Self::Portable => Keccakf1600KernelId::Portable,
      Self::Compact => Keccakf1600KernelId::Compact,
    }
  }
}

/// SHA-256 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sha256Config {
  /// Requested force mode (env/programmatic).
  pub requested_force: Sha256Force,
  /// Kernel used by new hashers.
  pub kernel: Sha256KernelId,
}

/// Keccak-f[1600] runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeccakConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: KeccakForce,
  /// Permutation used by new sponges.
  pub kernel: Keccakf1600KernelId,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  sha256: Sha256Force,
  keccak: KeccakForce,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    sha256: var("HEXDIGEST_SHA256_FORCE")
      .as_deref()
      .and_then(Sha256Force::parse)
      .unwrap_or_default(),
    keccak: var("HEXDIGEST_KECCAK_FORCE")
      .as_deref()
      .and_then(KeccakForce::parse)
      .unwrap_or_default(),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Current SHA-256 configuration.
#[inline]
#[must_use]
pub fn sha256() -> Sha256Config {
  let requested_force = overrides().sha256;
  Sha256Config {
    requested_force,
    kernel: requested_force.kernel(),
  }
}

/// Current Keccak-f[1600] configuration.
#[inline]
#[must_use]
pub fn keccak() -> KeccakConfig {
  let requested_force = overrides().keccak;
  KeccakConfig {
    requested_force,
    kernel: requested_force.kernel(),
  }
}
