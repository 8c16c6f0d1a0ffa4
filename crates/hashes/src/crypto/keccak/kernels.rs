use super::{keccakf_compact, keccakf_portable};

pub(crate) type PermuteFn = fn(&mut [u64; 25]);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Keccakf1600KernelId {
  Portable = 0,
  Compact = 1,
}

pub const ALL: &[Keccakf1600KernelId] = &[Keccakf1600KernelId::Portable, Keccakf1600KernelId::Compact];

impl Keccakf1600KernelId {
  /// Kernel selected when no override is set.
  pub const DEFAULT: Self = Self::Compact;

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::Compact => "compact",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Keccakf1600KernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

#[must_use]
pub(crate) fn permute_fn(id: Keccakf1600KernelId) -> PermuteFn {
  match id {
    Keccakf1600KernelId::Portable => keccakf_portable,
    Keccakf1600KernelId::Compact => keccakf_compact,
  }
}
