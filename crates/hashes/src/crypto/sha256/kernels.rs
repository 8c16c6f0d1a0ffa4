use super::{BLOCK_LEN, Sha256};

pub(crate) type CompressBlockFn = fn(&mut [u32; 8], &[u8; BLOCK_LEN]);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sha256KernelId {
  Portable = 0,
  Rolling = 1,
}

pub const ALL: &[Sha256KernelId] = &[Sha256KernelId::Portable, Sha256KernelId::Rolling];

impl Sha256KernelId {
  /// Kernel selected when no override is set.
  pub const DEFAULT: Self = Self::Rolling;

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::Rolling => "rolling",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Sha256KernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

#[must_use]
pub(crate) fn compress_block_fn(id: Sha256KernelId) -> CompressBlockFn {
  match id {
    Sha256KernelId::Portable => Sha256::compress_block_portable,
    Sha256KernelId::Rolling => Sha256::compress_block_rolling,
  }
}
