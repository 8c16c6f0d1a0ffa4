//! Keccak-f[1600] sponge core (internal).
//!
//! The 1600-bit state is 25 little-endian 64-bit lanes; lane `(x, y)` lives at
//! index `x + 5 * y`. This module exposes only what the fixed-output SHA-3
//! functions need: absorb, pad, and a single squeeze of at most one rate block.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

use self::kernels::{Keccakf1600KernelId, PermuteFn, permute_fn};
use super::config;
use crate::util::rotl64;

pub mod kernels;


const KECCAKF_ROUNDS: usize = 24;

/// State width in bytes.
pub(crate) const STATE_BYTES: usize = 200;

// Round constants.
const RC: [u64; KECCAKF_ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

// ρ rotation offsets, indexed by lane `x + 5 * y`.
const RHO: [u32; 25] = [
  0, 1, 62, 28, 27, //
  36, 44, 6, 55, 20, //
  3, 10, 43, 25, 39, //
  41, 45, 15, 21, 8, //
  18, 2, 61, 56, 14,
];

// Combined ρ∘π walk: starting from lane 1, each step moves the carried lane to
// `PI_WALK[i]` rotated by `RHO_WALK[i]`. Lane 0 is a fixed point of both.
const PI_WALK: [usize; 24] = [10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1];
const RHO_WALK: [u32; 24] = [
  1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

#[inline(always)]
fn theta(a: &mut [u64; 25]) {
  let mut c = [0u64; 5];
  for (x, cx) in c.iter_mut().enumerate() {
    *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
  }
  for x in 0..5 {
    let d = c[(x + 4) % 5] ^ rotl64(c[(x + 1) % 5], 1);
    for y in 0..5 {
      a[x + 5 * y] ^= d;
    }
  }
}

#[inline(always)]
fn rho(a: &mut [u64; 25]) {
  for (lane, &r) in a.iter_mut().zip(RHO.iter()) {
    *lane = rotl64(*lane, r);
  }
}

/// π: lane `(x, y)` moves to `(y, 2x + 3y)`.
#[inline(always)]
fn pi(a: &[u64; 25]) -> [u64; 25] {
  let mut b = [0u64; 25];
  for y in 0..5 {
    for x in 0..5 {
      b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y];
    }
  }
  b
}

/// χ, the only non-linear step, applied row by row.
#[inline(always)]
fn chi(b: &[u64; 25], a: &mut [u64; 25]) {
  for y in 0..5 {
    let row = 5 * y;
    for x in 0..5 {
      a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
    }
  }
}

#[inline(always)]
fn iota(a: &mut [u64; 25], rc: u64) {
  a[0] ^= rc;
}

/// Keccak-f[1600] on the 5×5 grid, one step mapping at a time.
pub(crate) fn keccakf_portable(state: &mut [u64; 25]) {
  for &rc in &RC {
    theta(state);
    rho(state);
    let b = pi(state);
    chi(&b, state);
    iota(state, rc);
  }
}

/// Keccak-f[1600] on the flat state with ρ and π fused into one lane walk.
pub(crate) fn keccakf_compact(a: &mut [u64; 25]) {
  for &rc in &RC {
    theta(a);

    let mut carried = a[1];
    for (&dst, &r) in PI_WALK.iter().zip(RHO_WALK.iter()) {
      let next = a[dst];
      a[dst] = rotl64(carried, r);
      carried = next;
    }

    for row in a.chunks_exact_mut(5) {
      let [b0, b1, b2, b3, b4] = [row[0], row[1], row[2], row[3], row[4]];
      row[0] = b0 ^ (!b1 & b2);
      row[1] = b1 ^ (!b2 & b3);
      row[2] = b2 ^ (!b3 & b4);
      row[3] = b3 ^ (!b4 & b0);
      row[4] = b4 ^ (!b0 & b1);
    }

    a[0] ^= rc;
  }
}

/// Sponge over Keccak-f[1600] with a `RATE`-byte block buffer.
#[derive(Clone)]
pub(crate) struct KeccakCore<const RATE: usize> {
  state: [u64; 25],
  buf: [u8; RATE],
  buf_len: usize,
  kernel: Keccakf1600KernelId,
  permute: PermuteFn,
}

impl<const RATE: usize> Default for KeccakCore<RATE> {
  #[inline]
  fn default() -> Self {
    Self::with_kernel(config::keccak().kernel)
  }
}

impl<const RATE: usize> KeccakCore<RATE> {
  #[inline]
  pub(crate) fn with_kernel(kernel: Keccakf1600KernelId) -> Self {
    debug_assert!(RATE % 8 == 0 && RATE < STATE_BYTES);
    Self {
      state: [0u64; 25],
      buf: [0u8; RATE],
      buf_len: 0,
      kernel,
      permute: permute_fn(kernel),
    }
  }

  #[inline]
  pub(crate) const fn kernel(&self) -> Keccakf1600KernelId {
    self.kernel
  }

  /// Bytes absorbed into the buffer but not yet permuted.
  #[inline]
  pub(crate) const fn buffered(&self) -> usize {
    self.buf_len
  }

  #[inline(always)]
  fn absorb_block(state: &mut [u64; 25], block: &[u8; RATE], permute: PermuteFn) {
    let lanes = RATE / 8;
    let (chunks, _) = block.as_chunks::<8>();
    for (lane, chunk) in state[..lanes].iter_mut().zip(chunks.iter()) {
      *lane ^= u64::from_le_bytes(*chunk);
    }
    permute(state);
  }

  pub(crate) fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(RATE - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len == RATE {
        Self::absorb_block(&mut self.state, &self.buf, self.permute);
        self.buf_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<RATE>();
    for block in blocks {
      Self::absorb_block(&mut self.state, block, self.permute);
    }

    if !rest.is_empty() {
      self.buf[..rest.len()].copy_from_slice(rest);
      self.buf_len = rest.len();
    }
  }

  #[inline(always)]
  fn finalize_state(&self, ds: u8) -> [u64; 25] {
    let mut state = self.state;
    let mut buf = self.buf;
    let buf_len = self.buf_len;

    // Ensure padding happens over a zero-padded block.
    buf[buf_len..].fill(0);

    // Domain separator, then pad10*1 with final 0x80. With one free byte
    // left both land on the same byte.
    buf[buf_len] ^= ds;
    buf[RATE - 1] ^= 0x80;

    Self::absorb_block(&mut state, &buf, self.permute);
    state
  }

  /// Pad with domain separator `ds` and squeeze `OUT <= RATE` bytes.
  pub(crate) fn finalize_into_fixed<const OUT: usize>(&self, ds: u8, out: &mut [u8; OUT]) {
    debug_assert!(OUT <= RATE);
    let state = self.finalize_state(ds);

    for (i, word) in state.iter().enumerate().take(OUT.div_ceil(8)) {
      let bytes = word.to_le_bytes();
      let start = i * 8;
      let end = core::cmp::min(start + 8, OUT);
      out[start..end].copy_from_slice(&bytes[..end - start]);
    }
  }

  #[inline]
  pub(crate) fn reset(&mut self) {
    *self = Self::with_kernel(self.kernel);
  }
}
