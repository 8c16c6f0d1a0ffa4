//! SHA-256 (FIPS 180-4).
//!
//! Merkle–Damgård over 64-byte blocks with a 64-round compression function.
//! The compression kernel is chosen once per hasher (see [`kernels`]).

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;

use self::kernels::{CompressBlockFn, Sha256KernelId, compress_block_fn};
use super::config;
use crate::util::rotr32;

pub mod kernels;


pub(crate) const BLOCK_LEN: usize = 64;

/// Offset of the 64-bit length field inside the final block.
const LEN_OFFSET: usize = BLOCK_LEN - 8;

const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Schedule word `t >= 16` from the four words it depends on.
#[inline(always)]
fn schedule(w_tm2: u32, w_tm7: u32, w_tm15: u32, w_tm16: u32) -> u32 {
  small_sigma1(w_tm2)
    .wrapping_add(w_tm7)
    .wrapping_add(small_sigma0(w_tm15))
    .wrapping_add(w_tm16)
}

/// One compression round over the working variables `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round(v: &mut [u32; 8], k: u32, w: u32) {
  let [a, b, c, _, e, f, g, h] = *v;
  let t1 = h
    .wrapping_add(big_sigma1(e))
    .wrapping_add(ch(e, f, g))
    .wrapping_add(k)
    .wrapping_add(w);
  let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

  // h <- g, g <- f, ..., b <- a; then patch the two words that mix.
  v.rotate_right(1);
  v[4] = v[4].wrapping_add(t1);
  v[0] = t1.wrapping_add(t2);
}

#[inline(always)]
fn load_block(block: &[u8; BLOCK_LEN], w: &mut [u32]) {
  let (chunks, _) = block.as_chunks::<4>();
  for (word, chunk) in w.iter_mut().zip(chunks.iter()) {
    *word = u32::from_be_bytes(*chunk);
  }
}

#[inline(always)]
fn add_into(state: &mut [u32; 8], v: [u32; 8]) {
  for (s, x) in state.iter_mut().zip(v) {
    *s = s.wrapping_add(x);
  }
}

/// SHA-256 hasher.
#[derive(Clone)]
pub struct Sha256 {
  state: [u32; 8],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
  kernel: Sha256KernelId,
  compress: CompressBlockFn,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self::with_kernel(config::sha256().kernel)
  }
}

impl core::fmt::Debug for Sha256 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Sha256")
      .field("kernel", &self.kernel.as_str())
      .field("bytes_hashed", &self.bytes_hashed.wrapping_add(self.block_len as u64))
      .finish_non_exhaustive()
  }
}

impl Sha256 {
  /// Create a hasher pinned to a specific compression kernel.
  #[inline]
  #[must_use]
  pub fn with_kernel(kernel: Sha256KernelId) -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
      kernel,
      compress: compress_block_fn(kernel),
    }
  }

  /// Kernel this hasher compresses with.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Sha256KernelId {
    self.kernel
  }

  /// Full-schedule kernel: expands all 64 message words up front.
  pub(crate) fn compress_block_portable(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 64];
    load_block(block, &mut w[..16]);
    for t in 16..64 {
      w[t] = schedule(w[t - 2], w[t - 7], w[t - 15], w[t - 16]);
    }

    let mut v = *state;
    for (&k, &wt) in K.iter().zip(w.iter()) {
      round(&mut v, k, wt);
    }
    add_into(state, v);
  }

  /// Rolling-schedule kernel: keeps only the last 16 message words.
  ///
  /// Slot `t & 15` holds `w[t - 16]` until round `t` overwrites it.
  pub(crate) fn compress_block_rolling(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 16];
    load_block(block, &mut w);

    let mut v = *state;
    for (t, &k) in K.iter().enumerate() {
      let wt = if t < 16 {
        w[t]
      } else {
        let next = schedule(w[(t - 2) & 15], w[(t - 7) & 15], w[(t - 15) & 15], w[t & 15]);
        w[t & 15] = next;
        next
      };
      round(&mut v, k, wt);
    }
    add_into(state, v);
  }

  #[inline]
  fn finalize_inner(&self) -> [u8; 32] {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let total_len = self.bytes_hashed.wrapping_add(block_len as u64);

    block[block_len] = 0x80;
    block_len += 1;

    // No room for the length field: pad out this block and start another.
    if block_len > LEN_OFFSET {
      block[block_len..].fill(0);
      (self.compress)(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..LEN_OFFSET].fill(0);

    let bit_len = total_len.wrapping_mul(8);
    block[LEN_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
    (self.compress)(&mut state, &block);

    let mut out = [0u8; 32];
    let (words, _) = out.as_chunks_mut::<4>();
    for (dst, word) in words.iter_mut().zip(state) {
      *dst = word.to_be_bytes();
    }
    out
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = 32;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        (self.compress)(&mut self.state, &self.block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      (self.compress)(&mut self.state, block);
    }
    self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);

    if !rest.is_empty() {
      self.block[..rest.len()].copy_from_slice(rest);
      self.block_len = rest.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::with_kernel(self.kernel);
  }
}
