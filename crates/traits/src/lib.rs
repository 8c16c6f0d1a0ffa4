//! Core traits for the hexdigest engines.
//!
//! This crate provides the single seam every digest engine conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Digest`] | Fixed-output cryptographic hash | SHA-256, SHA3-256 |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;

pub use digest::Digest;
