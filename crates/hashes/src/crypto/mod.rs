//! Cryptographic hash functions.

pub mod config;
pub mod keccak;
pub mod sha256;
pub mod sha3;

pub use config::{KeccakConfig, KeccakForce, Sha256Config, Sha256Force};
pub use keccak::kernels::Keccakf1600KernelId;
pub use sha3::Sha3_256;
pub use sha256::{Sha256, kernels::Sha256KernelId};
