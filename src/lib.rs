//! ISAAC and ISAAC-64, Bob Jenkins' "Indirection, Shift, Accumulate, Add, Count" PRNGs
//!
//! Both generators are deterministic: the same seed gives the same stream on every platform.
//! Neither is cryptographically secure.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod bytes;
pub mod isaac;

pub use isaac::{Isaac, Isaac64, Word};
