//! Fixed-width 256-bit signed integer arithmetic
//!
//! This library provides a single type, [`I256`]: a 256-bit signed integer
//! with two's-complement semantics, stored as four 64-bit limbs on the
//! stack.
//!
//! - **Range**: −2²⁵⁵ to 2²⁵⁵ − 1
//! - **Wraparound by default**: `+`, `-`, `*` and unary `-` silently wrap,
//!   matching EVM/Solidity integer semantics; `checked_*`, `overflowing_*`
//!   and `saturating_*` variants detect or clamp overflow instead
//! - **No allocation**: every operation works on fixed-size values;
//!   decimal formatting renders through a stack buffer
//! - **no_std compatible**: works in constrained and WebAssembly targets
//! - **Serde support**: decimal strings for human-readable formats, raw
//!   bytes for binary formats (behind the `serde` feature)
//! - **Big-integer interop**: lossless conversion to and from
//!   `num_bigint::BigInt` with overflow detection on import (behind the
//!   default-on `bigint` feature)
//!
//! ## Example
//!
//! ```rust
//! use int256::I256;
//! use core::str::FromStr;
//!
//! let price = I256::from_str("-57896044618658097711785492504343953926").unwrap();
//! let scaled = price * I256::from(1_000_000_000u64);
//! assert!(scaled.is_negative());
//!
//! // Wrapping is the default contract:
//! assert_eq!(I256::MAX + I256::ONE, I256::MIN);
//! assert_eq!(I256::MAX.checked_add(I256::ONE), None);
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

mod i256;
mod limb;

pub use i256::I256;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Int256Error {
    #[error("overflow: value does not fit in 256 bits")]
    Overflow,

    #[error("invalid decimal string")]
    InvalidFormat,
}

pub type Result<T> = core::result::Result<T, Int256Error>;
