//! Key generation for the two-wire debug transport.
//!
//! A small Fibonacci LFSR is stepped and the top bit of each state is packed
//! into bytes, MSB first.

pub mod connect;
pub mod driver;
pub mod error;
pub mod lfsr;
pub mod pack;

pub use error::Error;
pub use lfsr::{FnRegister, Lfsr, Register};
pub use pack::{lfsr_to_bytes, ByteStream};
