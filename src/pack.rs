//! Packing register output into bytes.
//!
//! After every step the top bit of the state is taken as one output bit.
//! Eight bits make a byte, most significant bit first.

use log::debug;

use crate::error::Error;
use crate::lfsr::{Lfsr, Register};

/// Endless stream of bytes drawn from a register.
#[derive(Debug)]
pub struct ByteStream<'a, R: ?Sized> {
    register: &'a R,
    state: u32,
    top: u32,
}

impl<'a, R: Register + ?Sized> ByteStream<'a, R> {
    /// `statewidth` must agree with the register's own width.
    pub fn new(register: &'a R, seed: u32, statewidth: u32) -> Result<Self, Error> {
        if statewidth == 0 || statewidth > Lfsr::MAX_WIDTH {
            return Err(Error::InvalidWidth { width: statewidth });
        }
        if statewidth != register.width() {
            return Err(Error::WidthMismatch {
                register: register.width(),
                statewidth,
            });
        }

        Ok(Self {
            register,
            state: seed,
            top: statewidth - 1,
        })
    }

    /// The state the next bit will be read from.
    pub fn state(&self) -> u32 {
        self.state
    }

    fn next_bit(&mut self) -> u8 {
        let bit = (self.state >> self.top) & 1;
        self.state = self.register.step(self.state);

        bit as u8
    }
}

impl<'a, R: Register + ?Sized> Iterator for ByteStream<'a, R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let mut byte = 0;
        for _ in 0..8 {
            byte = (byte << 1) | self.next_bit();
        }

        debug!("packed {:#04x}, state now {:#x}", byte, self.state);
        Some(byte)
    }
}

/// Draws `nbytes` bytes from `register`, starting from `state`.
pub fn lfsr_to_bytes<R: Register + ?Sized>(
    register: &R,
    state: u32,
    statewidth: u32,
    nbytes: usize,
) -> Result<Vec<u8>, Error> {
    Ok(ByteStream::new(register, state, statewidth)?
        .take(nbytes)
        .collect())
}
