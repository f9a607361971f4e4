//! Connect sequence for the two-wire debug transport.
//!
//! A host connects by clocking in, MSB first: a sync byte, the packed
//! 6-bit LFSR key, 72 ones, then the target's multidrop address.

use crate::error::Error;
use crate::lfsr::Lfsr;
use crate::pack::lfsr_to_bytes;

pub const SYNC: u8 = 0x00;
pub const KEY_SEED: u32 = 0x29;
pub const KEY_LEN: usize = 8;
pub const ONES_LEN: usize = 9;

/// Length of the sequence before the address byte.
pub const CONNECT_PREFIX_BITS: usize = 8 * (1 + KEY_LEN + ONES_LEN);

/// The packed LFSR key.
pub fn connect_key() -> Result<Vec<u8>, Error> {
    lfsr_to_bytes(&Lfsr::LFSR6, KEY_SEED, Lfsr::LFSR6.width(), KEY_LEN)
}

/// Address in the high nibble, its complement in the low nibble.
pub fn address_byte(addr: u8) -> Result<u8, Error> {
    if addr > 0xf {
        return Err(Error::InvalidAddress(addr));
    }
    Ok((addr << 4) | (!addr & 0xf))
}

pub fn connect_sequence(addr: u8) -> Result<Vec<u8>, Error> {
    let addr = address_byte(addr)?;

    let mut seq = Vec::with_capacity(CONNECT_PREFIX_BITS / 8 + 1);
    seq.push(SYNC);
    seq.extend(connect_key()?);
    seq.extend(std::iter::repeat(0xff).take(ONES_LEN));
    seq.push(addr);

    Ok(seq)
}
