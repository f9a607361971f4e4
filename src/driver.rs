use log::debug;

use crate::error::Error;
use crate::lfsr::Lfsr;
use crate::pack::lfsr_to_bytes;

/// What the binary prints: a register, its seed, and how many bytes to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    lfsr: Lfsr,
    seed: u32,
    nbytes: usize,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(Lfsr::LFSR6, 0x29, 8)
    }
}

impl Driver {
    /// `seed` must fit in the register's width.
    pub const fn new(lfsr: Lfsr, seed: u32, nbytes: usize) -> Self {
        Self { lfsr, seed, nbytes }
    }

    pub fn bytes(&self) -> Result<Vec<u8>, Error> {
        debug!(
            "drawing {} bytes from {:?}, seed {:#x}",
            self.nbytes, self.lfsr, self.seed
        );
        lfsr_to_bytes(&self.lfsr, self.seed, self.lfsr.width(), self.nbytes)
    }

    /// The output line, without the trailing newline.
    pub fn render(&self) -> Result<String, Error> {
        Ok(format_hex_list(&self.bytes()?))
    }
}

/// Formats bytes as `0x`-prefixed two-digit lowercase hex, joined by `", "`.
pub fn format_hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:#04x}", b))
        .collect::<Vec<_>>()
        .join(", ")
}
