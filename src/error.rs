use thiserror::Error;

/// Errors raised when building a register or requesting output from one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The register width is zero or does not fit the 32-bit state.
    #[error("Invalid register width: {width}")]
    InvalidWidth { width: u32 },
    /// The tap mask has bits set above the register width.
    #[error("Tap mask {poly:#x} does not fit in {width} bits")]
    PolyOutOfRange { width: u32, poly: u32 },
    /// The packer was asked to read a different width than the register has.
    #[error("Register is {register} bits wide but statewidth is {statewidth}")]
    WidthMismatch { register: u32, statewidth: u32 },
    /// Multidrop addresses are 4 bits.
    #[error("Multidrop address {0:#04x} does not fit in 4 bits")]
    InvalidAddress(u8),
}
