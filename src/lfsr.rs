use log::trace;

use crate::error::Error;

/// A shift register that can be stepped one bit at a time.
pub trait Register {
    /// Number of significant bits in the state.
    fn width(&self) -> u32;

    /// Returns the state that follows `state`.
    fn step(&self, state: u32) -> u32;
}

/// Fibonacci LFSR over `width` bits.
///
/// Each step shifts the state left by one and feeds the parity of the tapped
/// bits (`state & poly`) back in as the new bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr {
    width: u32,
    poly: u32,
}

impl Lfsr {
    pub const MAX_WIDTH: u32 = u32::BITS;

    pub const LFSR5: Lfsr = Lfsr {
        width: 5,
        poly: 0x14,
    };
    /// Taps on bits 5 and 4. This is the register the connect key is drawn from.
    pub const LFSR6: Lfsr = Lfsr {
        width: 6,
        poly: 0x30,
    };
    pub const LFSR7: Lfsr = Lfsr {
        width: 7,
        poly: 0x60,
    };

    pub fn new(width: u32, poly: u32) -> Result<Self, Error> {
        if width == 0 || width > Self::MAX_WIDTH {
            return Err(Error::InvalidWidth { width });
        }

        let lfsr = Self { width, poly };
        if poly & !lfsr.mask() != 0 {
            return Err(Error::PolyOutOfRange { width, poly });
        }

        Ok(lfsr)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn poly(&self) -> u32 {
        self.poly
    }

    pub const fn mask(&self) -> u32 {
        u32::MAX >> (u32::BITS - self.width)
    }

    /// `state` must fit in `width` bits.
    pub fn step(&self, state: u32) -> u32 {
        debug_assert_eq!(state & !self.mask(), 0, "state {:#x} wider than register", state);

        let feedback = state & self.poly;
        let shifted = (state << 1) & self.mask();
        // Fold the tapped bits down into bit 0, one at a time.
        let next = (0..self.width).fold(shifted, |acc, i| acc ^ ((feedback >> i) & 1));

        trace!("step {:#x} -> {:#x}", state, next);
        next
    }

    /// Successive states after `seed`, not including `seed` itself.
    pub fn states(&self, seed: u32) -> States {
        States {
            lfsr: *self,
            state: seed,
        }
    }

    /// Length of the cycle `seed` lies on, or `None` if stepping never
    /// returns to it.
    ///
    /// Walks at most `2^width` steps, so this is only practical for narrow
    /// registers.
    pub fn period(&self, seed: u32) -> Option<u64> {
        let limit = 1u64 << self.width;
        self.states(seed)
            .zip(1..=limit)
            .find(|&(state, _)| state == seed)
            .map(|(_, n)| n)
    }
}

impl Register for Lfsr {
    fn width(&self) -> u32 {
        self.width
    }

    fn step(&self, state: u32) -> u32 {
        Lfsr::step(self, state)
    }
}

/// Iterator over the states of an [`Lfsr`]. Never ends.
#[derive(Debug, Clone)]
pub struct States {
    lfsr: Lfsr,
    state: u32,
}

impl Iterator for States {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.state = self.lfsr.step(self.state);
        Some(self.state)
    }
}

/// Adapts a bare step function of known width into a [`Register`].
#[derive(Debug, Clone)]
pub struct FnRegister<F> {
    width: u32,
    f: F,
}

impl<F: Fn(u32) -> u32> FnRegister<F> {
    pub fn new(width: u32, f: F) -> Result<Self, Error> {
        if width == 0 || width > Lfsr::MAX_WIDTH {
            return Err(Error::InvalidWidth { width });
        }
        Ok(Self { width, f })
    }
}

impl<F: Fn(u32) -> u32> Register for FnRegister<F> {
    fn width(&self) -> u32 {
        self.width
    }

    fn step(&self, state: u32) -> u32 {
        (self.f)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-written 6-bit register with taps on bits 5 and 4.
    fn lfsr6(state: u32) -> u32 {
        (((state >> 5) & 1) ^ ((state >> 4) & 1) ^ (state << 1)) & 0x3f
    }

    #[test]
    fn it_works() {
        let x = Lfsr::LFSR6;

        assert_eq!(x.step(0x29), 0x13);
        assert_eq!(x.step(0x13), 0x27);
        assert_eq!(x.step(0x01), 0x02);
        assert_eq!(x.step(0x3f), 0x3e);
    }

    #[test]
    fn matches_hand_written_lfsr6() {
        for state in 0..=0x3f {
            assert_eq!(Lfsr::LFSR6.step(state), lfsr6(state), "state {:#x}", state);
        }
    }

    #[test]
    fn new_matches_constants() {
        assert_eq!(Lfsr::new(5, 0x14), Ok(Lfsr::LFSR5));
        assert_eq!(Lfsr::new(6, 0x30), Ok(Lfsr::LFSR6));
        assert_eq!(Lfsr::new(7, 0x60), Ok(Lfsr::LFSR7));
    }

    #[test]
    fn stays_in_range() {
        for lfsr in [Lfsr::LFSR5, Lfsr::LFSR6, Lfsr::LFSR7] {
            for state in 0..=lfsr.mask() {
                let next = lfsr.step(state);
                assert!(next <= lfsr.mask(), "{:?}: {:#x} -> {:#x}", lfsr, state, next);
                assert_eq!(next, lfsr.step(state));
            }
        }
    }

    #[test]
    fn zero_is_fixed_point() {
        for lfsr in [Lfsr::LFSR5, Lfsr::LFSR6, Lfsr::LFSR7] {
            assert_eq!(lfsr.step(0), 0);
            assert_eq!(lfsr.period(0), Some(1));
        }
    }

    #[test]
    fn maximal_length() {
        assert_eq!(Lfsr::LFSR5.period(1), Some(31));
        assert_eq!(Lfsr::LFSR7.period(1), Some(127));

        for seed in 1..=0x3f {
            assert_eq!(Lfsr::LFSR6.period(seed), Some(63));
        }
    }

    #[test]
    fn states_iterates() {
        let states: Vec<u32> = Lfsr::LFSR6.states(0x29).take(3).collect();
        assert_eq!(states, vec![0x13, 0x27, 0x0f]);
    }

    #[test]
    fn rejects_bad_width() {
        assert_eq!(Lfsr::new(0, 0), Err(Error::InvalidWidth { width: 0 }));
        assert_eq!(Lfsr::new(33, 1), Err(Error::InvalidWidth { width: 33 }));
        assert!(FnRegister::new(0, lfsr6).is_err());
    }

    #[test]
    fn rejects_wide_poly() {
        assert_eq!(
            Lfsr::new(6, 0x40),
            Err(Error::PolyOutOfRange {
                width: 6,
                poly: 0x40
            })
        );
    }

    #[test]
    fn full_width() {
        let x = Lfsr::new(32, 0x8020_0003).unwrap();
        assert_eq!(x.mask(), u32::MAX);
        assert_eq!(x.step(0x8000_0000), 0x0000_0001);
    }

    #[test]
    fn fn_register() {
        let r = FnRegister::new(6, lfsr6).unwrap();
        assert_eq!(r.width(), 6);
        assert_eq!(r.step(0x29), Lfsr::LFSR6.step(0x29));
    }
}
