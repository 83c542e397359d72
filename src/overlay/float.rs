//! IEEE-754 bit pattern views
//!
//! The integer view is the raw bit pattern, never a numeric conversion:
//! `3.1415926f32` reads as `0x40490FDA`, not `3`.

/// An `f32` and a `u32` sharing four bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FloatBits {
    bytes: [u8; 4],
}

impl FloatBits {
    pub fn from_f32(value: f32) -> Self {
        Self {
            bytes: value.to_ne_bytes(),
        }
    }

    pub const fn from_u32(bits: u32) -> Self {
        Self {
            bytes: bits.to_ne_bytes(),
        }
    }

    pub fn as_f32(&self) -> f32 {
        f32::from_ne_bytes(self.bytes)
    }

    pub const fn as_u32(&self) -> u32 {
        u32::from_ne_bytes(self.bytes)
    }

    pub fn set_f32(&mut self, value: f32) {
        self.bytes = value.to_ne_bytes();
    }

    pub fn set_u32(&mut self, bits: u32) {
        self.bytes = bits.to_ne_bytes();
    }
}

/// An `f64` and a `u64` sharing eight bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DoubleBits {
    bytes: [u8; 8],
}

impl DoubleBits {
    pub fn from_f64(value: f64) -> Self {
        Self {
            bytes: value.to_ne_bytes(),
        }
    }

    pub const fn from_u64(bits: u64) -> Self {
        Self {
            bytes: bits.to_ne_bytes(),
        }
    }

    pub fn as_f64(&self) -> f64 {
        f64::from_ne_bytes(self.bytes)
    }

    pub const fn as_u64(&self) -> u64 {
        u64::from_ne_bytes(self.bytes)
    }

    pub fn set_f64(&mut self, value: f64) {
        self.bytes = value.to_ne_bytes();
    }

    pub fn set_u64(&mut self, bits: u64) {
        self.bytes = bits.to_ne_bytes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, PI};

    #[test]
    fn test_float_to_bits() {
        let value = FloatBits::from_f32(3.1415926);
        assert_eq!(value.as_u32(), 0x4049_0FDA);
        assert_eq!(value.as_u32(), 3.1415926f32.to_bits());
    }

    #[test]
    fn test_bits_to_float() {
        let value = FloatBits::from_u32(0x4049_0FDA);
        assert_eq!(value.as_f32(), 3.1415926);
        // one ulp below f32 pi
        assert_eq!(value.as_u32() + 1, std::f32::consts::PI.to_bits());
    }

    #[test]
    fn test_float_views_stay_in_sync() {
        let mut value = FloatBits::default();
        assert_eq!(value.as_f32(), 0.0);

        value.set_f32(-1.0);
        assert_eq!(value.as_u32(), 0xBF80_0000);

        value.set_u32(0x7F80_0000);
        assert_eq!(value.as_f32(), f32::INFINITY);
    }

    #[test]
    fn test_double_to_bits() {
        assert_eq!(DoubleBits::from_f64(E).as_u64(), 0x4005_BF0A_8B14_5769);
    }

    #[test]
    fn test_bits_to_double() {
        assert_eq!(DoubleBits::from_u64(0x4009_21FB_5444_2D18).as_f64(), PI);
    }

    #[test]
    fn test_double_views_stay_in_sync() {
        let mut value = DoubleBits::from_f64(1.0);
        assert_eq!(value.as_u64(), 0x3FF0_0000_0000_0000);

        value.set_u64(0);
        assert_eq!(value.as_f64(), 0.0);

        value.set_f64(-0.0);
        assert_eq!(value.as_u64(), 0x8000_0000_0000_0000);
    }
}
