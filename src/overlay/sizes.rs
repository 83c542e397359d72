use std::mem::size_of;

/// Size of one primitive scalar type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveSize {
    pub name: &'static str,
    pub bytes: usize,
}

impl PrimitiveSize {
    pub const fn bits(&self) -> usize {
        self.bytes * 8
    }
}

macro_rules! sizes {
    ($($ty:ty),* $(,)?) => {
        vec![$(PrimitiveSize { name: stringify!($ty), bytes: size_of::<$ty>() }),*]
    };
}

/// Sizes of Rust's primitive scalars on the current target
pub fn primitive_sizes() -> Vec<PrimitiveSize> {
    sizes![i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, char, f32, f64, bool]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_sizes() {
        let sizes = primitive_sizes();
        let lookup = |name: &str| {
            sizes
                .iter()
                .find(|size| size.name == name)
                .map(|size| size.bytes)
        };

        assert_eq!(lookup("u8"), Some(1));
        assert_eq!(lookup("u32"), Some(4));
        assert_eq!(lookup("f64"), Some(8));
        assert_eq!(lookup("u128"), Some(16));
        assert_eq!(lookup("char"), Some(4));
        assert_eq!(lookup("bool"), Some(1));
        assert_eq!(lookup("usize"), Some(size_of::<usize>()));
    }

    #[test]
    fn test_bits() {
        let size = PrimitiveSize { name: "u16", bytes: 2 };
        assert_eq!(size.bits(), 16);
    }
}
