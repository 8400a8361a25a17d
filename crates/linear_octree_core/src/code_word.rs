use num::PrimInt;
use std::fmt;
use std::hash::Hash;

/// An unsigned integer wide enough to hold a `LocationCode`.
///
/// The width determines the deepest level of the tree. A code at depth `D` uses `3 * D + 1` bits, but the maximum depth is
/// chosen so that the lower corner of any node can also be packed into a single word with one contiguous field per axis.
pub trait CodeWord:
    'static + PrimInt + Hash + Default + Send + Sync + fmt::Debug + fmt::Display + fmt::Binary
{
    const ONE: Self;

    /// Number of bits in the word.
    const BITS: u32;

    /// The deepest level a code of this width can address.
    const MAX_DEPTH: u8;

    /// Width of a single axis field in `LocationCode::lower_corner_code`.
    const CORNER_FIELD_BITS: u32;

    /// Widens an octant selector (`0..8`) into a word.
    fn from_octant_bits(bits: u8) -> Self;

    /// Lossless widening used for bit (de)interleaving.
    fn into_u128(self) -> u128;

    /// Truncating narrowing used for bit (de)interleaving.
    fn from_u128(x: u128) -> Self;

    fn as_f64(self) -> f64;
}

macro_rules! impl_code_word {
    ($t:ty, $max_depth:expr, $field_bits:expr) => {
        impl CodeWord for $t {
            const ONE: Self = 1;
            const BITS: u32 = <$t>::BITS;
            const MAX_DEPTH: u8 = $max_depth;
            const CORNER_FIELD_BITS: u32 = $field_bits;

            #[inline]
            fn from_octant_bits(bits: u8) -> Self {
                bits as $t
            }

            #[inline]
            fn into_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn from_u128(x: u128) -> Self {
                x as $t
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_code_word!(u32, 9, 10);
impl_code_word!(u64, 20, 20);

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deepest_code_and_corner_code_fit_in_word() {
        fn check<W: CodeWord>() {
            let max_depth = W::MAX_DEPTH as u32;
            assert!(3 * max_depth + 1 <= W::BITS);
            assert!(2 * W::CORNER_FIELD_BITS + max_depth <= W::BITS);
            assert!(W::CORNER_FIELD_BITS >= max_depth);
        }

        check::<u32>();
        check::<u64>();
    }
}
