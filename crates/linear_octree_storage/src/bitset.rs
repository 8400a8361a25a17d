use linear_octree_core::OctantIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One bit per child octant of a node.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Bitset8 {
    pub bits: u8,
}

impl Bitset8 {
    pub const EMPTY: Self = Self { bits: 0 };
    pub const FULL: Self = Self { bits: 0xFF };

    #[inline]
    pub fn bit_is_set(&self, octant: OctantIndex) -> bool {
        self.bits & (1 << octant.get()) != 0
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.bits != 0
    }

    #[inline]
    pub fn all(&self) -> bool {
        *self == Self::FULL
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn set_all(&mut self) {
        *self = Self::FULL;
    }

    #[inline]
    pub fn set_bit(&mut self, octant: OctantIndex) {
        self.bits |= 1 << octant.get();
    }

    #[inline]
    pub fn unset_bit(&mut self, octant: OctantIndex) {
        self.bits &= !(1 << octant.get());
    }

    /// The octants whose bits are set, in ascending order.
    pub fn iter_set(self) -> impl Iterator<Item = OctantIndex> {
        OctantIndex::ALL
            .iter()
            .copied()
            .filter(move |&octant| self.bit_is_set(octant))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
