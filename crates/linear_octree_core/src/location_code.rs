//! Linear octree addresses.
//!
//! A `LocationCode` packs the path from the root of an octree down to some node into a single integer. The highest set bit is
//! a marker, and every 3 bits below it select one of the 8 octants at successive levels, with the choice made at the root in
//! the most significant group:
//!
//! ```text
//! depth 0:
//!   code = 0b1
//! depth 1:
//!   code = 0b1000, 0b1001, 0b1010, 0b1011, 0b1100, 0b1101, 0b1110, 0b1111
//! depth 2:
//!   code = 0b1000000, ...
//! ...
//! ```
//!
//! Within each 3-bit group the octant is encoded as `0bZYX`, so deinterleaving every third bit of the code (below the marker)
//! recovers the grid coordinates of the node's lower corner.

use crate::{CodeWord, CubeOctant, Point3u};

use morton_encoding::{morton_decode, morton_encode};
use std::fmt;
use thiserror::Error;

const OCTANT_BITS: usize = 3;
const OCTANT_MASK: u8 = 0b111;

/// One of the 8 children of an octree node, as a number in `[0..7]` of the binary format `0bZYX`.
///
/// Out-of-range indices are unrepresentable; construct with `OctantIndex::new` or `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OctantIndex(u8);

impl OctantIndex {
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The low 3 bits of `bits` as an octant.
    #[inline]
    pub fn from_low_bits(bits: u8) -> Self {
        Self(bits & OCTANT_MASK)
    }

    /// The octant on the positive side of each axis where the flag is `true`.
    #[inline]
    pub fn from_axis_flags(x: bool, y: bool, z: bool) -> Self {
        Self(x as u8 | (y as u8) << 1 | (z as u8) << 2)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The corner of the unit cube that this octant occupies.
    #[inline]
    pub fn corner_offset(self) -> Point3u {
        Point3u::CUBE_CORNER_OFFSETS[self.index()]
    }
}

impl TryFrom<u8> for OctantIndex {
    type Error = CodeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(CodeError::OctantOutOfRange(index))
    }
}

impl fmt::Display for OctantIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a raw integer is not a valid `LocationCode`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CodeError {
    #[error("zero is not a location code")]
    Zero,
    #[error("marker bit of {code:#b} is at bit {high_bit_index}, which is not a multiple of 3")]
    MisalignedMarker { code: u128, high_bit_index: u32 },
    #[error("location code {code:#b} has depth {depth}, but at most {max_depth} is supported")]
    TooDeep { code: u128, depth: u8, max_depth: u8 },
    #[error("octant index {0} is out of range [0..7]")]
    OctantOutOfRange(u8),
}

/// The address of a node in a linear octree. See the module docs for the bit layout.
///
/// Every `LocationCode` is valid: the marker bit is aligned to a level boundary and the depth never exceeds
/// `W::MAX_DEPTH`. Derivations that would leave that range, like `child` at the maximum depth or `parent` of the root,
/// return `None`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LocationCode<W>(W);

pub type LocationCode32 = LocationCode<u32>;
pub type LocationCode64 = LocationCode<u64>;

impl<W: CodeWord> LocationCode<W> {
    pub const ROOT: Self = Self(W::ONE);

    /// Validates `raw` as a location code.
    pub fn new(raw: W) -> Result<Self, CodeError> {
        if raw.is_zero() {
            return Err(CodeError::Zero);
        }

        let high_bit_index = Self::high_bit_index_of(raw);
        if high_bit_index % OCTANT_BITS as u32 != 0 {
            return Err(CodeError::MisalignedMarker {
                code: raw.into_u128(),
                high_bit_index,
            });
        }

        let depth = (high_bit_index / OCTANT_BITS as u32) as u8;
        if depth > W::MAX_DEPTH {
            return Err(CodeError::TooDeep {
                code: raw.into_u128(),
                depth,
                max_depth: W::MAX_DEPTH,
            });
        }

        Ok(Self(raw))
    }

    /// Builds the code that the sequence of octant choices `path` leads to, starting at the root. Returns `None` if the path
    /// is longer than `W::MAX_DEPTH`.
    pub fn from_path(path: impl IntoIterator<Item = OctantIndex>) -> Option<Self> {
        path.into_iter()
            .try_fold(Self::ROOT, |code, octant| code.child(octant))
    }

    /// The code at `depth` whose octant contains the grid cell `p`. Returns `None` if `depth > W::MAX_DEPTH` or `p` is outside
    /// of the grid.
    ///
    /// When `p` is the lower corner of a node at `depth`, this is the inverse of `lower_corner`.
    pub fn containing_cell(p: Point3u, depth: u8) -> Option<Self> {
        if depth > W::MAX_DEPTH || !p.all_components_lt(Self::grid_edge_length()) {
            return None;
        }

        let shift = (W::MAX_DEPTH - depth) as u32;
        let q = p >> shift;
        let bits: u128 = morton_encode([q.z(), q.y(), q.x()]);
        let marker = W::ONE << (OCTANT_BITS * depth as usize);

        Some(Self(marker | W::from_u128(bits)))
    }

    /// The raw integer.
    #[inline]
    pub fn get(self) -> W {
        self.0
    }

    /// The deepest level any code of this width can address.
    #[inline]
    pub fn max_depth() -> u8 {
        W::MAX_DEPTH
    }

    /// Edge length of the whole domain, in cells at the maximum depth.
    #[inline]
    pub fn grid_edge_length() -> u32 {
        1 << W::MAX_DEPTH as u32
    }

    #[inline]
    fn high_bit_index_of(raw: W) -> u32 {
        W::BITS - 1 - raw.leading_zeros()
    }

    /// Index of the marker bit.
    #[inline]
    pub fn high_bit_index(self) -> u32 {
        Self::high_bit_index_of(self.0)
    }

    /// Just the marker bit.
    #[inline]
    pub fn high_bit(self) -> W {
        W::ONE << self.high_bit_index() as usize
    }

    /// All of the octant selectors, without the marker bit.
    #[inline]
    pub fn location_bits(self) -> W {
        self.0 & !self.high_bit()
    }

    /// The number of octant selectors in the code. The root has depth 0.
    #[inline]
    pub fn depth(self) -> u8 {
        (self.high_bit_index() / OCTANT_BITS as u32) as u8
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    /// The code of the node one level up, or `None` for the root.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        if self.is_root() {
            None
        } else {
            Some(Self(self.0 >> OCTANT_BITS))
        }
    }

    /// The code of the `octant` child, or `None` if `self` is already at `W::MAX_DEPTH`.
    #[inline]
    pub fn child(self, octant: OctantIndex) -> Option<Self> {
        if self.depth() >= W::MAX_DEPTH {
            None
        } else {
            Some(Self(self.extend().0 | W::from_octant_bits(octant.get())))
        }
    }

    #[inline]
    fn extend(self) -> Self {
        Self(self.0 << OCTANT_BITS)
    }

    /// Which child of its parent this node is. The root reports octant 0.
    #[inline]
    pub fn final_child_index(self) -> OctantIndex {
        let low_bits = self.0 & W::from_octant_bits(OCTANT_MASK);

        // Only the low 3 bits remain, so the narrowing cast is lossless.
        OctantIndex::from_low_bits(low_bits.into_u128() as u8)
    }

    /// The ancestor of `self` at `depth`. `depth` must not exceed `self.depth()`.
    #[inline]
    pub fn ancestor_at_depth(self, depth: u8) -> Self {
        debug_assert!(depth <= self.depth());

        Self(self.0 >> (OCTANT_BITS * (self.depth() - depth) as usize))
    }

    /// The octant choice made when descending from the ancestor at `depth`. `depth` must be less than `self.depth()`.
    #[inline]
    pub fn octant_at_depth(self, depth: u8) -> OctantIndex {
        debug_assert!(depth < self.depth());

        self.ancestor_at_depth(depth + 1).final_child_index()
    }

    /// The octant choices from the root down to `self`.
    pub fn path(self) -> impl Iterator<Item = OctantIndex> {
        (0..self.depth()).map(move |d| self.octant_at_depth(d))
    }

    /// Edge length of this node's octant, in cells at the maximum depth.
    #[inline]
    pub fn edge_length(self) -> u32 {
        1 << (W::MAX_DEPTH - self.depth()) as u32
    }

    /// The lower corner of this node's octant, in cells at the maximum depth.
    pub fn lower_corner(self) -> Point3u {
        let [x, y, z] = self.deinterleave();
        let shift = (W::MAX_DEPTH - self.depth()) as u32;

        Point3u([x, y, z]) << shift
    }

    /// Same coordinates as `lower_corner`, but packed into a single word with one contiguous field per axis (X in the most
    /// significant field). Sorting by this key groups nodes by X, then Y, then Z.
    pub fn lower_corner_code(self) -> W {
        let [x, y, z] = self.deinterleave();
        let shift = (W::MAX_DEPTH - self.depth()) as usize;
        let field = W::CORNER_FIELD_BITS as usize;

        let packed = (W::from_u128(x as u128) << (2 * field))
            | (W::from_u128(y as u128) << field)
            | W::from_u128(z as u128);

        packed << shift
    }

    /// The cube spanned by this node.
    #[inline]
    pub fn octant(self) -> CubeOctant {
        CubeOctant::new_unchecked(self.lower_corner(), self.edge_length())
    }

    /// Splits the location bits into one stream per axis, without normalizing to the maximum depth.
    fn deinterleave(self) -> [u32; 3] {
        let [z, y, x]: [u32; 3] = morton_decode(self.location_bits().into_u128());

        [x, y, z]
    }

    /// The code as a zero-padded binary string with one digit per bit of `W`.
    pub fn to_binary(self) -> String {
        format!("{:0width$b}", self.0, width = W::BITS as usize)
    }
}

macro_rules! impl_try_from_word {
    ($word:ty) => {
        impl TryFrom<$word> for LocationCode<$word> {
            type Error = CodeError;

            fn try_from(raw: $word) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }
    };
}

impl_try_from_word!(u32);
impl_try_from_word!(u64);

impl<W: CodeWord> fmt::Debug for LocationCode<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({:#b})", self.0)
    }
}

impl<W: CodeWord> fmt::Display for LocationCode<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl<W: CodeWord + Serialize> Serialize for LocationCode<W> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.0.serialize(serializer)
        }
    }

    impl<'de, W: CodeWord + Deserialize<'de>> Deserialize<'de> for LocationCode<W> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = W::deserialize(deserializer)?;

            Self::new(raw).map_err(de::Error::custom)
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
