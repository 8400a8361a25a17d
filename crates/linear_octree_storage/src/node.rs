use crate::Bitset8;

use linear_octree_core::OctantIndex;

/// The state stored for a single branch node of an `Octree`: 8 "open" bits in the low byte and 8 "filled" bits in the high
/// byte, one of each per child octant.
///
/// - An **open** child has its own `NodeRecord` that must be consulted for finer detail.
/// - A **filled** child is entirely full, all the way down to the finest resolution, and has no record.
/// - A child with neither bit is entirely empty and has no record.
///
/// The two bits of a child are never both set.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct NodeRecord {
    bits: u16,
}

/// What a `NodeRecord` knows about one of its children.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChildState {
    Empty,
    Filled,
    Open,
}

const FILLED_SHIFT: u16 = 8;

impl NodeRecord {
    /// No children.
    pub const EMPTY: Self = Self { bits: 0 };

    /// All children filled. A non-root node in this state is always collapsed into its parent.
    pub const ALL_CHILDREN_FILLED: Self = Self { bits: 0xFF00 };

    #[inline]
    pub fn from_bits(bits: u16) -> Self {
        let record = Self { bits };
        debug_assert!(
            record.open().bits & record.filled().bits == 0,
            "child is both open and filled: {:#018b}",
            bits
        );

        record
    }

    /// Like `from_bits`, but returns `None` if some child is both open and filled.
    #[inline]
    pub fn checked_from_bits(bits: u16) -> Option<Self> {
        let record = Self { bits };

        (record.open().bits & record.filled().bits == 0).then(|| record)
    }

    /// Builds a record from the lists of filled and open children.
    pub fn from_children(filled: &[OctantIndex], open: &[OctantIndex]) -> Self {
        let mut record = Self::EMPTY;
        for &octant in filled {
            record.set_child_filled(octant);
        }
        for &octant in open {
            record.set_child_open(octant);
        }

        record
    }

    #[inline]
    pub fn with_open_child(octant: OctantIndex) -> Self {
        let mut record = Self::EMPTY;
        record.set_child_open(octant);

        record
    }

    #[inline]
    pub fn with_filled_child(octant: OctantIndex) -> Self {
        let mut record = Self::EMPTY;
        record.set_child_filled(octant);

        record
    }

    #[inline]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// The children that have their own record.
    #[inline]
    pub fn open(&self) -> Bitset8 {
        Bitset8 {
            bits: self.bits as u8,
        }
    }

    /// The children that are entirely full.
    #[inline]
    pub fn filled(&self) -> Bitset8 {
        Bitset8 {
            bits: (self.bits >> FILLED_SHIFT) as u8,
        }
    }

    #[inline]
    pub fn child_state(&self, octant: OctantIndex) -> ChildState {
        if self.open().bit_is_set(octant) {
            ChildState::Open
        } else if self.filled().bit_is_set(octant) {
            ChildState::Filled
        } else {
            ChildState::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True iff every child is filled and none is open. Such a record describes a full octant.
    #[inline]
    pub fn is_all_filled(&self) -> bool {
        *self == Self::ALL_CHILDREN_FILLED
    }

    #[inline]
    pub fn set_child_open(&mut self, octant: OctantIndex) {
        self.bits |= 1 << octant.get();
        self.bits &= !(1 << (octant.get() as u16 + FILLED_SHIFT));
    }

    #[inline]
    pub fn set_child_filled(&mut self, octant: OctantIndex) {
        self.bits |= 1 << (octant.get() as u16 + FILLED_SHIFT);
        self.bits &= !(1 << octant.get());
    }

    #[inline]
    pub fn clear_child(&mut self, octant: OctantIndex) {
        self.bits &= !(1 << octant.get());
        self.bits &= !(1 << (octant.get() as u16 + FILLED_SHIFT));
    }
}

impl std::fmt::Debug for NodeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "NodeRecord {{ filled: {:#010b}, open: {:#010b} }}",
            self.filled().bits,
            self.open().bits
        )
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for NodeRecord {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.bits.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for NodeRecord {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bits = u16::deserialize(deserializer)?;

            Self::checked_from_bits(bits).ok_or_else(|| {
                de::Error::custom(format!("child is both open and filled: {:#018b}", bits))
            })
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    fn octant(i: u8) -> OctantIndex {
        OctantIndex::new(i).unwrap()
    }

    #[test]
    fn open_and_filled_are_exclusive() {
        let mut record = NodeRecord::EMPTY;

        record.set_child_open(octant(3));
        assert_eq!(record.child_state(octant(3)), ChildState::Open);
        assert_eq!(record.bits(), 0b1000);

        record.set_child_filled(octant(3));
        assert_eq!(record.child_state(octant(3)), ChildState::Filled);
        assert_eq!(record.bits(), 0b1000 << 8);

        record.set_child_open(octant(3));
        assert_eq!(record.bits(), 0b1000);

        record.clear_child(octant(3));
        assert!(record.is_empty());
        assert_eq!(record.child_state(octant(3)), ChildState::Empty);
    }

    #[test]
    fn all_filled_only_without_open_children() {
        let mut record = NodeRecord::EMPTY;
        for &i in OctantIndex::ALL.iter() {
            record.set_child_filled(i);
        }
        assert!(record.is_all_filled());
        assert_eq!(record, NodeRecord::ALL_CHILDREN_FILLED);

        record.set_child_open(octant(0));
        assert!(!record.is_all_filled());
        assert_eq!(record.filled().count(), 7);
        assert_eq!(record.open().count(), 1);
    }

    #[test]
    fn from_children_matches_layout() {
        let record = NodeRecord::from_children(&[octant(0), octant(7)], &[octant(1)]);

        assert_eq!(record.bits(), 0b1000_0001_0000_0010);
        assert_eq!(NodeRecord::from_bits(record.bits()), record);
        assert_eq!(
            format!("{:?}", record),
            "NodeRecord { filled: 0b10000001, open: 0b00000010 }"
        );
    }

    #[test]
    fn checked_bits_reject_open_and_filled_child() {
        assert_eq!(NodeRecord::checked_from_bits(0xFF00), Some(NodeRecord::ALL_CHILDREN_FILLED));
        assert_eq!(NodeRecord::checked_from_bits(0x00FF).map(|r| r.open().count()), Some(8));
        assert_eq!(NodeRecord::checked_from_bits(0x0101), None);
        assert_eq!(NodeRecord::ALL_CHILDREN_FILLED.filled(), Bitset8::FULL);
        assert_eq!(NodeRecord::ALL_CHILDREN_FILLED.open(), Bitset8::EMPTY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_valid_records_and_rejects_overlapping_bits() {
        let record = NodeRecord::from_children(&[octant(2), octant(5)], &[octant(0)]);
        let bytes = bincode::serialize(&record).unwrap();
        assert_eq!(bincode::deserialize::<NodeRecord>(&bytes).unwrap(), record);

        let overlapping = bincode::serialize(&0x0101u16).unwrap();
        assert!(bincode::deserialize::<NodeRecord>(&overlapping).is_err());
    }
}
