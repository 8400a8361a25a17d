use crate::{OctantIndex, Point3u};

/// A cube on the octree grid which, given some exponent `E`, satisfies:
/// - the shape is a cube with edge length `2^E`
/// - each component of the minimum is a multiple of `2^E`
///
/// Equivalently, this is the space covered by a single node of an octree. See `LocationCode::octant`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CubeOctant {
    minimum: Point3u,
    edge_length: u32,
}

impl CubeOctant {
    /// Construct a `CubeOctant`. This ensures that the octant is valid by constraining the input parameters to be:
    /// - an `exponent` for the power of 2 edge length
    /// - a `min_multiple` to multiply by the `edge_length` to get the minimum
    #[inline]
    pub fn new(exponent: u8, min_multiple: Point3u) -> Self {
        let edge_length = 1 << exponent as u32;
        let minimum = min_multiple * edge_length;

        Self {
            minimum,
            edge_length,
        }
    }

    #[inline]
    pub fn new_unchecked(minimum: Point3u, edge_length: u32) -> Self {
        Self {
            minimum,
            edge_length,
        }
    }

    #[inline]
    pub fn minimum(&self) -> Point3u {
        self.minimum
    }

    #[inline]
    pub fn edge_length(&self) -> u32 {
        self.edge_length
    }

    /// The exclusive upper corner.
    #[inline]
    pub fn least_upper_bound(&self) -> Point3u {
        self.minimum + Point3u::fill(self.edge_length)
    }

    #[inline]
    pub fn is_single_cell(&self) -> bool {
        self.edge_length == 1
    }

    #[inline]
    pub fn exponent(&self) -> u8 {
        self.edge_length.trailing_zeros() as u8
    }

    /// Number of grid cells covered by this octant.
    #[inline]
    pub fn num_cells(&self) -> u64 {
        (self.edge_length as u64).pow(3)
    }

    #[inline]
    pub fn contains(&self, p: Point3u) -> bool {
        let lub = self.least_upper_bound();

        (0..3).all(|i| self.minimum.0[i] <= p.0[i] && p.0[i] < lub.0[i])
    }

    /// Returns the child octant selected by `child`. Must not be called on a single cell.
    #[inline]
    pub fn child(&self, child: OctantIndex) -> Self {
        debug_assert!(!self.is_single_cell());

        let half_edge_length = self.edge_length >> 1;

        Self {
            minimum: self.minimum + half_edge_length * child.corner_offset(),
            edge_length: half_edge_length,
        }
    }

    /// Iterates over every grid cell in the octant.
    pub fn iter_cells(&self) -> impl Iterator<Item = Point3u> {
        Point3u::iter_box(self.minimum, Point3u::fill(self.edge_length))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
