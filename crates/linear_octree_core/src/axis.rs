use crate::Point3u;

/// Either the X, Y, or Z axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis3 {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis3 {
    pub const ALL: [Self; 3] = [Axis3::X, Axis3::Y, Axis3::Z];

    /// The index for a point's component on this axis.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The bit that selects this axis in an `OctantIndex` of the binary format `0bZYX`.
    #[inline]
    pub fn octant_bit(&self) -> u8 {
        1 << self.index()
    }

    pub fn get_unit_vector(&self) -> Point3u {
        match self {
            Axis3::X => Point3u([1, 0, 0]),
            Axis3::Y => Point3u([0, 1, 0]),
            Axis3::Z => Point3u([0, 0, 1]),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis3Permutation {
    // Even permutations
    XYZ,
    ZXY,
    YZX,
    // Odd permutations
    ZYX,
    XZY,
    YXZ,
}

impl Axis3Permutation {
    pub fn even_with_normal_axis(axis: Axis3) -> Self {
        match axis {
            Axis3::X => Axis3Permutation::XYZ,
            Axis3::Y => Axis3Permutation::YZX,
            Axis3::Z => Axis3Permutation::ZXY,
        }
    }

    pub fn odd_with_normal_axis(axis: Axis3) -> Self {
        match axis {
            Axis3::X => Axis3Permutation::XZY,
            Axis3::Y => Axis3Permutation::YXZ,
            Axis3::Z => Axis3Permutation::ZYX,
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            Axis3Permutation::XYZ => 1,
            Axis3Permutation::ZXY => 1,
            Axis3Permutation::YZX => 1,
            Axis3Permutation::ZYX => -1,
            Axis3Permutation::XZY => -1,
            Axis3Permutation::YXZ => -1,
        }
    }

    pub fn axes(&self) -> [Axis3; 3] {
        match self {
            Axis3Permutation::XYZ => [Axis3::X, Axis3::Y, Axis3::Z],
            Axis3Permutation::ZXY => [Axis3::Z, Axis3::X, Axis3::Y],
            Axis3Permutation::YZX => [Axis3::Y, Axis3::Z, Axis3::X],
            Axis3Permutation::ZYX => [Axis3::Z, Axis3::Y, Axis3::X],
            Axis3Permutation::XZY => [Axis3::X, Axis3::Z, Axis3::Y],
            Axis3Permutation::YXZ => [Axis3::Y, Axis3::X, Axis3::Z],
        }
    }
}

/// An axis with a direction. `sign` is either `1` or `-1`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SignedAxis3 {
    pub sign: i32,
    pub axis: Axis3,
}

impl SignedAxis3 {
    /// All 6 directions, negative before positive for each axis.
    pub const ALL: [Self; 6] = [
        SignedAxis3::new(-1, Axis3::X),
        SignedAxis3::new(1, Axis3::X),
        SignedAxis3::new(-1, Axis3::Y),
        SignedAxis3::new(1, Axis3::Y),
        SignedAxis3::new(-1, Axis3::Z),
        SignedAxis3::new(1, Axis3::Z),
    ];

    pub const fn new(sign: i32, axis: Axis3) -> Self {
        Self { sign, axis }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign > 0
    }

    /// Moves `p` by `distance` in this direction, or `None` if the result would leave the grid `[0, bound)`.
    pub fn checked_step(&self, p: Point3u, distance: u32, bound: u32) -> Option<Point3u> {
        let c = p.at(self.axis);
        let stepped = if self.is_positive() {
            c.checked_add(distance).filter(|&c| c < bound)?
        } else {
            c.checked_sub(distance)?
        };

        Some(p.with(self.axis, stepped))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
