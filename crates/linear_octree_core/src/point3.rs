use crate::Axis3;

use bytemuck::{Pod, Zeroable};
use core::ops::{Add, AddAssign, Mul, Shl, Shr};
use itertools::iproduct;

/// A 3-dimensional point on the unsigned integer grid of an octree. Each unit is a single cell at the finest resolution of the
/// tree, i.e. a cell addressed by a location code at the maximum depth.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Pod, Zeroable)]
#[repr(transparent)]
pub struct Point3u(pub [u32; 3]);

impl Point3u {
    pub const ZERO: Self = Self([0; 3]);

    /// The offsets of the 8 corners of a unit cube, ordered by `OctantIndex` (binary format `0bZYX`).
    pub const CUBE_CORNER_OFFSETS: [Self; 8] = [
        Self([0, 0, 0]),
        Self([1, 0, 0]),
        Self([0, 1, 0]),
        Self([1, 1, 0]),
        Self([0, 0, 1]),
        Self([1, 0, 1]),
        Self([0, 1, 1]),
        Self([1, 1, 1]),
    ];

    #[inline]
    pub const fn fill(value: u32) -> Self {
        Self([value; 3])
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> u32 {
        self.0[2]
    }

    #[inline]
    pub fn at(&self, axis: Axis3) -> u32 {
        self.0[axis.index()]
    }

    #[inline]
    pub fn at_mut(&mut self, axis: Axis3) -> &mut u32 {
        &mut self.0[axis.index()]
    }

    /// Returns a copy of `self` with the `axis` component replaced by `value`.
    #[inline]
    pub fn with(mut self, axis: Axis3, value: u32) -> Self {
        *self.at_mut(axis) = value;

        self
    }

    #[inline]
    pub fn map_components(&self, f: impl Fn(u32) -> u32) -> Self {
        Self([f(self.x()), f(self.y()), f(self.z())])
    }

    #[inline]
    pub fn all_components_lt(&self, bound: u32) -> bool {
        self.0.iter().all(|&c| c < bound)
    }

    /// Iterates over all points `p` such that `min <= p < min + shape`, in Z-major order.
    pub fn iter_box(min: Self, shape: Self) -> impl Iterator<Item = Self> {
        iproduct!(
            min.z()..min.z() + shape.z(),
            min.y()..min.y() + shape.y(),
            min.x()..min.x() + shape.x()
        )
        .map(|(z, y, x)| Self([x, y, z]))
    }
}

impl Add for Point3u {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self([self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z()])
    }
}

impl AddAssign for Point3u {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Point3u {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: u32) -> Self {
        self.map_components(|c| c * rhs)
    }
}

impl Mul<Point3u> for u32 {
    type Output = Point3u;

    #[inline]
    fn mul(self, rhs: Point3u) -> Point3u {
        rhs * self
    }
}

impl Shl<u32> for Point3u {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: u32) -> Self {
        self.map_components(|c| c << rhs)
    }
}

impl Shr<u32> for Point3u {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: u32) -> Self {
        self.map_components(|c| c >> rhs)
    }
}

impl From<[u32; 3]> for Point3u {
    #[inline]
    fn from(p: [u32; 3]) -> Self {
        Self(p)
    }
}

impl From<Point3u> for [f32; 3] {
    #[inline]
    fn from(p: Point3u) -> Self {
        [p.x() as f32, p.y() as f32, p.z() as f32]
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

    #[test]
    fn corner_offsets_follow_zyx_bits() {
        for (i, offset) in Point3u::CUBE_CORNER_OFFSETS.iter().enumerate() {
            let i = i as u32;
            assert_eq!(*offset, Point3u([i & 1, (i >> 1) & 1, (i >> 2) & 1]));
        }
    }

    #[test]
    fn replace_one_component() {
        let p = Point3u([1, 2, 3]);

        assert_eq!(p.with(Axis3::X, 7), Point3u([7, 2, 3]));
        assert_eq!(p.with(Axis3::Y, 7), Point3u([1, 7, 3]));
        assert_eq!(p.with(Axis3::Z, 7), Point3u([1, 2, 7]));
    }

    #[test]
    fn points_cast_to_flat_components() {
        let points = [Point3u([1, 2, 3]), Point3u([4, 5, 6])];

        assert_eq!(bytemuck::cast_slice::<Point3u, u32>(&points), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn iter_box_visits_every_point_once() {
        let points: Vec<_> = Point3u::iter_box(Point3u([1, 2, 3]), Point3u([2, 3, 4])).collect();

        assert_eq!(points.len(), 24);
        assert_eq!(points[0], Point3u([1, 2, 3]));
        assert_eq!(points[1], Point3u([2, 2, 3]));
        assert_eq!(*points.last().unwrap(), Point3u([2, 4, 6]));
    }
}
