#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! The core data types for addressing nodes of a linear octree:
//! - `LocationCode`: a root-to-node path packed into a single fixed-width integer
//! - `OctantIndex`: one of the 8 children of a node, as a number in `[0..7]` of the binary format `0bZYX`
//! - `CodeWord`: the integer widths that can hold a `LocationCode`, `u32` and `u64`
//! - `Point3u` and `CubeOctant`: grid coordinates at the finest resolution of the tree

pub mod axis;
pub mod code_word;
pub mod location_code;
pub mod octant;
pub mod point3;

pub use axis::{Axis3, Axis3Permutation, SignedAxis3};
pub use code_word::CodeWord;
pub use location_code::{CodeError, LocationCode, LocationCode32, LocationCode64, OctantIndex};
pub use octant::CubeOctant;
pub use point3::Point3u;

pub use num;

pub mod prelude {
    pub use super::{
        Axis3, Axis3Permutation, CodeError, CodeWord, CubeOctant, LocationCode, LocationCode32,
        LocationCode64, OctantIndex, Point3u, SignedAxis3,
    };
}
