use crate::{OrientedCubeFace, UnorientedQuad};

use linear_octree_core::prelude::*;
use linear_octree_storage::prelude::*;

/// One square face on the boundary between the filled region of an octree and its complement (or the outside of the domain).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoundaryQuad {
    /// Points out of the filled region.
    pub normal: SignedAxis3,
    pub quad: UnorientedQuad,
}

impl BoundaryQuad {
    #[inline]
    pub fn face(&self) -> OrientedCubeFace {
        OrientedCubeFace::canonical(self.normal)
    }

    #[inline]
    pub fn corners(&self) -> [Point3u; 4] {
        self.face().quad_corners(&self.quad)
    }

    /// Area in units of finest-resolution cell faces.
    #[inline]
    pub fn area(&self) -> u64 {
        (self.quad.edge_length as u64).pow(2)
    }
}

/// Finds every face between filled and non-filled space.
///
/// Each maximal filled octant contributes its faces at its own resolution: a face is emitted whole when the equal-size
/// neighbour across it is empty or outside the domain, dropped when the neighbour is full, and split into 4 half-size faces when
/// the neighbour is partially filled.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(octree)))]
pub fn boundary_quads<W: CodeWord>(octree: &Octree<W>) -> Vec<BoundaryQuad> {
    let mut quads = Vec::new();
    octree.visit_filled_octants(|code, octant| {
        for &normal in SignedAxis3::ALL.iter() {
            push_boundary_faces(octree, normal, octant, code.depth(), &mut quads);
        }
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(num_quads = quads.len(), "found boundary quads");

    quads
}

fn push_boundary_faces<W: CodeWord>(
    octree: &Octree<W>,
    normal: SignedAxis3,
    octant: CubeOctant,
    depth: u8,
    quads: &mut Vec<BoundaryQuad>,
) {
    let neighbour = normal
        .checked_step(
            octant.minimum(),
            octant.edge_length(),
            LocationCode::<W>::grid_edge_length(),
        )
        .and_then(|neighbour_min| LocationCode::<W>::containing_cell(neighbour_min, depth));

    let occupancy = match neighbour {
        Some(neighbour_code) => octree.occupancy(neighbour_code),
        None => Occupancy::Empty,
    };

    match occupancy {
        Occupancy::Full => (),
        Occupancy::Partial if !octant.is_single_cell() => {
            // Only the children touching the shared face can see the neighbour.
            for &child in OctantIndex::ALL.iter() {
                let on_face_side = child.get() & normal.axis.octant_bit() != 0;
                if on_face_side == normal.is_positive() {
                    push_boundary_faces(octree, normal, octant.child(child), depth + 1, quads);
                }
            }
        }
        Occupancy::Empty | Occupancy::Partial => quads.push(BoundaryQuad {
            normal,
            quad: OrientedCubeFace::canonical(normal).quad_from_octant(&octant),
        }),
    }
}

/// A triangle mesh on the integer grid of the octree. Vertices are shared between adjacent quads.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BoundaryMesh {
    pub positions: Vec<Point3u>,
    /// All of the triangles in the mesh, wound counter-clockwise (right-hand rule) when seen from outside of the filled
    /// region.
    pub indices: Vec<u32>,
}

impl BoundaryMesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn from_quads(quads: &[BoundaryQuad]) -> Self {
        let mut mesh = Self::default();
        let mut vertex_ids = SmallKeyHashMap::<Point3u, u32>::default();

        for quad in quads.iter() {
            let face = quad.face();
            let corner_ids = face.quad_corners(&quad.quad).map(|corner| {
                *vertex_ids.entry(corner).or_insert_with(|| {
                    mesh.positions.push(corner);

                    mesh.positions.len() as u32 - 1
                })
            });

            // Triangle indices are generated relative to the 4 corners, then mapped to the shared vertex IDs.
            mesh.indices.extend(
                face.quad_mesh_indices(0)
                    .iter()
                    .map(|&i| corner_ids[i as usize]),
            );
        }

        mesh
    }

    /// Positions scaled so the whole domain spans `[0, 1]` on each axis.
    pub fn normalized_positions<W: CodeWord>(&self) -> Vec<[f32; 3]> {
        let scale = 1.0 / LocationCode::<W>::grid_edge_length() as f32;

        self.positions
            .iter()
            .map(|&p| {
                let [x, y, z]: [f32; 3] = p.into();

                [x * scale, y * scale, z * scale]
            })
            .collect()
    }
}

impl<W: CodeWord> From<&Octree<W>> for BoundaryMesh {
    fn from(octree: &Octree<W>) -> Self {
        Self::from_quads(&boundary_quads(octree))
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

    use pretty_assertions::assert_eq;
    use utilities::data_sets::sphere_cell_codes;

    fn code(raw: u32) -> LocationCode32 {
        LocationCode::new(raw).unwrap()
    }

    fn total_area(quads: &[BoundaryQuad]) -> u64 {
        quads.iter().map(BoundaryQuad::area).sum()
    }

    #[test]
    fn empty_octree_has_no_boundary() {
        let octree = Octree32::new_empty();

        assert!(boundary_quads(&octree).is_empty());
        assert!(BoundaryMesh::from(&octree).is_empty());
    }

    #[test]
    fn full_octree_is_one_big_cube() {
        let octree = Octree32::new_full();
        let quads = boundary_quads(&octree);

        assert_eq!(quads.len(), 6);
        assert!(quads
            .iter()
            .all(|q| q.quad.edge_length == Octree32::edge_length()));

        let mesh = BoundaryMesh::from_quads(&quads);
        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.num_triangles(), 12);

        let mut corners = mesh.normalized_positions::<u32>();
        corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut expected: Vec<[f32; 3]> = Point3u::iter_box(Point3u::ZERO, Point3u::fill(2))
            .map(Into::into)
            .collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(corners, expected);
    }

    #[test]
    fn normalized_positions_of_octant() {
        let mut octree = Octree64::new_empty();
        octree.set(LocationCode64::ROOT.child(OctantIndex::ALL[7]).unwrap());

        let mesh = BoundaryMesh::from(&octree);
        let positions = mesh.normalized_positions::<u64>();
        assert_eq!(positions.len(), 8);
        assert!(positions
            .iter()
            .flatten()
            .all(|&c| c == 0.5 || c == 1.0));
    }

    #[test]
    fn single_cell_cube() {
        let mut octree = Octree32::new_empty();
        let cell = LocationCode32::containing_cell(Point3u([100, 200, 300]), 9).unwrap();
        octree.set(cell);

        let quads = boundary_quads(&octree);
        assert_eq!(quads.len(), 6);
        assert_eq!(total_area(&quads), 6);

        let mesh = BoundaryMesh::from_quads(&quads);
        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.num_triangles(), 12);

        let mut positions = mesh.positions.clone();
        positions.sort();
        let mut expected: Vec<_> =
            Point3u::iter_box(Point3u([100, 200, 300]), Point3u::fill(2)).collect();
        expected.sort();
        assert_eq!(positions, expected);
    }

    #[test]
    fn shared_face_between_adjacent_octants_is_hidden() {
        let mut octree = Octree32::new_empty();
        // Octants 0 and 1 differ only along X.
        octree.set(code(0b1000));
        octree.set(code(0b1001));

        let quads = boundary_quads(&octree);
        assert_eq!(quads.len(), 10);
        assert!(!quads
            .iter()
            .any(|q| q.normal.axis == Axis3::X && q.quad.minimum.x() == 0 && q.normal.is_positive()));

        let mesh = BoundaryMesh::from_quads(&quads);
        assert_eq!(mesh.positions.len(), 12);
        assert_eq!(mesh.num_triangles(), 20);
    }

    #[test]
    fn partial_neighbour_splits_face() {
        let mut octree = Octree32::new_empty();
        octree.set(code(0b1000));
        // The child of octant 1 that touches octant 0.
        octree.set(code(0b1001000));

        let quads = boundary_quads(&octree);
        assert_eq!(quads.len(), 13);

        // The big octant's +X face is split into 4, and one of those is hidden by the small cube.
        let half = Octree32::edge_length() / 2;
        let big_plus_x: Vec<_> = quads
            .iter()
            .filter(|q| q.normal == SignedAxis3::new(1, Axis3::X) && q.quad.minimum.x() < half)
            .collect();
        assert_eq!(big_plus_x.len(), 3);
        assert!(big_plus_x
            .iter()
            .all(|q| q.quad.edge_length == half / 2));

        // The small cube's -X face is hidden entirely.
        assert!(!quads
            .iter()
            .any(|q| q.normal == SignedAxis3::new(-1, Axis3::X) && q.quad.minimum.x() == half));
    }

    #[test]
    fn boundary_area_matches_cell_count() {
        // Every exposed cell face of a set of cells is covered by exactly one quad, whatever resolution the quads are at.
        const DEPTH: u8 = 4;
        let cells = sphere_cell_codes::<u32>(DEPTH);
        let cell_set: std::collections::HashSet<_> = cells.iter().copied().collect();

        let mut octree = Octree32::new_empty();
        for &cell in cells.iter() {
            octree.set(cell);
        }

        let resolution = 1u32 << DEPTH;
        let mut exposed_faces = 0;
        for &cell in cells.iter() {
            let p = cell.lower_corner() >> (Octree32::max_depth() - DEPTH) as u32;
            for &normal in SignedAxis3::ALL.iter() {
                let neighbour = normal
                    .checked_step(p, 1, resolution)
                    .and_then(|n| {
                        LocationCode32::containing_cell(n << (Octree32::max_depth() - DEPTH) as u32, DEPTH)
                    });
                match neighbour {
                    Some(n) if cell_set.contains(&n) => (),
                    _ => exposed_faces += 1,
                }
            }
        }

        let cell_face_area = (Octree32::edge_length() as u64 >> DEPTH).pow(2);
        assert_eq!(
            total_area(&boundary_quads(&octree)),
            exposed_faces * cell_face_area
        );
    }
}
