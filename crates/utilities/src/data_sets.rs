use linear_octree_core::prelude::*;

/// All cells at `depth` whose centers lie strictly inside the sphere inscribed in the domain, as location codes.
pub fn sphere_cell_codes<W: CodeWord>(depth: u8) -> Vec<LocationCode<W>> {
    let resolution = 1u32 << depth;
    let center = resolution as f32 / 2.0;
    let radius = center - 1.0;

    Point3u::iter_box(Point3u::ZERO, Point3u::fill(resolution))
        .filter(|p| {
            let d = p.0.iter().fold(0.0, |acc, &c| {
                let offset = c as f32 + 0.5 - center;

                acc + offset * offset
            });

            d < radius * radius
        })
        .filter_map(|p| {
            let corner = p << (W::MAX_DEPTH - depth) as u32;

            LocationCode::containing_cell(corner, depth)
        })
        .collect()
}

/// Every cell at `depth`, as location codes in Z-major order of their lower corners.
pub fn all_cell_codes<W: CodeWord>(depth: u8) -> Vec<LocationCode<W>> {
    let resolution = 1u32 << depth;

    Point3u::iter_box(Point3u::ZERO, Point3u::fill(resolution))
        .filter_map(|p| LocationCode::containing_cell(p << (W::MAX_DEPTH - depth) as u32, depth))
        .collect()
}
