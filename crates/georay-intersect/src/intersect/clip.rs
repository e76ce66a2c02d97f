//! Splitting a triangle along a plane.

use georay_geom::Plane;
use georay_math::Vector;
use log::trace;

use super::line_segment_plane;

/// A triangle cut by a plane into three triangles.
///
/// `positions` holds the original vertices followed by the two points where
/// the plane crosses the triangle's edges. `indices` lists three triangles
/// into `positions`; the isolated vertex gets one triangle, the other side a
/// two-triangle fan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrianglePlaneSplit<V> {
    /// `[v0, v1, v2, clip_a, clip_b]`.
    pub positions: [V; 5],
    /// Three triangles as index triples.
    pub indices: [u32; 9],
}

impl<V: Vector> TrianglePlaneSplit<V> {
    /// The three output triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [V; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }
}

/// Split triangle `v0 v1 v2` by `plane`.
///
/// Vertices with `dot(normal, v) + distance < 0` are behind the plane. When
/// one or two vertices are behind, the triangle is re-triangulated into three
/// triangles that cover it exactly, none straddling the plane. When all or
/// none are behind there is nothing to split and the result is `None`.
pub fn triangle_plane_intersection<V: Vector>(
    v0: &V,
    v1: &V,
    v2: &V,
    plane: &Plane<V>,
) -> Option<TrianglePlaneSplit<V>> {
    let d = [
        plane.signed_distance(v0),
        plane.signed_distance(v1),
        plane.signed_distance(v2),
    ];
    let behind = [d[0] < 0.0, d[1] < 0.0, d[2] < 0.0];
    let vertices = [*v0, *v1, *v2];

    // Edges to clip (from, to) and the output fan for each configuration
    let (edge_a, edge_b, indices): ((usize, usize), (usize, usize), [u32; 9]) = match behind {
        // One vertex behind
        [true, false, false] => ((0, 1), (0, 2), [0, 3, 4, 1, 2, 4, 1, 4, 3]),
        [false, true, false] => ((1, 2), (1, 0), [1, 3, 4, 2, 0, 4, 2, 4, 3]),
        [false, false, true] => ((2, 0), (2, 1), [2, 3, 4, 0, 1, 4, 0, 4, 3]),
        // Two vertices behind
        [false, true, true] => ((1, 0), (2, 0), [1, 2, 4, 1, 4, 3, 0, 3, 4]),
        [true, false, true] => ((2, 1), (0, 1), [2, 0, 4, 2, 4, 3, 1, 3, 4]),
        [true, true, false] => ((0, 2), (1, 2), [0, 1, 4, 0, 4, 3, 2, 3, 4]),
        // Nothing to split
        _ => return None,
    };

    let clip = |(from, to): (usize, usize)| {
        line_segment_plane(&vertices[from], &vertices[to], plane).unwrap_or_else(|| {
            trace!("clip edge {from}->{to} nearly parallel to plane, interpolating");
            let t = d[from] / (d[from] - d[to]);
            vertices[from].lerp(&vertices[to], t)
        })
    };

    Some(TrianglePlaneSplit {
        positions: [*v0, *v1, *v2, clip(edge_a), clip(edge_b)],
        indices,
    })
}
