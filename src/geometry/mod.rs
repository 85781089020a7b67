//! Procedural tessellation of spheres and discs into triangle lists.
//!
//! The output is a flat, non-indexed vertex list (three vertices per
//! triangle) plus a parallel texture-coordinate list, which is the layout
//! the renderer uploads directly into its array buffers.

mod circle;
mod sphere;

use bevy::math::DVec3;

pub use circle::Circle;
pub use sphere::{Sphere, SphereResolution};

/// A triangle with corners in clockwise order (for back-face culling).
///
/// `P` is `DVec3` for Cartesian corners and `DVec2` for `(θ, φ)` corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<P = DVec3> {
    pub a: P,
    pub b: P,
    pub c: P,
}

impl<P: Copy> Triangle<P> {
    pub fn new(a: P, b: P, c: P) -> Self {
        Self { a, b, c }
    }

    /// Corners in emission order.
    pub fn corners(&self) -> [P; 3] {
        [self.a, self.b, self.c]
    }

    /// Apply `f` to every corner.
    pub fn map<Q>(self, mut f: impl FnMut(P) -> Q) -> Triangle<Q> {
        Triangle {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }
}

/// Draw-ready vertex data for one tessellated shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// `[x, y, z]` per vertex.
    pub positions: Vec<f32>,
    /// `[u, v]` per vertex.
    pub tex_coords: Vec<f32>,
}

impl MeshBuffer {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions grouped per vertex.
    pub fn vertices(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
    }
}

/// Flatten Cartesian triangles into a position buffer.
fn flatten_positions(triangles: impl Iterator<Item = Triangle>) -> Vec<f32> {
    triangles
        .flat_map(|t| t.corners())
        .flat_map(|p| p.as_vec3().to_array())
        .collect()
}
