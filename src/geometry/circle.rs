//! Flat disc tessellation in the xy-plane.

use std::f64::consts::TAU;

use super::{MeshBuffer, Triangle, flatten_positions};
use crate::coords::circular_to_cartesian;

/// A disc centred on the origin, split into `n_phi` wedges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub n_phi: u32,
}

impl Circle {
    pub fn new(radius: f64, n_phi: u32) -> Self {
        Self { radius, n_phi }
    }

    /// Wedge triangle: rim at `φ`, centre, rim at `φ + 2π / n_phi`.
    ///
    /// `None` when `i_phi` is not below `n_phi`, which covers a disc
    /// without wedges.
    pub fn wedge(&self, i_phi: u32) -> Option<Triangle> {
        (i_phi < self.n_phi).then(|| self.wedge_unchecked(i_phi))
    }

    fn wedge_unchecked(&self, i_phi: u32) -> Triangle {
        let d_phi = TAU / self.n_phi as f64;
        let phi = i_phi as f64 * d_phi;
        Triangle::new(
            circular_to_cartesian(self.radius, phi),
            circular_to_cartesian(0.0, phi),
            circular_to_cartesian(self.radius, phi + d_phi),
        )
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.n_phi).map(|i_phi| self.wedge_unchecked(i_phi))
    }

    pub fn triangle_count(&self) -> usize {
        self.n_phi as usize
    }

    pub fn position_buffer(&self) -> Vec<f32> {
        flatten_positions(self.triangles())
    }

    /// Planar projection of the disc onto the unit texture square.
    pub fn tex_coord_buffer(&self) -> Vec<f32> {
        let scale = if self.radius != 0.0 { 0.5 / self.radius } else { 0.0 };
        self.triangles()
            .flat_map(|t| t.corners())
            .flat_map(|p| [(0.5 + p.x * scale) as f32, (0.5 + p.y * scale) as f32])
            .collect()
    }

    pub fn mesh_buffer(&self) -> MeshBuffer {
        MeshBuffer {
            positions: self.position_buffer(),
            tex_coords: self.tex_coord_buffer(),
        }
    }
}
