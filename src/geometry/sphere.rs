//! UV-sphere tessellation.

use std::f64::consts::{PI, TAU};

use bevy::math::{DVec2, DVec3};

use super::{MeshBuffer, Triangle, flatten_positions};
use crate::coords::spherical_to_cartesian;

/// Angular resolution of a tessellated sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SphereResolution {
    /// Latitude bands (quadrangles in θ-direction).
    pub n_theta: u32,
    /// Longitude wedges (quadrangles in φ-direction).
    pub n_phi: u32,
}

impl Default for SphereResolution {
    fn default() -> Self {
        Self {
            n_theta: 8,
            n_phi: 16,
        }
    }
}

impl SphereResolution {
    pub fn new(n_theta: u32, n_phi: u32) -> Self {
        Self { n_theta, n_phi }
    }

    /// Number of triangles emitted: interior bands contribute two per
    /// quadrangle, the two polar bands one per wedge.
    pub fn triangle_count(&self) -> usize {
        let n_theta = self.n_theta as usize;
        let n_phi = self.n_phi as usize;
        match n_theta {
            0 | 1 | 2 => n_theta * n_phi,
            _ => 2 * (n_theta - 2) * n_phi + 2 * n_phi,
        }
    }
}

/// A sphere centred on the origin.
///
/// Corners are laid out on the grid `θ = i_theta · π / n_theta`,
/// `φ = i_phi · 2π / n_phi`. Each quadrangle of an interior band is split
/// along a diagonal into an upper and a lower triangle; in the first and the
/// last band the quadrangle degenerates at the pole and a single triangle is
/// emitted per wedge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub resolution: SphereResolution,
}

impl Sphere {
    pub fn new(radius: f64, resolution: SphereResolution) -> Self {
        Self { radius, resolution }
    }

    fn d_theta(&self) -> f64 {
        PI / self.resolution.n_theta as f64
    }

    fn d_phi(&self) -> f64 {
        TAU / self.resolution.n_phi as f64
    }

    /// Triangle at the given grid indices with `(θ, φ)` corners.
    ///
    /// `lower` selects the triangle on the higher-θ side of the diagonal;
    /// it is ignored in the polar bands. `None` when either index lies
    /// outside the grid, which covers a zero resolution.
    pub fn angular_triangle(
        &self,
        i_theta: u32,
        i_phi: u32,
        lower: bool,
    ) -> Option<Triangle<DVec2>> {
        let in_grid = i_theta < self.resolution.n_theta && i_phi < self.resolution.n_phi;
        in_grid.then(|| self.grid_triangle(i_theta, i_phi, lower))
    }

    /// Triangle at the given grid indices in Cartesian coordinates.
    pub fn cartesian_triangle(&self, i_theta: u32, i_phi: u32, lower: bool) -> Option<Triangle> {
        self.angular_triangle(i_theta, i_phi, lower).map(|t| self.to_cartesian(t))
    }

    /// Triangle addressed by a single flat index.
    ///
    /// The index interleaves upper/lower triangles per wedge and wedges per
    /// band: `index = 2 · n_phi · i_theta + 2 · i_phi + lower`. `None` past
    /// the last band.
    pub fn triangle_at(&self, index: u32) -> Option<Triangle> {
        let per_band = self.resolution.n_phi.checked_mul(2).filter(|&n| n > 0)?;
        let lower = index % 2;
        let i_phi = ((index % per_band) - lower) / 2;
        let i_theta = (index - 2 * i_phi - lower) / per_band;
        self.cartesian_triangle(i_theta, i_phi, lower == 1)
    }

    /// Grid triangle for indices already known to be inside the grid.
    fn grid_triangle(&self, i_theta: u32, i_phi: u32, lower: bool) -> Triangle<DVec2> {
        let theta = i_theta as f64 * self.d_theta();
        let phi = i_phi as f64 * self.d_phi();
        let next_theta = theta + self.d_theta();
        let next_phi = phi + self.d_phi();

        // Top band only has a triangle below the pole, bottom band only above
        let lower = if i_theta == 0 {
            true
        } else if i_theta + 1 == self.resolution.n_theta {
            false
        } else {
            lower
        };

        if lower {
            Triangle::new(
                DVec2::new(theta, next_phi),
                DVec2::new(next_theta, next_phi),
                DVec2::new(next_theta, phi),
            )
        } else {
            Triangle::new(
                DVec2::new(next_theta, phi),
                DVec2::new(theta, phi),
                DVec2::new(theta, next_phi),
            )
        }
    }

    /// All `(θ, φ)` triangles in emission order.
    pub fn angular_triangles(&self) -> impl Iterator<Item = Triangle<DVec2>> + '_ {
        let n_theta = self.resolution.n_theta;
        let n_phi = self.resolution.n_phi;
        (0..n_theta).flat_map(move |i_theta| {
            let polar = i_theta == 0 || i_theta == n_theta - 1;
            (0..n_phi).flat_map(move |i_phi| {
                let upper = self.grid_triangle(i_theta, i_phi, false);
                let lower = (!polar).then(|| self.grid_triangle(i_theta, i_phi, true));
                std::iter::once(upper).chain(lower)
            })
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.resolution.triangle_count()
    }

    /// Vertex positions, three `f32` per vertex.
    pub fn position_buffer(&self) -> Vec<f32> {
        flatten_positions(self.angular_triangles().map(|t| self.to_cartesian(t)))
    }

    /// Texture coordinates, two `f32` per vertex.
    ///
    /// U follows the azimuth (`φ / 2π`) and V the polar angle (`θ / π`).
    pub fn tex_coord_buffer(&self) -> Vec<f32> {
        self.angular_triangles()
            .flat_map(|t| t.corners())
            .flat_map(|corner| [(corner.y / TAU) as f32, (corner.x / PI) as f32])
            .collect()
    }

    pub fn mesh_buffer(&self) -> MeshBuffer {
        MeshBuffer {
            positions: self.position_buffer(),
            tex_coords: self.tex_coord_buffer(),
        }
    }

    fn to_cartesian(&self, t: Triangle<DVec2>) -> Triangle {
        let radius = self.radius;
        t.map(|angles| spherical_to_cartesian(DVec3::new(radius, angles.x, angles.y)))
    }
}
