//! Bounded position history used to draw body trails.

use std::collections::VecDeque;

use bevy::math::DVec3;

/// Default number of samples retained per body.
pub const MAX_TRAJECTORY_LENGTH: usize = 128;

/// Append-ordered ring buffer of past positions.
///
/// Samples are stored as whole vectors, so the flattened view always holds
/// a multiple of three scalars. Once the capacity is exceeded the oldest
/// sample is evicted, one at a time, until the buffer is back under the cap.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    samples: VecDeque<DVec3>,
    capacity: usize,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::with_capacity(MAX_TRAJECTORY_LENGTH)
    }
}

impl Trajectory {
    /// Create an empty trajectory holding at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, then evict from the front while over capacity.
    pub fn push(&mut self, position: DVec3) {
        self.samples.push_back(position);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of scalars in the flattened view (`3 * len()`).
    pub fn scalar_len(&self) -> usize {
        self.samples.len() * 3
    }

    /// Maximum number of samples retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, evicting the oldest samples if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &DVec3> + '_ {
        self.samples.iter()
    }

    /// Most recently appended sample.
    pub fn latest(&self) -> Option<DVec3> {
        self.samples.back().copied()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Flattened `[x0, y0, z0, x1, y1, z1, ...]`, oldest first.
    pub fn to_flat(&self) -> Vec<f64> {
        self.samples.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Flattened single-precision copy, ready for a vertex buffer.
    pub fn to_flat_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .flat_map(|p| p.as_vec3().to_array())
            .collect()
    }
}
