/// Vector4 — 4-component homogeneous coordinate.
///
/// A plain value type: four `f32` components (x, y, z, w). The w
/// component carries the perspective information; dividing x, y, z by w
/// after a projection yields normalized device coordinates.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Homogeneous coordinate (x, y, z, w).
///
/// Points use w = 1, directions w = 0. After multiplication by a
/// perspective matrix, w holds the divisor for the perspective divide.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a vector from four scalars.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Components as an array, in (x, y, z, w) order.
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Perspective divide: (x/w, y/w, z/w, 1).
    ///
    /// Maps a clip-space point to normalized device coordinates. w = 0
    /// produces inf/NaN components, same as the divide it wraps — the
    /// caller is responsible for w being meaningful.
    pub fn perspective_divide(self) -> Self {
        Self::new(self.x / self.w, self.y / self.w, self.z / self.w, 1.0)
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of range: {}", index),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of range: {}", index),
        }
    }
}

/// Prints the components in the driver's literal format: `x, y, z, w`.
impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(v: Vector4) -> Self {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
#[path = "vector4_tests.rs"]
mod tests;
