/// Matrix4 — 4x4 transform stored in column-major order.
///
/// Element `i * 4 + j` is row `j` of column `i`, matching the classic
/// OpenGL memory layout (and `glam::Mat4`, so conversions are a straight
/// array copy). The projection builders live in the `projection` module
/// as additional inherent constructors.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};
use super::vector4::Vector4;

/// 4x4 column-major matrix.
///
/// `Default` is the identity matrix. Indexing is over the 16 raw
/// column-major elements, so `mat[11]` is row 3 of column 2.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4 {
    m: [f32; 16],
}

impl Matrix4 {
    /// All elements zero.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, // column 0
            0.0, 1.0, 0.0, 0.0, // column 1
            0.0, 0.0, 1.0, 0.0, // column 2
            0.0, 0.0, 0.0, 1.0, // column 3
        ],
    };

    /// Build from 16 column-major elements.
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// The 16 column-major elements.
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.m
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.m[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.m[index]
    }
}

/// Homogeneous matrix-vector multiplication:
/// `result[row] = Σ_col m[col*4 + row] * v[col]`.
impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }
}

/// Prints four comma-separated elements per line, in storage order
/// (each output line is one storage column).
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..4 {
            let base = col * 4;
            writeln!(
                f,
                " {}, {}, {}, {}",
                self.m[base],
                self.m[base + 1],
                self.m[base + 2],
                self.m[base + 3]
            )?;
        }
        Ok(())
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(mat: glam::Mat4) -> Self {
        Self { m: mat.to_cols_array() }
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(mat: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&mat.m)
    }
}

#[cfg(test)]
#[path = "matrix4_tests.rs"]
mod tests;
