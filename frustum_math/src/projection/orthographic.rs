/// Orthographic projection builder.

use crate::error::Result;
use crate::math::Matrix4;
use super::check_planes;

impl Matrix4 {
    /// Orthographic (parallel) projection from explicit planes, like `glOrtho`.
    ///
    /// Column-major assignments:
    ///
    /// ```text
    /// m[0]  =  2/(r-l)     m[12] = -(r+l)/(r-l)
    /// m[5]  =  2/(t-b)     m[13] = -(t+b)/(t-b)
    /// m[10] = -2/(f-n)     m[14] = -(f+n)/(f-n)
    /// ```
    ///
    /// The untouched elements keep their identity defaults, in particular
    /// m[15] = 1, so transformed points keep w = 1: no perspective divide.
    /// Degenerate planes divide by zero silently, as with
    /// [`Matrix4::frustum`]; use [`Matrix4::try_orthographic`] for the
    /// checked variant.
    pub fn orthographic(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Self {
        let mut mat = Self::IDENTITY;
        mat[0] = 2.0 / (r - l);
        mat[5] = 2.0 / (t - b);
        mat[10] = -2.0 / (f - n);
        mat[12] = -(r + l) / (r - l);
        mat[13] = -(t + b) / (t - b);
        mat[14] = -(f + n) / (f - n);
        mat
    }

    /// Checked variant of [`Matrix4::orthographic`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateFrustum`](crate::Error::DegenerateFrustum)
    /// if r = l, t = b or f = n.
    pub fn try_orthographic(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Result<Self> {
        check_planes(l, r, b, t, n, f)?;
        Ok(Self::orthographic(l, r, b, t, n, f))
    }
}

#[cfg(test)]
#[path = "orthographic_tests.rs"]
mod tests;
