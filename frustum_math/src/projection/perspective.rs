/// Perspective projection builders.
///
/// Both constructors follow the classic OpenGL conventions: right-handed
/// eye space looking down -z, near/far as positive distances, and a
/// clip cube of [-1, 1] on every axis after the perspective divide.

use crate::error::{Error, Result};
use crate::math::Matrix4;
use super::check_planes;

/// Degree-to-radian conversion factor (π/180).
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;

impl Matrix4 {
    /// Perspective frustum from explicit plane coordinates, like `glFrustum`.
    ///
    /// Column-major assignments (every other element is zero):
    ///
    /// ```text
    /// m[0]  =  2n/(r-l)    m[8]  =  (r+l)/(r-l)
    /// m[5]  =  2n/(t-b)    m[9]  =  (t+b)/(t-b)
    /// m[10] = -(f+n)/(f-n) m[11] = -1
    /// m[14] = -2fn/(f-n)   m[15] =  0
    /// ```
    ///
    /// No bounds checking: r = l, t = b or f = n divides by zero and the
    /// resulting inf/NaN elements propagate silently, exactly as the
    /// fixed-function pipeline's contract reads. Use [`Matrix4::try_frustum`]
    /// to have the precondition enforced.
    pub fn frustum(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Self {
        let mut mat = Self::ZERO;
        mat[0] = 2.0 * n / (r - l);
        mat[5] = 2.0 * n / (t - b);
        mat[8] = (r + l) / (r - l);
        mat[9] = (t + b) / (t - b);
        mat[10] = -(f + n) / (f - n);
        mat[11] = -1.0;
        mat[14] = -(2.0 * f * n) / (f - n);
        mat
    }

    /// Symmetric perspective frustum from a vertical field of view
    /// (degrees) and aspect ratio, like `gluPerspective`.
    ///
    /// Converts the angle to half-plane extents at the near plane and
    /// delegates to [`Matrix4::frustum`], so the two constructors agree
    /// exactly for equivalent symmetric inputs.
    pub fn perspective(fov_y_degrees: f32, aspect_ratio: f32, front: f32, back: f32) -> Self {
        let tangent = (fov_y_degrees / 2.0 * DEG2RAD).tan(); // tangent of half fovY
        let height = front * tangent; // half height of near plane
        let width = height * aspect_ratio; // half width of near plane

        Self::frustum(-width, width, -height, height, front, back)
    }

    /// Checked variant of [`Matrix4::frustum`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateFrustum`] if r = l, t = b or f = n.
    pub fn try_frustum(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Result<Self> {
        check_planes(l, r, b, t, n, f)?;
        Ok(Self::frustum(l, r, b, t, n, f))
    }

    /// Checked variant of [`Matrix4::perspective`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldOfView`] if the angle is outside
    /// (0, 180) degrees or the aspect ratio or plane distances are not
    /// positive, and [`Error::DegenerateFrustum`] if the derived planes
    /// collapse (front = back).
    pub fn try_perspective(
        fov_y_degrees: f32,
        aspect_ratio: f32,
        front: f32,
        back: f32,
    ) -> Result<Self> {
        if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            return Err(invalid_fov(format!(
                "fovY must be in (0, 180) degrees, got {}",
                fov_y_degrees
            )));
        }
        if aspect_ratio <= 0.0 {
            return Err(invalid_fov(format!(
                "aspect ratio must be positive, got {}",
                aspect_ratio
            )));
        }
        if front <= 0.0 || back <= 0.0 {
            return Err(invalid_fov(format!(
                "near/far must be positive distances, got {} and {}",
                front, back
            )));
        }

        let tangent = (fov_y_degrees / 2.0 * DEG2RAD).tan();
        let height = front * tangent;
        let width = height * aspect_ratio;

        Self::try_frustum(-width, width, -height, height, front, back)
    }
}

fn invalid_fov(msg: String) -> Error {
    let error = Error::InvalidFieldOfView(msg);
    crate::math_error!("frustum_math::projection", "{}", error);
    error
}

#[cfg(test)]
#[path = "perspective_tests.rs"]
mod tests;
