/// Normalized-depth helper.

/// Normalized device z for an eye-space z, derived from the
/// perspective-divide relation rather than the full matrix multiply.
///
/// With A = -(f+n)/(f-n) and B = -2fn/(f-n) (the third-column terms of
/// [`Matrix4::frustum`](crate::Matrix4::frustum)), clip z is A·Ze + B and
/// clip w is -Ze, so:
///
/// ```text
/// Zn = -(A·Ze + B) / Ze
/// ```
///
/// Useful as an independent sanity check of a projection's z mapping.
/// `z_eye` is a signed eye-space coordinate (negative in front of the
/// camera); `z_eye` = 0 or `far` = `near` goes non-finite, same as the
/// builders.
pub fn normalized_depth(near: f32, far: f32, z_eye: f32) -> f32 {
    let a = -(far + near) / (far - near);
    let b = -(2.0 * far * near) / (far - near);

    -(a * z_eye + b) / z_eye
}

#[cfg(test)]
#[path = "depth_tests.rs"]
mod tests;
