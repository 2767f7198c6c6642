//! Projection module — frustum matrix builders and the depth helper.
//!
//! The builders are inherent constructors on [`Matrix4`](crate::Matrix4):
//! `frustum`, `perspective`, `orthographic`, plus checked `try_*`
//! variants that reject degenerate parameters instead of letting the
//! divides go non-finite.

mod depth;
mod orthographic;
mod perspective;

pub use depth::normalized_depth;
pub use perspective::DEG2RAD;

use crate::error::{Error, Result};

/// Reject plane pairs that would divide by zero in the builders.
pub(crate) fn check_planes(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Result<()> {
    if r == l {
        return Err(degenerate(format!("right == left ({})", r)));
    }
    if t == b {
        return Err(degenerate(format!("top == bottom ({})", t)));
    }
    if f == n {
        return Err(degenerate(format!("far == near ({})", f)));
    }
    Ok(())
}

/// Log the precondition violation before handing the error to the caller.
pub(crate) fn degenerate(msg: String) -> Error {
    let error = Error::DegenerateFrustum(msg);
    crate::math_error!("frustum_math::projection", "{}", error);
    error
}
