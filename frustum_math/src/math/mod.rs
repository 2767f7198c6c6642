//! Math module — homogeneous vector and column-major matrix value types.
//!
//! Both types are `#[repr(C)]`-compatible and implement bytemuck's
//! `Pod`/`Zeroable`, so they can be cast to bytes for GPU-style uploads.

mod matrix4;
mod vector4;

pub use matrix4::Matrix4;
pub use vector4::Vector4;
