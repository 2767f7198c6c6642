/*!
# Frustum Math

View-frustum projection math for a fixed-function-style graphics pipeline.

This crate provides small, GPU-layout-compatible value types and the
closed-form projection matrix builders that map eye space to clip space:

- **Vector4**: homogeneous coordinate (x, y, z, w)
- **Matrix4**: 4x4 column-major transform with indexed element access
- **Builders**: `Matrix4::frustum` (explicit planes), `Matrix4::perspective`
  (vertical field of view + aspect ratio), `Matrix4::orthographic`
- **Depth helper**: `normalized_depth` inverts the perspective-divide
  z relation, independent of the full matrix multiply

The builders follow the classic OpenGL clip conventions (`glFrustum`,
`gluPerspective`, `glOrtho`): a right-handed eye space looking down -z,
near/far given as positive distances, clip cube [-1, 1] on all axes after
the perspective divide.

The unchecked builders mirror the fixed-function contract exactly:
degenerate planes (r = l, t = b, f = n) silently produce inf/NaN elements.
The `try_*` variants enforce the preconditions and return `Err` instead.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod projection;

// Error types
pub use error::{Error, Result};

// Value types
pub use math::{Matrix4, Vector4};

// Projection helpers
pub use projection::{normalized_depth, DEG2RAD};

// Re-export math library at crate root
pub use glam;
