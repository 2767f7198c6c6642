//! Frustum demo driver
//!
//! Builds two perspective frustums, pushes sample eye-space points
//! through them, and prints the matrices and projected points for
//! visual inspection. Straight-line execution, console output only.

use frustum_math::{math_info, normalized_depth, Matrix4, Vector4};

fn main() {
    math_info!("frustum_demo", "projecting sample points through two perspective frustums");

    {
        // Unit near plane, deep frustum
        let projection = Matrix4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0);
        let point = Vector4::new(-1.0, 1.0, -2.0, 1.0);
        let projected = projection * point;

        println!("projected point: {}", projected);
        println!("after divide:    {}", projected.perspective_divide());
    }

    {
        // Wide frustum, same depth range
        let projection = Matrix4::frustum(-100.0, 100.0, -100.0, 100.0, 1.0, 100.0);
        print!("{}", projection);

        let point = Vector4::new(-200.0, 200.0, -2.0, 1.0);
        let projected = projection * point;

        // Clip-space coordinates, not normalized
        println!("projected point: {}", projected);

        // Same depth, derived from the divide relation instead of the matrix
        println!("normalized depth at Ze = -2: {}", normalized_depth(1.0, 100.0, -2.0));
    }

    math_info!("frustum_demo", "done");
}
