use crate::math::{Matrix4, Vector4};
use super::normalized_depth;

const EPSILON: f32 = 1e-6;

#[test]
fn test_reference_value() {
    // n = 1, f = 100, Ze = -2: Zn = 1/99
    let zn = normalized_depth(1.0, 100.0, -2.0);
    assert!((zn - 0.0101011).abs() < EPSILON);
}

#[test]
fn test_near_and_far_plane_endpoints() {
    // Eye z = -n maps to -1, eye z = -f maps to +1
    assert!((normalized_depth(1.0, 100.0, -1.0) - (-1.0)).abs() < EPSILON);
    assert!((normalized_depth(1.0, 100.0, -100.0) - 1.0).abs() < EPSILON);

    assert!((normalized_depth(0.5, 25.0, -0.5) - (-1.0)).abs() < EPSILON);
    assert!((normalized_depth(0.5, 25.0, -25.0) - 1.0).abs() < EPSILON);
}

#[test]
fn test_agrees_with_matrix_derivation() {
    // The two derivations of normalized depth must agree: project a
    // point through the full matrix, divide z by w, compare
    let (n, f, z_eye) = (1.0, 100.0, -2.0);
    let projection = Matrix4::frustum(-100.0, 100.0, -100.0, 100.0, n, f);
    let projected = projection * Vector4::new(-200.0, 200.0, z_eye, 1.0);

    let from_matrix = projected.z / projected.w;
    let from_relation = normalized_depth(n, f, z_eye);

    assert!((from_matrix - from_relation).abs() < EPSILON);
}

#[test]
fn test_mapping_is_monotonic_in_depth() {
    // Farther points (more negative Ze) get larger Zn
    let mut previous = normalized_depth(1.0, 100.0, -1.0);
    for z_eye in [-2.0, -5.0, -20.0, -50.0, -100.0] {
        let zn = normalized_depth(1.0, 100.0, z_eye);
        assert!(zn > previous, "Zn({}) = {} not above {}", z_eye, zn, previous);
        previous = zn;
    }
}

#[test]
fn test_degenerate_input_goes_non_finite() {
    // far == near divides by zero; Ze = 0 divides by zero
    assert!(!normalized_depth(10.0, 10.0, -2.0).is_finite());
    assert!(!normalized_depth(1.0, 100.0, 0.0).is_finite());
}
