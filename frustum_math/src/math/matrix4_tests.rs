use super::*;

// ============================================================================
// CONSTANTS & DEFAULT
// ============================================================================

#[test]
fn test_default_is_identity() {
    assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
}

#[test]
fn test_identity_layout() {
    let m = Matrix4::IDENTITY;
    for i in 0..16 {
        let expected = if i % 5 == 0 { 1.0 } else { 0.0 };
        assert_eq!(m[i], expected, "element {}", i);
    }
}

#[test]
fn test_zero_constant() {
    assert_eq!(Matrix4::ZERO.to_cols_array(), [0.0; 16]);
}

// ============================================================================
// INDEXED ACCESS
// ============================================================================

#[test]
fn test_index_mut_round_trip() {
    let mut m = Matrix4::ZERO;
    m[11] = -1.0;
    m[14] = -2.0202022;
    assert_eq!(m[11], -1.0);
    assert_eq!(m[14], -2.0202022);
    // Untouched elements stay zero
    assert_eq!(m[0], 0.0);
    assert_eq!(m[15], 0.0);
}

#[test]
fn test_cols_array_round_trip() {
    let mut elements = [0.0f32; 16];
    for (i, e) in elements.iter_mut().enumerate() {
        *e = i as f32;
    }
    let m = Matrix4::from_cols_array(elements);
    assert_eq!(m.to_cols_array(), elements);
}

// ============================================================================
// MATRIX * VECTOR
// ============================================================================

#[test]
fn test_identity_multiply_is_noop() {
    let v = Vector4::new(-200.0, 200.0, -2.0, 1.0);
    assert_eq!(Matrix4::IDENTITY * v, v);
}

#[test]
fn test_multiply_uses_column_major_layout() {
    // Column 3 (elements 12..16) is the translation column:
    // result[row] = Σ_col m[col*4 + row] * v[col]
    let mut m = Matrix4::IDENTITY;
    m[12] = 5.0;
    m[13] = -3.0;
    m[14] = 2.0;

    let moved = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(moved, Vector4::new(6.0, -2.0, 3.0, 1.0));
}

#[test]
fn test_multiply_matches_glam() {
    let elements = [
        0.5, 1.0, -2.0, 0.0, //
        3.0, -1.5, 0.25, 0.0, //
        -0.75, 2.0, 1.0, -1.0, //
        0.0, 4.0, -2.5, 0.0,
    ];
    let m = Matrix4::from_cols_array(elements);
    let v = Vector4::new(1.0, -2.0, 3.0, 1.0);

    let ours = m * v;
    let theirs = glam::Mat4::from(m) * glam::Vec4::from(v);

    assert!((ours.x - theirs.x).abs() < 1e-6);
    assert!((ours.y - theirs.y).abs() < 1e-6);
    assert!((ours.z - theirs.z).abs() < 1e-6);
    assert!((ours.w - theirs.w).abs() < 1e-6);
}

// ============================================================================
// DISPLAY
// ============================================================================

#[test]
fn test_display_prints_storage_order() {
    let mut elements = [0.0f32; 16];
    for (i, e) in elements.iter_mut().enumerate() {
        *e = i as f32;
    }
    let m = Matrix4::from_cols_array(elements);

    let printed = format!("{}", m);
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], " 0, 1, 2, 3");
    assert_eq!(lines[3], " 12, 13, 14, 15");
}

// ============================================================================
// CONVERSIONS & LAYOUT
// ============================================================================

#[test]
fn test_glam_round_trip() {
    let m = Matrix4::IDENTITY;
    let g: glam::Mat4 = m.into();
    assert_eq!(g, glam::Mat4::IDENTITY);
    assert_eq!(Matrix4::from(g), m);
}

#[test]
fn test_pod_byte_layout() {
    let m = Matrix4::IDENTITY;
    let bytes = bytemuck::bytes_of(&m);
    assert_eq!(bytes.len(), 64);
}
