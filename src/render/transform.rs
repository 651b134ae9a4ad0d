//! Flat 4x4 transform math for the cube pipeline.
//!
//! Matrices are 16 floats in column-major order, the layout
//! `uniform_matrix_4_f32_slice` consumes directly. The rotation helpers
//! overwrite the cells of their axis instead of multiplying; see
//! [`rotate_y`] and [`rotate_x`].

/// A 4x4 transform stored as 16 floats in column-major order.
pub type Matrix4 = [f32; 16];

/// Returns the identity transform.
#[rustfmt::skip]
pub fn identity() -> Matrix4 {
    [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]
}

/// Builds a right-handed perspective projection.
///
/// `fov_y` is in radians and must lie in (0, pi); `aspect` must be positive
/// and `0 < near < far`. None of this is checked at runtime.
#[rustfmt::skip]
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);
    [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) * nf, -1.0,
        0.0, 0.0, 2.0 * far * near * nf, 0.0,
    ]
}

/// Returns a copy of `m` with the Y-axis rotation cells set for `angle`.
///
/// This overwrites cells 0, 2, 8 and 10 rather than performing a matrix
/// product, so it only composes onto a matrix whose rotation block has not
/// been written yet. A full engine would multiply here; the cube's two-axis
/// spin is tuned to the overwrite behavior, so it stays.
pub fn rotate_y(m: Matrix4, angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    let mut r = m;
    r[0] = c;
    r[2] = s;
    r[8] = -s;
    r[10] = c;
    r
}

/// Returns a copy of `m` with the X-axis rotation cells set for `angle`.
///
/// Same overwrite semantics as [`rotate_y`]. Applied after `rotate_y` it
/// keeps the Y cells it does not touch, but replaces the shared cell 10.
pub fn rotate_x(m: Matrix4, angle: f32) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    let mut r = m;
    r[5] = c;
    r[6] = -s;
    r[9] = s;
    r[10] = c;
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_unit_diagonal() {
        let m = identity();
        for col in 0..4 {
            for row in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(m[col * 4 + row], expected);
            }
        }
    }

    #[test]
    fn perspective_divide_cells_are_fixed() {
        let params = [
            (45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0),
            (90f32.to_radians(), 1.0, 1.0, 10.0),
            (1.0, 0.5, 0.01, 5.0),
        ];
        for (fov, aspect, near, far) in params {
            let m = perspective(fov, aspect, near, far);
            assert_eq!(m[11], -1.0);
            assert_eq!(m[15], 0.0);
        }
    }

    #[test]
    fn perspective_focal_terms() {
        let m = perspective(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        assert!((m[0] - 1.357).abs() < 1e-3);
        assert!((m[5] - 2.414).abs() < 1e-3);
    }

    #[test]
    fn rotations_at_zero_keep_identity() {
        let m = rotate_x(rotate_y(identity(), 0.0), 0.0);
        assert_eq!(m, identity());
    }

    #[test]
    fn rotate_x_layers_over_rotate_y() {
        let m = rotate_x(rotate_y(identity(), 0.3), 0.5);
        // Y cells survive except the shared cell 10, which rotate_x owns.
        assert_eq!(m[0], 0.3f32.cos());
        assert_eq!(m[2], 0.3f32.sin());
        assert_eq!(m[8], -(0.3f32.sin()));
        assert_eq!(m[5], 0.5f32.cos());
        assert_eq!(m[6], -(0.5f32.sin()));
        assert_eq!(m[9], 0.5f32.sin());
        assert_eq!(m[10], 0.5f32.cos());
    }

    #[test]
    fn rederivation_is_bit_identical() {
        let angle = 1234.567f32;
        let a = rotate_x(rotate_y(identity(), angle), angle * 0.7);
        let b = rotate_x(rotate_y(identity(), angle), angle * 0.7);
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }
}
