//! The cube scene.
//!
//! Owns the spin state, the linked shader program, and the uploaded mesh,
//! and draws one frame at a time. The per-frame math lives on [`Spin`] so it
//! can be exercised without a GL context.

use std::sync::Arc;

use glow::HasContext;

use crate::abs::{Mesh, ShaderProgram};
use crate::render::cube;
use crate::render::transform::{self, Matrix4};

/// Background color the frame is cleared to.
pub const CLEAR_COLOR: (f32, f32, f32, f32) = (0.9, 0.9, 0.9, 1.0);

/// Radians added to the spin each frame.
pub const ANGLE_STEP: f32 = 0.01;

/// Where the cube sits in front of the camera along Z.
pub const CUBE_DISTANCE: f32 = -6.0;

/// The spin state of the cube: a single unbounded angle.
///
/// The angle grows without wrapping; sine and cosine are periodic, so the
/// derived matrices stay well-behaved no matter how long the loop runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spin {
    angle: f32,
}

impl Spin {
    /// Composes the model-view matrix for the current angle.
    ///
    /// Pushes the cube back along Z, then layers the Y rotation and the
    /// slower X rotation with the overwrite semantics of
    /// [`transform::rotate_y`].
    pub fn model_view(&self) -> Matrix4 {
        let mut m = transform::identity();
        m[14] = CUBE_DISTANCE;
        let m = transform::rotate_y(m, self.angle);
        transform::rotate_x(m, self.angle * 0.7)
    }

    /// Advances the spin by one frame.
    pub fn advance(&mut self) {
        self.angle += ANGLE_STEP;
    }
}

/// A cube scene ready to draw.
pub struct Scene {
    program: ShaderProgram,
    mesh: Mesh,
    spin: Spin,
}

impl Scene {
    /// Uploads the cube geometry and takes ownership of the shader program.
    ///
    /// The projection is fixed for the life of the scene and submitted once
    /// here.
    pub fn new(gl: &Arc<glow::Context>, program: ShaderProgram, projection: Matrix4) -> Self {
        let mesh = Mesh::new(gl, &cube::VERTICES, &cube::INDICES, glow::TRIANGLES);
        log::debug!("cube mesh uploaded ({} indices)", mesh.index_count());

        program.use_program();
        program.set_uniform("u_projection", projection);

        Self {
            program,
            mesh,
            spin: Spin::default(),
        }
    }

    /// Draws one frame and advances the spin.
    pub fn render(&mut self, gl: &glow::Context) {
        unsafe {
            let (r, g, b, a) = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.use_program();
        self.program.set_uniform("u_model_view", self.spin.model_view());
        self.mesh.draw();

        self.spin.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_view_at_zero_is_translation_only() {
        let spin = Spin::default();
        let mut expected = transform::identity();
        expected[14] = CUBE_DISTANCE;
        assert_eq!(spin.model_view(), expected);
    }

    #[test]
    fn advance_steps_by_exactly_one_increment() {
        let mut spin = Spin::default();
        for _ in 0..100 {
            let before = spin.angle;
            spin.advance();
            assert_eq!(spin.angle, before + ANGLE_STEP);
        }
    }

    #[test]
    fn spin_survives_ten_thousand_frames() {
        let mut spin = Spin::default();
        let mut previous = spin.angle;
        for _ in 0..10_000 {
            spin.advance();
            assert!(spin.angle > previous);
            assert!(spin.angle.is_finite());
            previous = spin.angle;
        }
        assert!(spin.model_view().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn model_view_rederivation_is_bit_identical() {
        let mut spin = Spin::default();
        for _ in 0..777 {
            spin.advance();
        }
        let a = spin.model_view().map(f32::to_bits);
        let b = spin.model_view().map(f32::to_bits);
        assert_eq!(a, b);
    }
}
