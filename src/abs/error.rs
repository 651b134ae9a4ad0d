//! Errors raised while bringing up the graphics pipeline.

use std::fmt;

/// A fatal setup failure. There is no retry path for any of these; the
/// session ends once one is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The SDL2 window or OpenGL context could not be created.
    Context(String),
    /// A shader failed to compile. Carries the driver's info log.
    ShaderCompile(String),
    /// The shader program failed to link. Carries the driver's info log.
    Link(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::Context(msg) => write!(f, "failed to create graphics context: {}", msg),
            GraphicsError::ShaderCompile(log) => write!(f, "shader compilation failed: {}", log),
            GraphicsError::Link(log) => write!(f, "shader program linking failed: {}", log),
        }
    }
}

impl std::error::Error for GraphicsError {}
