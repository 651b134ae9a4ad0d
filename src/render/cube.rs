//! Static cube geometry: eight colored corners and the index list that
//! stitches them into twelve triangles.

use glam::Vec3;
use glow::HasContext;

use crate::abs::Vertex;

/// One corner of the cube: interleaved position and color.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CubeVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for CubeVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<CubeVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

/// The eight corners of a cube of half-extent 1, each with its own color.
pub const VERTICES: [CubeVertex; 8] = [
    CubeVertex {
        position: Vec3::new(-1.0, -1.0, 1.0),
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    CubeVertex {
        position: Vec3::new(1.0, -1.0, 1.0),
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    CubeVertex {
        position: Vec3::new(1.0, 1.0, 1.0),
        color: Vec3::new(0.0, 0.0, 1.0),
    },
    CubeVertex {
        position: Vec3::new(-1.0, 1.0, 1.0),
        color: Vec3::new(1.0, 1.0, 0.0),
    },
    CubeVertex {
        position: Vec3::new(-1.0, -1.0, -1.0),
        color: Vec3::new(1.0, 0.0, 1.0),
    },
    CubeVertex {
        position: Vec3::new(1.0, -1.0, -1.0),
        color: Vec3::new(0.0, 1.0, 1.0),
    },
    CubeVertex {
        position: Vec3::new(1.0, 1.0, -1.0),
        color: Vec3::new(1.0, 1.0, 1.0),
    },
    CubeVertex {
        position: Vec3::new(-1.0, 1.0, -1.0),
        color: Vec3::new(0.0, 0.0, 0.0),
    },
];

/// Index list for the six faces, two triangles each.
#[rustfmt::skip]
pub const INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3,
    1, 5, 6, 1, 6, 2,
    5, 4, 7, 5, 7, 6,
    4, 0, 3, 4, 3, 7,
    3, 2, 6, 3, 6, 7,
    4, 5, 1, 4, 1, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_list_covers_twelve_triangles() {
        assert_eq!(INDICES.len(), 36);
        assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
    }

    #[test]
    fn every_corner_is_referenced() {
        for corner in 0..VERTICES.len() as u16 {
            assert!(INDICES.contains(&corner), "corner {} unused", corner);
        }
    }

    #[test]
    fn vertex_layout_is_interleaved() {
        assert_eq!(std::mem::size_of::<CubeVertex>(), 24);
        assert_eq!(std::mem::offset_of!(CubeVertex, position), 0);
        assert_eq!(std::mem::offset_of!(CubeVertex, color), 12);
    }

    #[test]
    fn corners_have_unit_half_extent() {
        for v in &VERTICES {
            for c in v.position.to_array() {
                assert!(c == 1.0 || c == -1.0);
            }
        }
    }
}
