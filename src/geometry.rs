//! The triangle and its upload to the GPU.
use crate::gl_wrappers::{AttribLayout, Buffer, BufferUsage, GlLayout, GlType, VertexArray};

/// One vertex: a position in normalized device coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
}

impl Vertex {
    pub const fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self { pos: [x, y, z] }
    }
}

// SAFETY:
// Vertex is repr(C) and holds exactly three f32s, starting at offset 0.
unsafe impl GlLayout for Vertex {
    const ATTRIBUTES: &'static [AttribLayout] = &[AttribLayout {
        // `aPos` in the vertex shader
        index: 0,
        components: 3,
        gl_type: GlType::Float,
        normalized: false,
        offset: 0,
    }];
}

/// The drawn triangle, counter-clockwise.
pub const TRIANGLE: [Vertex; 3] = [
    // Left
    Vertex::xyz(-0.5, -0.5, 0.0),
    // Right
    Vertex::xyz(0.5, -0.5, 0.0),
    // Up
    Vertex::xyz(0.0, 0.5, 0.0),
];

/// Number of vertices handed to `glDrawArrays`.
pub const TRIANGLE_VERTEX_COUNT: gl::types::GLsizei = TRIANGLE.len() as gl::types::GLsizei;

/// Size of the uploaded vertex data.
pub const TRIANGLE_BYTES: usize = std::mem::size_of::<[Vertex; 3]>();

/// Whether the NDC point `(x, y)` falls inside the triangle, edges included.
pub fn triangle_covers(x: f32, y: f32) -> bool {
    let edge = |a: [f32; 3], b: [f32; 3]| (b[0] - a[0]) * (y - a[1]) - (b[1] - a[1]) * (x - a[0]);
    let [p0, p1, p2] = TRIANGLE.map(|v| v.pos);
    let (e0, e1, e2) = (edge(p0, p1), edge(p1, p2), edge(p2, p0));
    (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
}

/// Allocate the VAO and VBO and upload [`TRIANGLE`].
///
/// The VAO is bound before the buffer and the attribute pointers are set
/// while the buffer is bound, so binding the VAO alone restores the draw
/// state afterwards. Both are left unbound on return.
pub fn upload_triangle() -> (VertexArray, Buffer) {
    let vao = VertexArray::new();
    vao.bind();

    let mut vbo = Buffer::array();
    vbo.bind();
    vbo.upload(&TRIANGLE[..], BufferUsage::StaticDraw);

    vao.set_attributes::<Vertex>(&vbo);

    // vao first, so unbinding the buffer doesn't touch its recorded state
    VertexArray::clear_binding();
    vbo.unbind();

    log::debug!(
        "uploaded triangle: vao {}, vbo {} ({} bytes)",
        vao.id(),
        vbo.id(),
        vbo.byte_len()
    );
    (vao, vbo)
}
