//! Describing how a vertex type maps onto vertex attributes.

/// A scalar component type GL can read from a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlType {
    Float,  // f32
    Double, // f64
}

impl GlType {
    pub const fn get_size(&self) -> usize {
        match *self {
            GlType::Double => std::mem::size_of::<f64>(),
            GlType::Float => std::mem::size_of::<f32>(),
        }
    }
    pub const fn gl_enum(&self) -> gl::types::GLenum {
        match *self {
            GlType::Double => gl::DOUBLE,
            GlType::Float => gl::FLOAT,
        }
    }
}

/// One `glVertexAttribPointer` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttribLayout {
    /// Attribute location in the vertex shader.
    pub index: gl::types::GLuint,
    /// Components per vertex, 1 to 4.
    pub components: gl::types::GLint,
    pub gl_type: GlType,
    pub normalized: bool,
    /// Byte offset of the first component inside one vertex.
    pub offset: usize,
}

impl AttribLayout {
    /// Bytes this attribute occupies inside one vertex.
    pub const fn byte_size(&self) -> usize {
        self.components as usize * self.gl_type.get_size()
    }
}

/// A vertex type that can be uploaded to an array buffer as-is.
///
/// # Safety
/// `ATTRIBUTES` must describe the in-memory layout of `Self`: every
/// attribute lies inside `size_of::<Self>()` bytes at its `offset`, and its
/// components are of `gl_type`.
pub unsafe trait GlLayout: bytemuck::Pod {
    const ATTRIBUTES: &'static [AttribLayout];

    /// Distance in bytes between consecutive vertices.
    fn stride() -> usize {
        std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_sizes() {
        let attr = AttribLayout {
            index: 0,
            components: 3,
            gl_type: GlType::Float,
            normalized: false,
            offset: 0,
        };
        assert_eq!(attr.byte_size(), 12);
        assert_eq!(GlType::Double.get_size(), 8);
        assert_eq!(GlType::Float.gl_enum(), gl::FLOAT);
    }
}
