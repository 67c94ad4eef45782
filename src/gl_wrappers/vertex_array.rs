//! Exports [`VertexArray`].
use gl::types::{GLsizei, GLuint};

use super::{Buffer, GlLayout};

/// An OpenGL vertex array object. Records attribute pointers and the
/// array buffer each one reads from. Deleted on drop.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        Self { id }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) }
    }

    pub fn clear_binding() {
        unsafe { gl::BindVertexArray(0) }
    }

    /// Point every attribute of `T` at `buffer` and enable it.
    ///
    /// Binds this array, then `buffer`, so the array captures `buffer` as
    /// the source of each attribute.
    pub fn set_attributes<T: GlLayout>(&self, buffer: &Buffer) {
        self.bind();
        buffer.bind();
        let stride = GLsizei::try_from(T::stride()).unwrap_or(GLsizei::MAX);
        for attr in T::ATTRIBUTES {
            let normalized = if attr.normalized { gl::TRUE } else { gl::FALSE };
            unsafe {
                gl::VertexAttribPointer(
                    attr.index,
                    attr.components,
                    attr.gl_type.gl_enum(),
                    normalized,
                    stride,
                    attr.offset as *const _,
                );
                gl::EnableVertexAttribArray(attr.index);
            }
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
