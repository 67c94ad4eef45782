//! Exports [`Buffer`].
use gl::types::{GLenum, GLsizeiptr, GLuint};

/// How often the contents of a buffer will change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    /// Set once, used a few times at most.
    StreamDraw,
    /// Set once, used many times.
    StaticDraw,
    /// Changed a lot, used a lot.
    DynamicDraw,
}

impl BufferUsage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            BufferUsage::StreamDraw => gl::STREAM_DRAW,
            BufferUsage::StaticDraw => gl::STATIC_DRAW,
            BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
        }
    }
}

/// An OpenGL buffer object bound to a fixed target.
/// The GL object is deleted on drop.
pub struct Buffer {
    id: GLuint,
    target: GLenum,
    byte_len: usize,
}

impl Buffer {
    /// Generate a buffer for `target` (e.g. `gl::ARRAY_BUFFER`).
    pub fn new(target: GLenum) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        Self {
            id,
            target,
            byte_len: 0,
        }
    }
    /// Shorthand for a vertex buffer.
    pub fn array() -> Self {
        Self::new(gl::ARRAY_BUFFER)
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(self.target, self.id) }
    }

    pub fn unbind(&self) {
        unsafe { gl::BindBuffer(self.target, 0) }
    }

    /// Bind this buffer and replace its whole data store with `data`.
    pub fn upload<T: bytemuck::Pod>(&mut self, data: &[T], usage: BufferUsage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        self.bind();
        unsafe {
            gl::BufferData(
                self.target,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                usage.gl_enum(),
            );
        }
        self.byte_len = bytes.len();
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
    pub fn target(&self) -> GLenum {
        self.target
    }
    /// Size of the last upload, in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}
