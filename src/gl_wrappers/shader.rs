//! Exports [`Shader`] and [`CompiledShader`].
use std::{ffi::CStr, ptr::null};

use super::{info_log_from_bytes, INFO_LOG_CAPACITY};

/// Represents the type of a shader object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    /// This shader is a Vertex shader.
    Vertex,
    /// This shader is a Fragment shader.
    Fragment,
}

impl ShaderKind {
    /// The GL enum passed to `glCreateShader`.
    pub fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    /// Lowercase name, for messages.
    pub fn name(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }

    /// Header line logged ahead of the info log when compilation fails.
    pub fn compile_failed_msg(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "ERROR::SHADER::VERTEX::COMPILATION_FAILED",
            ShaderKind::Fragment => "ERROR::SHADER::FRAGMENT::COMPILATION_FAILED",
        }
    }
}

/// An uncompiled OpenGL shader.
/// Borrows the NUL-terminated source it will be compiled from.
pub struct Shader<'src> {
    /// GL ID for this shader.
    inner: gl::types::GLuint,
    kind: ShaderKind,
    /// The source code for this shader.
    source: &'src CStr,
}

impl<'src> Shader<'src> {
    /// Create a shader object of `kind` for `source`.
    pub fn new(kind: ShaderKind, source: &'src CStr) -> Self {
        let shader = unsafe { gl::CreateShader(kind.gl_enum()) };
        Self {
            inner: shader,
            kind,
            source,
        }
    }
    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex(source: &'src CStr) -> Self {
        Self::new(ShaderKind::Vertex, source)
    }
    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment(source: &'src CStr) -> Self {
        Self::new(ShaderKind::Fragment, source)
    }

    /// Compile this shader.
    ///
    /// The GL object is handed over to the returned [`CompiledShader`]
    /// whether or not compilation succeeded; check
    /// [`CompiledShader::is_compiled`] before relying on it.
    pub fn compile(self) -> CompiledShader {
        let id = self.inner;
        let kind = self.kind;
        let compiled = unsafe {
            gl::ShaderSource(id, 1, &self.source.as_ptr(), null());
            gl::CompileShader(id);

            let mut success = 0;
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
            success == gl::TRUE.into()
        };
        // ownership of the GL object moves to CompiledShader
        std::mem::forget(self);

        let info_log = if compiled {
            None
        } else {
            let mut infolog: Vec<u8> = vec![0; INFO_LOG_CAPACITY];
            let mut length = 0;
            unsafe {
                gl::GetShaderInfoLog(
                    id,
                    INFO_LOG_CAPACITY as gl::types::GLsizei,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
            }
            Some(info_log_from_bytes(infolog, length))
        };

        CompiledShader {
            id,
            kind,
            info_log,
        }
    }
}

impl Drop for Shader<'_> {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.inner);
        }
    }
}

/// A shader object after a compile attempt.
/// This can be attached to [`Program`](super::Program)s; the GL object is
/// deleted when this is dropped.
pub struct CompiledShader {
    /// GL ID for this shader.
    id: gl::types::GLuint,
    kind: ShaderKind,
    /// Driver info log, present only when compilation failed.
    info_log: Option<String>,
}

impl CompiledShader {
    /// Get the internal GL ID of this shader.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
    pub fn kind(&self) -> ShaderKind {
        self.kind
    }
    pub fn is_compiled(&self) -> bool {
        self.info_log.is_none()
    }
    /// The compile info log, if compilation failed.
    pub fn info_log(&self) -> Option<&str> {
        self.info_log.as_deref()
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_failure_headers() {
        assert_eq!(
            ShaderKind::Vertex.compile_failed_msg(),
            "ERROR::SHADER::VERTEX::COMPILATION_FAILED"
        );
        assert_eq!(
            ShaderKind::Fragment.compile_failed_msg(),
            "ERROR::SHADER::FRAGMENT::COMPILATION_FAILED"
        );
    }

    #[test]
    fn kinds_map_to_gl_shader_types() {
        assert_eq!(ShaderKind::Vertex.gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(ShaderKind::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
    }
}
