//! Exports [`Program`].
use std::ffi::CString;

use super::{info_log_from_bytes, CompiledShader, INFO_LOG_CAPACITY};

/// Wrapper for an OpenGL program.
///
/// <https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects>
pub struct Program {
    /// The internal OpenGL id for this object.
    id: gl::types::GLuint,
    /// Driver info log, present only when linking failed.
    info_log: Option<String>,
}

/// Necessary shaders to create a [`Program`].
pub struct ProgramArgs<'a> {
    /// A vertex shader.
    pub vert_shader: &'a CompiledShader,
    /// A fragment shader.
    pub frag_shader: &'a CompiledShader,
}

impl Program {
    /// Link a vertex and a fragment shader.
    pub fn new(vert_shader: &CompiledShader, frag_shader: &CompiledShader) -> Self {
        Self::from_args(ProgramArgs {
            vert_shader,
            frag_shader,
        })
    }
    /// Create a new program from a [`ProgramArgs`] struct.
    ///
    /// The shaders are detached again after the link attempt, so dropping
    /// them afterwards deletes them for real. A program that failed to link
    /// is still returned; see [`Program::is_linked`].
    pub fn from_args(args: ProgramArgs<'_>) -> Self {
        let shaders = [args.vert_shader.id(), args.frag_shader.id()];
        let (id, linked) = unsafe {
            let program = gl::CreateProgram();
            for &shader in shaders.iter() {
                gl::AttachShader(program, shader);
            }
            gl::LinkProgram(program);
            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            for &shader in shaders.iter() {
                gl::DetachShader(program, shader);
            }
            (program, success == gl::TRUE.into())
        };

        let info_log = if linked {
            None
        } else {
            let mut infolog: Vec<u8> = vec![0; INFO_LOG_CAPACITY];
            let mut length = 0;
            unsafe {
                gl::GetProgramInfoLog(
                    id,
                    INFO_LOG_CAPACITY as gl::types::GLsizei,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
            }
            Some(info_log_from_bytes(infolog, length))
        };

        Self { id, info_log }
    }
    /// Get the internal id of this program.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
    pub fn is_linked(&self) -> bool {
        self.info_log.is_none()
    }
    /// The link info log, if linking failed.
    pub fn info_log(&self) -> Option<&str> {
        self.info_log.as_deref()
    }
    /// Make this the active program for subsequent draw calls.
    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
    /// Get the location of an attrib in this program.
    ///
    /// Returns `None` for unknown names and for names with interior nuls.
    pub fn get_attrib_location(&self, name: impl AsRef<str>) -> Option<gl::types::GLuint> {
        let name = CString::new(name.as_ref()).ok()?;
        let attrib_location = unsafe { gl::GetAttribLocation(self.id, name.as_ptr()) };
        attrib_location.try_into().ok()
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}
