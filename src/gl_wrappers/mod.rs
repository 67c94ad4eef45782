//! Standalone functions and modules to wrap the nitty-gritty of
//! OpenGL objects with Rust structs.
pub mod buffer;
pub mod debug;
pub mod layout;
pub mod program;
pub mod shader;
pub mod vertex_array;

pub use buffer::*;
pub use layout::*;
pub use program::*;
pub use shader::*;
pub use vertex_array::*;

use std::ffi::CStr;

/// Bytes fetched from a shader or program info log.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Entry points the program calls. If any of these is unresolved after
/// `gl::load_with`, the context is unusable.
pub fn missing_entry_points() -> Vec<&'static str> {
    macro_rules! unloaded {
        ($($name:ident),* $(,)?) => {
            [$((concat!("gl", stringify!($name)), gl::$name::is_loaded())),*]
                .into_iter()
                .filter(|(_, loaded)| !loaded)
                .map(|(name, _)| name)
                .collect()
        };
    }
    unloaded!(
        AttachShader,
        BindBuffer,
        BindVertexArray,
        BufferData,
        Clear,
        ClearColor,
        CompileShader,
        CreateProgram,
        CreateShader,
        DeleteBuffers,
        DeleteProgram,
        DeleteShader,
        DeleteVertexArrays,
        DetachShader,
        DrawArrays,
        EnableVertexAttribArray,
        GenBuffers,
        GenVertexArrays,
        GetProgramInfoLog,
        GetProgramiv,
        GetShaderInfoLog,
        GetShaderiv,
        GetString,
        LinkProgram,
        ShaderSource,
        UseProgram,
        VertexAttribPointer,
        Viewport,
    )
}

/// Turn an info log buffer into text.
///
/// `written` is the length GL reported; it is clamped to the buffer and
/// any trailing NULs or whitespace are dropped.
pub fn info_log_from_bytes(mut infolog: Vec<u8>, written: gl::types::GLsizei) -> String {
    let written = usize::try_from(written).unwrap_or(0).min(infolog.len());
    infolog.truncate(written);
    while let Some(0) = infolog.last() {
        infolog.pop();
    }
    String::from_utf8_lossy(&infolog).trim_end().to_owned()
}

/// A viewport rectangle, in framebuffer pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// A viewport anchored at the origin.
    pub const fn sized(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Update the OpenGL viewport to cover `(0, 0, width, height)`.
pub fn gl_upd_viewport(width: u32, height: u32) {
    let real_width = i32::try_from(width).unwrap_or(i32::MAX);
    let real_height = i32::try_from(height).unwrap_or(i32::MAX);
    // SAFETY:
    // gl::Viewport does not fail with non-negative values.
    unsafe {
        gl::Viewport(0, 0, real_width, real_height);
    }
}

/// Read back the viewport currently set on the context.
pub fn gl_current_viewport() -> Viewport {
    let mut rect = [0; 4];
    unsafe {
        gl::GetIntegerv(gl::VIEWPORT, rect.as_mut_ptr());
    }
    Viewport {
        x: rect[0],
        y: rect[1],
        width: rect[2].max(0) as u32,
        height: rect[3].max(0) as u32,
    }
}

/// Read one RGBA8 pixel from the current read framebuffer.
/// `(x, y)` is in window coordinates, origin bottom-left.
pub fn gl_read_pixel(x: i32, y: i32) -> [u8; 4] {
    let mut pixel = [0u8; 4];
    unsafe {
        gl::ReadPixels(
            x,
            y,
            1,
            1,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixel.as_mut_ptr().cast(),
        );
    }
    pixel
}

/// Identification strings reported by the driver.
#[derive(Clone, Debug, Default)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub glsl_version: String,
}

impl GlInfo {
    /// Query the current context.
    pub fn query() -> Self {
        Self {
            vendor: gl_string(gl::VENDOR),
            renderer: gl_string(gl::RENDERER),
            version: gl_string(gl::VERSION),
            glsl_version: gl_string(gl::SHADING_LANGUAGE_VERSION),
        }
    }
}

fn gl_string(name: gl::types::GLenum) -> String {
    // SAFETY: glGetString returns null or a static NUL-terminated string.
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            String::new()
        } else {
            CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_is_cut_to_reported_length() {
        let mut raw = b"0:2(1): error: syntax error\n".to_vec();
        raw.resize(INFO_LOG_CAPACITY, 0);
        let log = info_log_from_bytes(raw, 27);
        assert_eq!(log, "0:2(1): error: syntax error");
    }

    #[test]
    fn info_log_length_is_clamped() {
        let log = info_log_from_bytes(b"abc\0\0".to_vec(), 4096);
        assert_eq!(log, "abc");
        assert_eq!(info_log_from_bytes(b"abc".to_vec(), -1), "");
    }

    #[test]
    fn viewport_is_anchored_at_origin() {
        assert_eq!(
            Viewport::sized(400, 300),
            Viewport {
                x: 0,
                y: 0,
                width: 400,
                height: 300
            }
        );
    }
}
