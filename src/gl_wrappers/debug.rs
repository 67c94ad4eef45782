//! Driver debug output, forwarded to the `log` facade.
use std::{
    ffi::{c_char, c_void},
    ptr::null,
};

use gl::types::{GLenum, GLsizei, GLuint};

/// Log level a driver message of `severity` is reported at.
pub fn severity_level(severity: GLenum) -> log::Level {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        gl::DEBUG_SEVERITY_LOW => log::Level::Info,
        _ => log::Level::Debug,
    }
}

extern "system" fn gl_debug_output(
    _source: GLenum,
    _output_type: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const c_char,
    _user_param: *mut c_void,
) {
    if message.is_null() {
        return;
    }
    // SAFETY: the driver passes `length` bytes of message text, or a
    // NUL-terminated string when `length` is negative.
    let text = unsafe {
        match usize::try_from(length) {
            Ok(len) => String::from_utf8_lossy(std::slice::from_raw_parts(message.cast(), len))
                .into_owned(),
            Err(_) => std::ffi::CStr::from_ptr(message).to_string_lossy().into_owned(),
        }
    };
    log::log!(target: "gl", severity_level(severity), "[{id}] {}", text.trim_end());
}

/// Install the debug callback if the context exposes `glDebugMessageCallback`.
/// Returns whether it was installed.
pub fn install_debug_output() -> bool {
    if !gl::DebugMessageCallback::is_loaded() {
        return false;
    }
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(gl_debug_output), null());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_map_to_log_levels() {
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_HIGH), log::Level::Error);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_MEDIUM), log::Level::Warn);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_LOW), log::Level::Info);
        assert_eq!(
            severity_level(gl::DEBUG_SEVERITY_NOTIFICATION),
            log::Level::Debug
        );
    }
}
