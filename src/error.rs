//! Error types for window bootstrap and the shader pipeline.
use std::fmt;

use crate::gl_wrappers::ShaderKind;

/// Printed when the window or its GL context cannot be created.
pub const WINDOW_FAILED_MSG: &str = "Failed to create GLFW window";
/// Printed when GL entry points cannot be resolved against the context.
pub const LOADER_FAILED_MSG: &str = "Failed to initialize GLAD";
/// Prefix of a failed program link diagnostic.
pub const LINK_FAILED_MSG: &str = "ERROR::SHADER::PROGRAM::LINKING_FAILED";

/// Anything that stops the window and GL context from coming up.
///
/// All variants are fatal: nothing can be rendered without a live context.
#[derive(Debug)]
pub enum InitError {
    /// The windowing library or its video subsystem failed to initialise.
    Sdl(String),
    /// The window, or the GL context attached to it, could not be created.
    Window(String),
    /// These GL entry points were not resolved by the loader.
    Loader { missing: Vec<&'static str> },
    /// The configuration cannot produce a usable window.
    Config(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Sdl(reason) => write!(f, "windowing library failed to start: {reason}"),
            InitError::Window(reason) => write!(f, "{WINDOW_FAILED_MSG}: {reason}"),
            InitError::Loader { missing } => {
                write!(f, "{LOADER_FAILED_MSG}: missing {}", missing.join(", "))
            }
            InitError::Config(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for InitError {}

/// A shader that did not compile or a program that did not link.
///
/// The driver info log has already been written to the log by the time
/// one of these is returned, so `Display` stays short.
#[derive(Debug)]
pub enum ShaderError {
    Compile { kind: ShaderKind, log: String },
    Link { log: String },
}

impl ShaderError {
    /// The driver-provided info log, at most 512 bytes.
    pub fn info_log(&self) -> &str {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => log,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { kind, .. } => {
                write!(f, "{} shader failed to compile", kind.name())
            }
            ShaderError::Link { .. } => f.write_str("shader program failed to link"),
        }
    }
}

impl std::error::Error for ShaderError {}
