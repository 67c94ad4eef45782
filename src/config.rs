//! Startup configuration.
//!
//! The program takes no arguments and reads no files; [`AppConfig::default`]
//! is what runs. Tests and embedders build their own value.
use crate::{error::InitError, logging::LoggingConfig};

/// Which OpenGL profile to request from the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlProfile {
    Core,
    Compatibility,
}

impl From<GlProfile> for sdl2::video::GLProfile {
    fn from(profile: GlProfile) -> Self {
        match profile {
            GlProfile::Core => sdl2::video::GLProfile::Core,
            GlProfile::Compatibility => sdl2::video::GLProfile::Compatibility,
        }
    }
}

/// What to do when a shader fails to compile or the program fails to link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderFailurePolicy {
    /// Log the info log and abort startup.
    Strict,
    /// Log the info log, keep the window open and skip draw calls.
    Lenient,
}

/// RGBA color the framebuffer is cleared to every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::rgba(0.2, 0.1, 0.1, 1.0)
    }
}

/// Everything the program can be configured with.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub profile: GlProfile,
    pub clear_color: ClearColor,
    pub shader_policy: ShaderFailurePolicy,
    pub resizable: bool,
    /// Route driver debug messages into the log when the context offers them.
    pub gl_debug_output: bool,
    pub logging: LoggingConfig,
}

/// The embedded shaders are `#version 330 core`.
const MIN_GL_VERSION: (u8, u8) = (3, 3);

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::from("myOpenGLProgram"),
            gl_major: MIN_GL_VERSION.0,
            gl_minor: MIN_GL_VERSION.1,
            profile: GlProfile::Core,
            clear_color: ClearColor::default(),
            shader_policy: ShaderFailurePolicy::Strict,
            resizable: true,
            gl_debug_output: cfg!(debug_assertions),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject settings that can never yield a window we can draw into.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.width == 0 || self.height == 0 {
            return Err(InitError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if (self.gl_major, self.gl_minor) < MIN_GL_VERSION {
            return Err(InitError::Config(format!(
                "OpenGL {}.{} requested, at least {}.{} is needed",
                self.gl_major, self.gl_minor, MIN_GL_VERSION.0, MIN_GL_VERSION.1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_window_contract() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "myOpenGLProgram");
        assert_eq!((config.gl_major, config.gl_minor), (3, 3));
        assert_eq!(config.profile, GlProfile::Core);
        assert_eq!(config.clear_color, ClearColor::rgba(0.2, 0.1, 0.1, 1.0));
        assert_eq!(config.shader_policy, ShaderFailurePolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sized_window_is_rejected() {
        let config = AppConfig {
            height: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(InitError::Config(_))));
    }

    #[test]
    fn versions_below_3_3_are_rejected() {
        let old = AppConfig {
            gl_major: 3,
            gl_minor: 2,
            ..AppConfig::default()
        };
        assert!(old.validate().is_err());

        let newer = AppConfig {
            gl_major: 4,
            gl_minor: 1,
            ..AppConfig::default()
        };
        assert!(newer.validate().is_ok());
    }
}
