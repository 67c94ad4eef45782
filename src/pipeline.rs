//! Compiling the embedded GLSL and linking it into a [`Program`].
use std::ffi::CStr;

use crate::{
    config::ShaderFailurePolicy,
    error::{ShaderError, LINK_FAILED_MSG},
    gl_wrappers::{CompiledShader, Program, Shader, ShaderKind},
};

macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

pub const VERT_SHADER_SOURCE: &CStr = include_cstr!("../glsl/vert_shader.glsl");
pub const FRAG_SHADER_SOURCE: &CStr = include_cstr!("../glsl/frag_shader.glsl");

/// The GLSL handed to the driver.
#[derive(Clone, Copy, Debug)]
pub struct ShaderSources<'a> {
    pub vertex: &'a CStr,
    pub fragment: &'a CStr,
}

impl Default for ShaderSources<'static> {
    fn default() -> Self {
        Self {
            vertex: VERT_SHADER_SOURCE,
            fragment: FRAG_SHADER_SOURCE,
        }
    }
}

/// Compile one shader.
///
/// A failed compile is logged with its info log; the shader object is
/// returned either way.
pub fn compile_shader(kind: ShaderKind, source: &CStr) -> CompiledShader {
    let shader = Shader::new(kind, source).compile();
    if let Some(log) = shader.info_log() {
        log::error!("{}\n{}", kind.compile_failed_msg(), log);
    }
    shader
}

/// Compile both shaders, link them and release the shader objects.
///
/// With [`ShaderFailurePolicy::Strict`] the first compile or link failure
/// is returned as an error. With [`ShaderFailurePolicy::Lenient`] failures
/// are only logged and the (unlinked) program is still returned.
pub fn build_program(
    sources: &ShaderSources<'_>,
    policy: ShaderFailurePolicy,
) -> Result<Program, ShaderError> {
    let vert_shader = compile_shader(ShaderKind::Vertex, sources.vertex);
    let frag_shader = compile_shader(ShaderKind::Fragment, sources.fragment);

    if policy == ShaderFailurePolicy::Strict {
        for shader in [&vert_shader, &frag_shader] {
            if let Some(log) = shader.info_log() {
                return Err(ShaderError::Compile {
                    kind: shader.kind(),
                    log: log.to_owned(),
                });
            }
        }
    }

    let program = Program::new(&vert_shader, &frag_shader);
    // the program keeps the compiled code
    drop(vert_shader);
    drop(frag_shader);

    if let Some(log) = program.info_log() {
        log::error!("{LINK_FAILED_MSG}\n{log}");
        if policy == ShaderFailurePolicy::Strict {
            return Err(ShaderError::Link {
                log: log.to_owned(),
            });
        }
        log::warn!("continuing with an unlinked program, nothing will be drawn");
    } else {
        log::debug!("shader program {} linked", program.id());
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sources_target_glsl_330_core() {
        let sources = ShaderSources::default();
        for source in [sources.vertex, sources.fragment] {
            let text = source.to_str().unwrap();
            assert!(text.starts_with("#version 330 core\n"));
        }
    }

    #[test]
    fn vertex_source_reads_apos_at_location_0() {
        let text = VERT_SHADER_SOURCE.to_str().unwrap();
        assert!(text.contains("layout (location = 0) in vec3 aPos;"));
        assert!(text.contains("gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);"));
    }

    #[test]
    fn fragment_source_writes_constant_color() {
        let text = FRAG_SHADER_SOURCE.to_str().unwrap();
        assert!(text.contains("out vec4 FragColor;"));
        assert!(text.contains("FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);"));
    }
}
