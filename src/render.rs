use crate::{
    config::{ClearColor, ShaderFailurePolicy},
    error::ShaderError,
    frame::FrameTarget,
    geometry::{self, TRIANGLE_VERTEX_COUNT},
    gl_wrappers::{gl_upd_viewport, Buffer, Program, VertexArray, Viewport},
    pipeline::{self, ShaderSources},
};

/// Owns every GL object the frame needs.
///
/// Must be created after the context is current and dropped before it
/// goes away; dropping deletes the program, vertex array and buffer.
pub struct Render {
    program: Program,
    vao: VertexArray,
    vbo: Buffer,
    warned_unlinked: bool,
}

impl Render {
    /// Build the shader program, then upload the triangle.
    pub fn init(
        sources: &ShaderSources<'_>,
        policy: ShaderFailurePolicy,
    ) -> Result<Self, ShaderError> {
        let program = pipeline::build_program(sources, policy)?;
        let (vao, vbo) = geometry::upload_triangle();

        log::info!(
            "render ready: program {}, vao {}, vbo {}",
            program.id(),
            vao.id(),
            vbo.id()
        );
        Ok(Self {
            program,
            vao,
            vbo,
            warned_unlinked: false,
        })
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
    pub fn vertex_array(&self) -> &VertexArray {
        &self.vao
    }
    pub fn vertex_buffer(&self) -> &Buffer {
        &self.vbo
    }
}

impl FrameTarget for Render {
    fn set_viewport(&mut self, viewport: Viewport) {
        gl_upd_viewport(viewport.width, viewport.height);
    }

    fn clear(&mut self, color: ClearColor) {
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn draw(&mut self) {
        if !self.program.is_linked() {
            if !self.warned_unlinked {
                log::warn!("program {} is not linked, skipping draws", self.program.id());
                self.warned_unlinked = true;
            }
            return;
        }
        self.program.set_used();
        self.vao.bind();
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, 0, TRIANGLE_VERTEX_COUNT);
        }
    }
}
