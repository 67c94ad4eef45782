//! Startup, the render loop and teardown, in that order.
use crate::{
    config::AppConfig,
    frame::{FrameLoop, SurfaceEvent},
    gl_wrappers::Viewport,
    pipeline::ShaderSources,
    render::Render,
    window::GlWindow,
};

/// The running program.
///
/// `render` is declared before `window` so the GL objects are deleted
/// while the context still exists.
pub struct App {
    render: Render,
    window: GlWindow,
    frame_loop: FrameLoop,
}

impl App {
    /// Open the window, build the shader program and upload the triangle.
    pub fn new(config: &AppConfig, sources: &ShaderSources<'_>) -> anyhow::Result<Self> {
        let window = GlWindow::init(config)?;
        let render = Render::init(sources, config.shader_policy)?;

        let (width, height) = window.drawable_size();
        let frame_loop = FrameLoop::new(Viewport::sized(width, height), config.clear_color);

        Ok(Self {
            render,
            window,
            frame_loop,
        })
    }

    /// Render until the window is asked to close. Returns the frame count.
    pub fn run(&mut self) -> u64 {
        let frames = self.frame_loop.run(&mut self.window, &mut self.render);
        log::info!("window closed after {frames} frames");
        frames
    }

    pub fn render_mut(&mut self) -> &mut Render {
        &mut self.render
    }
    pub fn window(&self) -> &GlWindow {
        &self.window
    }
    /// Feed one window event to the frame loop outside of [`App::run`].
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        self.frame_loop.handle_event(event, &mut self.render);
    }
}

/// Run the program with the embedded shaders.
pub fn run(config: &AppConfig) -> anyhow::Result<u64> {
    let mut app = App::new(config, &ShaderSources::default())?;
    Ok(app.run())
}
