//! Window and GL context bootstrap on top of SDL2.
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::{Keycode, Scancode},
    video::{GLContext, Window},
    EventPump, Sdl, VideoSubsystem,
};

use crate::{
    config::{AppConfig, GlProfile},
    error::InitError,
    frame::{Surface, SurfaceEvent},
    gl_wrappers::{self, debug::install_debug_output, GlInfo},
};

/// A window with a current OpenGL context and loaded entry points.
///
/// Fields drop in declaration order: the context goes before the window,
/// and SDL itself is shut down last.
pub struct GlWindow {
    event_pump: EventPump,
    gl_ctx: GLContext,
    window: Window,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl GlWindow {
    /// Bring up SDL, the window, a GL context and the GL entry points.
    ///
    /// Whatever was created before a failure is released on return.
    pub fn init(config: &AppConfig) -> Result<Self, InitError> {
        config.validate()?;

        let sdl = sdl2::init().map_err(InitError::Sdl)?;
        let video = sdl.video().map_err(InitError::Sdl)?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_major_version(config.gl_major);
        gl_attr.set_context_minor_version(config.gl_minor);
        gl_attr.set_context_profile(config.profile.into());
        let mut flags = gl_attr.set_context_flags();
        if config.profile == GlProfile::Core {
            flags.forward_compatible();
        }
        if config.gl_debug_output {
            flags.debug();
        }
        flags.set();

        let mut builder = video.window(&config.title, config.width, config.height);
        builder.opengl().position_centered();
        if config.resizable {
            builder.resizable();
        }
        let window = builder
            .build()
            .map_err(|err| InitError::Window(err.to_string()))?;

        let gl_ctx = window.gl_create_context().map_err(InitError::Window)?;
        window.gl_make_current(&gl_ctx).map_err(InitError::Window)?;

        gl::load_with(|name| video.gl_get_proc_address(name).cast());
        let missing = gl_wrappers::missing_entry_points();
        if !missing.is_empty() {
            return Err(InitError::Loader { missing });
        }

        let info = GlInfo::query();
        log::info!(
            "OpenGL {} (GLSL {}) on {} / {}",
            info.version,
            info.glsl_version,
            info.vendor,
            info.renderer
        );

        if config.gl_debug_output {
            if install_debug_output() {
                log::debug!("GL debug output enabled");
            } else {
                log::debug!("GL debug output not available on this context");
            }
        }

        let event_pump = sdl.event_pump().map_err(InitError::Sdl)?;

        Ok(Self {
            event_pump,
            gl_ctx,
            window,
            _video: video,
            _sdl: sdl,
        })
    }

    /// Size of the framebuffer in pixels. Can differ from the window size
    /// on high-DPI displays.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Whether the GL context is current on this thread.
    pub fn is_current(&self) -> bool {
        self.gl_ctx.is_current()
    }
}

impl Surface for GlWindow {
    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        let window_id = self.window.id();
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(SurfaceEvent::CloseRequested),
                Event::KeyDown {
                    keycode: Some(Keycode::ESCAPE),
                    ..
                } => events.push(SurfaceEvent::EscapePressed),
                Event::Window {
                    window_id: id,
                    win_event,
                    ..
                } if id == window_id => match win_event {
                    WindowEvent::Close => events.push(SurfaceEvent::CloseRequested),
                    WindowEvent::SizeChanged(..) => {
                        let (width, height) = self.window.drawable_size();
                        events.push(SurfaceEvent::FramebufferResized { width, height });
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        events
    }

    fn escape_held(&self) -> bool {
        self.event_pump
            .keyboard_state()
            .is_scancode_pressed(Scancode::Escape)
    }

    fn swap_buffers(&mut self) {
        self.window.gl_swap_window();
    }
}
