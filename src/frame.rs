//! The render loop: input, clear, draw, present.
//!
//! The loop only talks to the window through [`Surface`] and to the GPU
//! through [`FrameTarget`], so it can run against fakes in tests.
use std::time::{Duration, Instant};

use crate::{config::ClearColor, gl_wrappers::Viewport};

/// Something that happened to the window since the last poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The OS asked the window to close.
    CloseRequested,
    /// Escape went down.
    EscapePressed,
    /// The framebuffer is now this many pixels.
    FramebufferResized { width: u32, height: u32 },
}

/// The window side of a frame.
pub trait Surface {
    /// Drain pending window events.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;
    /// Whether Escape is held right now.
    fn escape_held(&self) -> bool;
    /// Present the back buffer.
    fn swap_buffers(&mut self);
}

/// The GPU side of a frame.
pub trait FrameTarget {
    fn set_viewport(&mut self, viewport: Viewport);
    fn clear(&mut self, color: ClearColor);
    /// Draw the scene with whatever was cleared underneath.
    fn draw(&mut self);
}

/// Average frame time over roughly one second, logged at `debug`.
#[derive(Debug)]
pub struct FrameStats {
    frametimes: Vec<Duration>,
    last_report: Instant,
    report_every: Duration,
}

impl FrameStats {
    pub fn new(report_every: Duration) -> Self {
        Self {
            frametimes: Vec::with_capacity(256),
            last_report: Instant::now(),
            report_every,
        }
    }

    /// Record one frame. Returns the average frame time when a report
    /// was due, which also starts a new window.
    pub fn record(&mut self, frametime: Duration, now: Instant) -> Option<Duration> {
        self.frametimes.push(frametime);
        if now.duration_since(self.last_report) < self.report_every {
            return None;
        }
        let total: Duration = self.frametimes.iter().sum();
        let avg = total / self.frametimes.len() as u32;
        log::debug!(
            "frametime: {:0.8}, FPS: {:0.2}, frames counted: {:05}",
            avg.as_secs_f64(),
            1. / avg.as_secs_f64().max(f64::EPSILON),
            self.frametimes.len()
        );
        self.frametimes.clear();
        self.last_report = now;
        Some(avg)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Per-run state of the render loop.
#[derive(Debug)]
pub struct FrameLoop {
    close_requested: bool,
    viewport: Viewport,
    clear_color: ClearColor,
    frames: u64,
    stats: FrameStats,
}

impl FrameLoop {
    pub fn new(viewport: Viewport, clear_color: ClearColor) -> Self {
        Self {
            close_requested: false,
            viewport,
            clear_color,
            frames: 0,
            stats: FrameStats::default(),
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }
    pub fn should_close(&self) -> bool {
        self.close_requested
    }
    /// The viewport most recently set on the target.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// React to one window event. Never fails.
    pub fn handle_event(&mut self, event: SurfaceEvent, target: &mut impl FrameTarget) {
        match event {
            SurfaceEvent::CloseRequested | SurfaceEvent::EscapePressed => self.request_close(),
            SurfaceEvent::FramebufferResized { width, height } => {
                let viewport = Viewport::sized(width, height);
                if viewport != self.viewport {
                    log::debug!("framebuffer resized to {width}x{height}");
                }
                self.viewport = viewport;
                target.set_viewport(viewport);
            }
        }
    }

    /// One full frame: input, clear, draw, poll events, swap.
    pub fn run_frame(&mut self, surface: &mut impl Surface, target: &mut impl FrameTarget) {
        if surface.escape_held() {
            self.request_close();
        }

        target.clear(self.clear_color);
        target.draw();

        for event in surface.poll_events() {
            self.handle_event(event, target);
        }
        surface.swap_buffers();
        self.frames += 1;
    }

    /// Run frames until a close is requested. Returns the number of
    /// frames rendered by this call.
    pub fn run(&mut self, surface: &mut impl Surface, target: &mut impl FrameTarget) -> u64 {
        let start_frames = self.frames;
        target.set_viewport(self.viewport);
        while !self.should_close() {
            let frame_start = Instant::now();
            self.run_frame(surface, target);
            let now = Instant::now();
            self.stats.record(now.duration_since(frame_start), now);
        }
        self.frames - start_frames
    }
}
