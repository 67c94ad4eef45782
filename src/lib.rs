//! An OpenGL 3.3 core "hello triangle": one window, one shader program,
//! one vertex buffer, drawn every frame until the window closes.
pub mod app;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gl_wrappers;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod window;

pub use app::App;
pub use config::AppConfig;
