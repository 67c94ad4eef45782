//! End-to-end checks against a real GL 3.3 context.
//!
//! These need a display and a driver, so they are ignored by default:
//! `cargo test --test gl_smoke -- --ignored`.
//! SDL may only be initialised from one thread, so every scenario runs
//! inside a single test function.
use hello_triangle::{
    config::ShaderFailurePolicy,
    error::{InitError, ShaderError},
    frame::{FrameTarget, SurfaceEvent},
    geometry::TRIANGLE_BYTES,
    gl_wrappers::{gl_current_viewport, gl_read_pixel, ShaderKind, Viewport},
    pipeline::ShaderSources,
    App, AppConfig,
};

fn close_to(actual: [u8; 4], expected: [f32; 4]) -> bool {
    actual
        .iter()
        .zip(expected)
        .all(|(&a, e)| (f32::from(a) - e * 255.0).abs() <= 2.0)
}

fn quiet_config() -> AppConfig {
    AppConfig {
        gl_debug_output: false,
        ..AppConfig::default()
    }
}

fn happy_start_draws_the_triangle() {
    let config = quiet_config();
    let mut app = App::new(&config, &ShaderSources::default()).unwrap();
    assert!(app.window().is_current());
    assert_eq!(app.window().window().title(), "myOpenGLProgram");
    assert_eq!(app.window().window().size(), (800, 600));

    let (width, height) = app.window().drawable_size();
    let render = app.render_mut();
    render.set_viewport(Viewport::sized(width, height));
    render.clear(config.clear_color);
    render.draw();

    let centre = gl_read_pixel(width as i32 / 2, height as i32 / 2);
    assert!(close_to(centre, [1.0, 0.5, 0.2, 1.0]), "centre was {centre:?}");
    assert!(centre[0] >= 242);
    let corner = gl_read_pixel(0, 0);
    assert!(close_to(corner, [0.2, 0.1, 0.1, 1.0]), "corner was {corner:?}");
}

fn gpu_objects_are_configured_once() {
    let mut app = App::new(&quiet_config(), &ShaderSources::default()).unwrap();
    let render = app.render_mut();
    let program = render.program().id();
    assert!(render.program().is_linked());
    assert_eq!(render.program().get_attrib_location("aPos"), Some(0));

    unsafe {
        // shader objects were detached and deleted after linking
        let mut attached = -1;
        gl::GetProgramiv(program, gl::ATTACHED_SHADERS, &mut attached);
        assert_eq!(attached, 0);

        render.vertex_array().bind();
        let attrib = |pname| {
            let mut value = -1;
            gl::GetVertexAttribiv(0, pname, &mut value);
            value
        };
        assert_eq!(attrib(gl::VERTEX_ATTRIB_ARRAY_ENABLED), 1);
        assert_eq!(attrib(gl::VERTEX_ATTRIB_ARRAY_SIZE), 3);
        assert_eq!(attrib(gl::VERTEX_ATTRIB_ARRAY_TYPE), gl::FLOAT as i32);
        assert_eq!(attrib(gl::VERTEX_ATTRIB_ARRAY_NORMALIZED), 0);
        assert_eq!(attrib(gl::VERTEX_ATTRIB_ARRAY_STRIDE), 12);
        assert_eq!(
            attrib(gl::VERTEX_ATTRIB_ARRAY_BUFFER_BINDING),
            render.vertex_buffer().id() as i32
        );

        render.vertex_buffer().bind();
        let mut size = 0;
        gl::GetBufferParameteriv(gl::ARRAY_BUFFER, gl::BUFFER_SIZE, &mut size);
        assert_eq!(size as usize, TRIANGLE_BYTES);
        render.vertex_buffer().unbind();
        gl::BindVertexArray(0);
    }
}

fn resize_tracks_viewport() {
    let mut app = App::new(&quiet_config(), &ShaderSources::default()).unwrap();
    let resized = SurfaceEvent::FramebufferResized {
        width: 400,
        height: 300,
    };
    app.handle_event(resized);
    assert_eq!(gl_current_viewport(), Viewport::sized(400, 300));
}

fn broken_vertex_shader() {
    let broken = ShaderSources {
        vertex: c"#version 330 core\nbroken",
        ..ShaderSources::default()
    };

    let err = App::new(&quiet_config(), &broken).err().unwrap();
    match err.downcast_ref::<ShaderError>() {
        Some(ShaderError::Compile { kind, log }) => {
            assert_eq!(*kind, ShaderKind::Vertex);
            assert!(!log.is_empty());
        }
        other => panic!("expected a vertex compile error, got {other:?}"),
    }

    let lenient = AppConfig {
        shader_policy: ShaderFailurePolicy::Lenient,
        ..quiet_config()
    };
    let mut app = App::new(&lenient, &broken).unwrap();
    assert!(!app.render_mut().program().is_linked());
    // draws are skipped rather than issued against an unlinked program
    app.render_mut().draw();
    assert_eq!(unsafe { gl::GetError() }, gl::NO_ERROR);
}

fn unavailable_context_fails_cleanly() {
    let config = AppConfig {
        gl_major: 9,
        gl_minor: 9,
        ..quiet_config()
    };
    let err = App::new(&config, &ShaderSources::default()).err().unwrap();
    let init = err.downcast_ref::<InitError>().unwrap();
    assert!(matches!(init, InitError::Window(_)));
    assert!(err.to_string().starts_with("Failed to create GLFW window"));
}

#[test]
#[ignore = "needs a display and an OpenGL 3.3 driver"]
fn gl_lifecycle() {
    happy_start_draws_the_triangle();
    gpu_objects_are_configured_once();
    resize_tracks_viewport();
    broken_vertex_shader();
    unavailable_context_fails_cleanly();
}
