use glow::HasContext;

use crate::abs::*;
use crate::render::transform;
use crate::scene::Scene;

mod abs;
mod render;
mod scene;

/// Vertical field of view of the projection, in degrees.
const FOV_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $path_prefix:literal) => {{
        let vert = $crate::abs::Shader::new(
            &$gl,
            glow::VERTEX_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/vert.glsl"
            )),
        )?;
        let frag = $crate::abs::Shader::new(
            &$gl,
            glow::FRAGMENT_SHADER,
            include_str!(concat!(
                $path_prefix,
                "/render/shaders/",
                stringify!($name),
                "/frag.glsl"
            )),
        )?;
        ShaderProgram::new(&$gl, &[&vert, &frag])?
    }};
}

fn setup_logger() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
}

fn main() {
    if let Err(e) = setup_logger() {
        eprintln!("failed to set up logging: {}", e);
    }

    if let Err(e) = run() {
        log::error!("{}", e);
        // Blocking message box is the user-visible channel for setup
        // failures. Ignore errors from the box itself; the log has it.
        let _ = sdl2::messagebox::show_simple_message_box(
            sdl2::messagebox::MessageBoxFlag::ERROR,
            "Spincube",
            &e.to_string(),
            None::<&sdl2::video::Window>,
        );
        std::process::exit(1);
    }
}

fn run() -> Result<(), GraphicsError> {
    let mut app = App::new("Spincube", 1280, 720, true)?;

    let (width, height) = app.window.drawable_size();
    unsafe {
        app.gl.viewport(0, 0, width as i32, height as i32);
        app.gl.enable(glow::DEPTH_TEST);
    }
    log::info!("context up, drawable size {}x{}", width, height);

    let shader_program = shader_program!(cube, app.gl, ".");
    log::debug!("cube shader program linked");

    let projection = transform::perspective(
        FOV_DEGREES.to_radians(),
        width as f32 / height as f32,
        NEAR_PLANE,
        FAR_PLANE,
    );
    let mut scene = Scene::new(&app.gl, shader_program, projection);

    'running: loop {
        for event in app.event_pump.poll_iter() {
            if let sdl2::event::Event::Quit { .. } = event {
                break 'running;
            }
        }

        scene.render(&app.gl);
        app.window.gl_swap_window();
    }

    Ok(())
}
