//! Window demo application
//!
//! Opens a window with an OpenGL 3.3 core context, shows the FPS in the
//! title bar and feeds mouse input to an orbit camera. Escape closes the
//! window.
//!
//! Usage: `window_demo [config.toml|config.ron]`

mod mouse;

use std::cell::RefCell;
use std::rc::Rc;

use gl_window::foundation::logging;
use gl_window::prelude::*;
use mouse::MouseHandler;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "window.toml";

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("window_demo: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ApplicationConfig::load_or_default(&path)?;
    config.validate()?;
    logging::init_with_level(&config.log_level);

    let mut window = Window::try_new(&config.window)?;
    log::info!("Window ready: {}x{}", window.width(), window.height());

    let handler = Rc::new(RefCell::new(MouseHandler::default()));
    let (on_move, on_click, on_scroll) = (handler.clone(), handler.clone(), handler.clone());
    window.attach_mouse_listeners(
        move |x, y| on_move.borrow_mut().on_move(x, y),
        move |button, action, x, y| on_click.borrow_mut().on_click(button, action, x, y),
        move |dx, dy| on_scroll.borrow_mut().on_scroll(dx, dy),
    );

    window.make_context();
    window.init_timer();

    while !window.is_closed() {
        window.process_events();
        if window.is_key_pressed(KeyCode::Escape) {
            window.close();
        }

        window.show_fps();
        window.render();
    }

    let camera = handler.borrow();
    log::info!(
        "Final camera: yaw {:.1}, pitch {:.1}, zoom {:.1}",
        camera.yaw,
        camera.pitch,
        camera.zoom
    );
    drop(camera);

    window.destroy();
    Ok(())
}
