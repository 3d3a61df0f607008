//! Sunflower demo entry point
//!
//! Run with:
//!   cargo run
//!   cargo run -- --no-vsync
//!
//! Controls:
//!   Escape  - Exit
//!   Mouse   - Interact with the debug UI

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use sunflower::{Game, GameConfig};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() -> ExitCode {
    env_logger::init();

    let config = GameConfig {
        vsync: !std::env::args().any(|arg| arg == "--no-vsync"),
        ..GameConfig::default()
    };

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            log::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };

    let window = match WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .build(&event_loop)
    {
        Ok(w) => Arc::new(w),
        Err(e) => {
            log::error!("Failed to create window: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Any failure here is a fatal startup fault; there is no partial
    // degradation mode.
    let mut game = match Game::new(Arc::clone(&window), &config) {
        Ok(g) => g,
        Err(e) => {
            log::error!("Failed to initialize: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut last_frame = Instant::now();
    let mut delta_time = 0.0f32;

    let window_clone = Arc::clone(&window);
    let result = event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => {
                // The UI overlay sees events first so game input and UI
                // input never double-consume.
                let consumed = game.on_window_event(&window_clone, &event);

                match &event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => game.resize(size.width, size.height),
                    WindowEvent::KeyboardInput { event, .. } if !consumed => {
                        if event.state == ElementState::Pressed
                            && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                        {
                            elwt.exit();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        game.update(&window_clone, delta_time);
                        if let Err(e) = game.draw() {
                            log::error!("Render error: {e}");
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                let now = Instant::now();
                delta_time = (now - last_frame).as_secs_f32();
                last_frame = now;
                window_clone.request_redraw();
            }
            _ => {}
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Event loop failed: {e}");
            ExitCode::FAILURE
        }
    }
}
