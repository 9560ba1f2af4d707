// src/main.rs

pub mod app;
pub mod input;
pub mod rendering_lib;
pub mod ui;

use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use app::ShadowApp;
use shadow_caster::config::{parse_dimensions, ConfigError, SessionConfig};

/// Place walls on a grid, then move a light around and watch their shadows.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Window size in logical pixels, including the control strip.
    #[arg(long, value_name = "W×H", default_value = "1280x820", value_parser = parse_dimensions)]
    display_size: (u32, u32),

    /// Spacing of the snapping grid in pixels.
    #[arg(long, default_value_t = 20)]
    grid_size: u32,

    /// Height of the instruction strip at the top of the window.
    #[arg(long, default_value_t = 100)]
    control_strip: u32,

    /// Additional logging to stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let (screen_width, screen_height) = self.display_size;
        let config = SessionConfig {
            screen_width,
            screen_height,
            grid_size: self.grid_size,
            control_strip_height: self.control_strip,
            ..SessionConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            let _ = verbose;
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if console_log::init_with_level(log::Level::Warn).is_err() {
                web_sys::console::warn_1(&"Logger was already initialized".into());
            }
        } else {
            let default_filter = if verbose { "debug" } else { "warn" };
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
                .init();
        }
    }
}

pub async fn run(session: SessionConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("2D Shadow Casting")
            .with_inner_size(winit::dpi::LogicalSize::new(session.screen_width, session.screen_height))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .ok_or_else(|| anyhow::anyhow!("couldn't append canvas to document body"))?;
    }

    info!("Starting session {:?}", session);
    let mut app_state = ShadowApp::new(window.clone(), session).await?;

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => target.exit(),
                        WindowEvent::Resized(physical_size) => app_state.resize(*physical_size),
                        WindowEvent::Focused(is_focused) => app_state.set_focused(*is_focused),
                        _ => {}
                    }
                }
                if app_state.quit_requested() {
                    target.exit();
                }
            }
            Event::AboutToWait => {
                app_state.update();
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("WGPU Out Of Memory! Exiting.");
                        target.exit();
                    }
                    Err(e) => error!("Surface error: {:?}", e),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    init_logging(false);
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run(SessionConfig::default()).await {
            error!("{:#}", e);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let session = args.session_config()?;
    run(session).await
}
