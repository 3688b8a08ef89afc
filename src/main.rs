use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use fluidgrid::config::{self, Config};
use fluidgrid::input::{DragTracker, Impulse};
use fluidgrid::renderer;
use fluidgrid::solver::diagnostics::{compute_kinetic_energy, max_divergence, total_density};
use fluidgrid::FluidGrid;

struct Defaults;

impl Defaults {
    const HEADLESS_FRAMES: usize = 300;
    const HEADLESS_LOG_INTERVAL: usize = 30;
    /// Density drawn at full color.
    const DENSITY_SATURATION: f64 = 5.0;
}

/// Parse `--headless [frames]` from CLI args.
fn headless_frames() -> Option<usize> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|a| a == "--headless")?;
    let frames = args
        .get(pos + 1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(Defaults::HEADLESS_FRAMES);
    Some(frames)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = config::load();
    match headless_frames() {
        Some(frames) => run_headless(&cfg, frames),
        None => run_gui(&cfg),
    }
}

fn create_grid(cfg: &Config) -> Result<FluidGrid> {
    FluidGrid::new(cfg.physics.dimension, cfg.physics.solver_params())
        .context("invalid physics configuration")
}

fn log_diagnostics(grid: &FluidGrid, frame: usize) {
    let n = grid.n();
    log::info!(
        "frame={} mass={:.4} KE={:.6e} max_div={:.3e}",
        frame,
        total_density(grid.density(), n),
        compute_kinetic_energy(grid.velocity_x(), grid.velocity_y(), n),
        max_divergence(grid.velocity_x(), grid.velocity_y(), n),
    );
}

/// Run without a window: a rotating jet at the centre of the box, with periodic
/// diagnostics. Ctrl+C stops early.
fn run_headless(cfg: &Config, frames: usize) -> Result<()> {
    let mut grid = create_grid(cfg)?;
    let n = grid.n();
    let center = (n / 2 + 1) as i32;

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    log::info!("headless run: {n}x{n} grid, {frames} frames");
    let start = Instant::now();
    let mut frame = 0;
    while frame < frames && running.load(Ordering::SeqCst) {
        let angle = frame as f64 * 0.05;
        Impulse {
            x: center,
            y: center,
            density: cfg.input.density_amount,
            dvx: angle.cos() * cfg.input.velocity_scale,
            dvy: angle.sin() * cfg.input.velocity_scale,
        }
        .apply(&mut grid);

        for _ in 0..cfg.display.steps_per_frame.max(1) {
            grid.step();
        }
        frame += 1;

        if frame % Defaults::HEADLESS_LOG_INTERVAL == 0 {
            log_diagnostics(&grid, frame);
        }
    }

    let elapsed = start.elapsed().as_secs_f64();
    log::info!(
        "completed {frame} frames in {elapsed:.2}s ({:.1} fps)",
        frame as f64 / elapsed.max(1e-9)
    );
    Ok(())
}

fn run_gui(cfg: &Config) -> Result<()> {
    let mut grid = create_grid(cfg)?;
    let mut w = cfg.display.width;
    let mut h = cfg.display.height;

    let mut window = Window::new(
        "fluidgrid | drag to stir, c=clear, esc=quit",
        w,
        h,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .context("failed to create window")?;
    window.set_target_fps(cfg.display.target_fps);

    let mut tracker = DragTracker::new(grid.n(), w, h, &cfg.input);
    let mut framebuf = vec![0u32; w * h];
    let mut frame = 0usize;

    while window.is_open() {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            grid.reset();
        }

        let (new_w, new_h) = window.get_size();
        if (new_w, new_h) != (w, h) && new_w > 0 && new_h > 0 {
            w = new_w;
            h = new_h;
            tracker.resize(w, h);
            log::debug!("window resized to {w}x{h}");
        }

        let pointer = window.get_mouse_pos(MouseMode::Discard);
        let pressed = window.get_mouse_down(MouseButton::Left);
        if let Some(impulse) = tracker.update(pointer, pressed) {
            impulse.apply(&mut grid);
        }

        for _ in 0..cfg.display.steps_per_frame.max(1) {
            grid.step();
        }
        frame += 1;

        renderer::render_density(&mut framebuf, &grid, w, h, Defaults::DENSITY_SATURATION);
        window
            .update_with_buffer(&framebuf, w, h)
            .context("failed to present frame")?;

        if log::log_enabled!(log::Level::Debug) && frame % 120 == 0 {
            log_diagnostics(&grid, frame);
        }
    }
    Ok(())
}
