use crate::config::InputConfig;
use crate::state::FluidGrid;

/// A localized impulse in lattice cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub x: i32,
    pub y: i32,
    pub density: f64,
    pub dvx: f64,
    pub dvy: f64,
}

impl Impulse {
    /// Accumulate this impulse into the grid's source buffers.
    pub fn apply(&self, grid: &mut FluidGrid) {
        grid.inject_density(self.x, self.y, self.density);
        grid.inject_velocity(self.x, self.y, self.dvx, self.dvy);
    }
}

/// Turns pointer drags over a view into impulses.
///
/// Each drag sample deposits density at the previous pointer cell, with a velocity
/// proportional to the pointer movement since that sample.
pub struct DragTracker {
    n: usize,
    view_width: usize,
    view_height: usize,
    density_amount: f64,
    velocity_scale: f64,
    last: Option<(f32, f32)>,
}

impl DragTracker {
    pub fn new(n: usize, view_width: usize, view_height: usize, cfg: &InputConfig) -> Self {
        Self {
            n,
            view_width: view_width.max(1),
            view_height: view_height.max(1),
            density_amount: cfg.density_amount,
            velocity_scale: cfg.velocity_scale,
            last: None,
        }
    }

    pub fn resize(&mut self, view_width: usize, view_height: usize) {
        self.view_width = view_width.max(1);
        self.view_height = view_height.max(1);
    }

    /// Interior cell under the pixel (px, py), clamped to `1..=n`.
    pub fn cell_at(&self, px: f32, py: f32) -> (i32, i32) {
        let to_cell = |p: f32, extent: usize| -> i32 {
            let c = 1 + (p as f64 / extent as f64 * self.n as f64).floor() as i64;
            c.clamp(1, self.n as i64) as i32
        };
        (to_cell(px, self.view_width), to_cell(py, self.view_height))
    }

    /// Feed one pointer sample. Returns an impulse while the button is held and the
    /// pointer has a previous sample to measure movement from.
    pub fn update(&mut self, pos: Option<(f32, f32)>, pressed: bool) -> Option<Impulse> {
        let Some((px, py)) = pos.filter(|_| pressed) else {
            self.last = None;
            return None;
        };
        let prev = self.last.replace((px, py))?;

        let (x, y) = self.cell_at(prev.0, prev.1);
        Some(Impulse {
            x,
            y,
            density: self.density_amount,
            dvx: (px - prev.0) as f64 * self.velocity_scale,
            dvy: (py - prev.1) as f64 * self.velocity_scale,
        })
    }
}
