use crate::error::GridError;
use crate::solver::{self, SolverParams};

/// Convert 2D lattice coordinates to the 1D storage index.
/// The lattice is (n+2)x(n+2): n interior cells plus one ghost cell per edge,
/// and both axes share the stride n+2.
#[inline(always)]
pub const fn idx(i: usize, j: usize, n: usize) -> usize {
    i + (n + 2) * j
}

/// Density and velocity fields of a sealed square box, plus their source buffers.
///
/// The source buffers accumulate injected impulses between steps. A step adds them
/// to the live fields, reuses them as scratch space for diffusion and projection,
/// and leaves them zeroed on return.
pub struct FluidGrid {
    pub(crate) n: usize,
    pub(crate) params: SolverParams,
    pub(crate) density: Vec<f64>,
    pub(crate) density_source: Vec<f64>,
    pub(crate) vx: Vec<f64>,
    pub(crate) vy: Vec<f64>,
    pub(crate) vx_source: Vec<f64>,
    pub(crate) vy_source: Vec<f64>,
}

impl FluidGrid {
    /// Allocate a grid with `dimension` interior cells per side.
    pub fn new(dimension: usize, params: SolverParams) -> Result<Self, GridError> {
        if dimension == 0 {
            return Err(GridError::InvalidConfiguration(
                "dimension must be at least one interior cell".into(),
            ));
        }
        params.validate()?;

        let side = dimension + 2;
        let size = side * side;
        log::debug!(
            "allocating {side}x{side} fluid grid (dt={}, diffusion={}, viscosity={}, iterations={})",
            params.dt, params.diffusion, params.viscosity, params.iterations
        );

        Ok(Self {
            n: dimension,
            params,
            density: vec![0.0; size],
            density_source: vec![0.0; size],
            vx: vec![0.0; size],
            vy: vec![0.0; size],
            vx_source: vec![0.0; size],
            vy_source: vec![0.0; size],
        })
    }

    /// Interior cells per side.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Lattice side length including ghost cells.
    pub fn side(&self) -> usize {
        self.n + 2
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Storage index of lattice cell (i, j). Both coordinates must lie in `0..=n+1`.
    pub fn flatten(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.side() && j < self.side(), "cell ({i}, {j}) out of range");
        idx(i, j, self.n)
    }

    /// Checked variant of [`flatten`](Self::flatten).
    pub fn try_flatten(&self, i: i64, j: i64) -> Result<usize, GridError> {
        let side = self.side();
        let in_range = |v: i64| v >= 0 && (v as usize) < side;
        if in_range(i) && in_range(j) {
            Ok(idx(i as usize, j as usize, self.n))
        } else {
            Err(GridError::IndexOutOfRange { i, j, side })
        }
    }

    /// Index of the lattice cell nearest (x, y), clamped onto the lattice.
    fn clamped_index(&self, x: i32, y: i32) -> usize {
        let max = (self.n + 1) as i32;
        idx(x.clamp(0, max) as usize, y.clamp(0, max) as usize, self.n)
    }

    /// Accumulate `amount` into the density source at cell (x, y).
    pub fn inject_density(&mut self, x: i32, y: i32, amount: f64) {
        let ii = self.clamped_index(x, y);
        self.density_source[ii] += amount;
    }

    /// Accumulate (dvx, dvy) into the velocity sources at cell (x, y).
    pub fn inject_velocity(&mut self, x: i32, y: i32, dvx: f64, dvy: f64) {
        let ii = self.clamped_index(x, y);
        self.vx_source[ii] += dvx;
        self.vy_source[ii] += dvy;
    }

    /// Advance the velocity field by one time step.
    pub fn velocity_step(&mut self) {
        solver::velocity_step(self);
    }

    /// Advance the density field by one time step along the current velocity.
    pub fn density_step(&mut self) {
        solver::density_step(self);
    }

    /// One full frame: velocity first, since density is carried by the updated flow.
    pub fn step(&mut self) {
        solver::velocity_step(self);
        solver::density_step(self);
    }

    /// Zero every field, including pending sources.
    pub fn reset(&mut self) {
        for field in [
            &mut self.density,
            &mut self.density_source,
            &mut self.vx,
            &mut self.vy,
            &mut self.vx_source,
            &mut self.vy_source,
        ] {
            field.fill(0.0);
        }
        log::debug!("fluid grid reset");
    }

    pub fn density(&self) -> &[f64] {
        &self.density
    }

    pub fn velocity_x(&self) -> &[f64] {
        &self.vx
    }

    pub fn velocity_y(&self) -> &[f64] {
        &self.vy
    }

    /// Pending density source, not yet applied by a step.
    pub fn density_source(&self) -> &[f64] {
        &self.density_source
    }

    /// Pending velocity sources, not yet applied by a step.
    pub fn velocity_source(&self) -> (&[f64], &[f64]) {
        (&self.vx_source, &self.vy_source)
    }

    /// Density at lattice cell (i, j).
    pub fn density_at(&self, i: usize, j: usize) -> f64 {
        self.density[self.flatten(i, j)]
    }

    /// Velocity at lattice cell (i, j).
    pub fn velocity_at(&self, i: usize, j: usize) -> (f64, f64) {
        let ii = self.flatten(i, j);
        (self.vx[ii], self.vy[ii])
    }
}
