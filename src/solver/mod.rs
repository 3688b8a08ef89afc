mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::{set_bnd, FieldType};
pub use self::core::{advect, diffuse, lin_solve, project};
pub use params::SolverParams;

use crate::state::FluidGrid;

/// Add `dt * s` to every cell of `x`, ghost cells included.
pub fn add_source(x: &mut [f64], s: &[f64], dt: f64) {
    for (xi, si) in x.iter_mut().zip(s) {
        *xi += dt * si;
    }
}

/// Velocity step: add sources, diffuse, project, self-advect, project.
///
/// The source buffers double as the "previous" fields and as pressure/divergence
/// scratch. They are zeroed before returning.
pub fn velocity_step(grid: &mut FluidGrid) {
    let n = grid.n;
    let SolverParams { dt, viscosity, iterations, .. } = grid.params;

    add_source(&mut grid.vx, &grid.vx_source, dt);
    add_source(&mut grid.vy, &grid.vy_source, dt);

    // Diffuse velocity
    std::mem::swap(&mut grid.vx, &mut grid.vx_source);
    diffuse(FieldType::Vx, &mut grid.vx, &grid.vx_source, viscosity, dt, iterations, n);
    std::mem::swap(&mut grid.vy, &mut grid.vy_source);
    diffuse(FieldType::Vy, &mut grid.vy, &grid.vy_source, viscosity, dt, iterations, n);

    // Project to make diffused velocity divergence-free
    project(
        &mut grid.vx,
        &mut grid.vy,
        &mut grid.vx_source,
        &mut grid.vy_source,
        iterations,
        n,
    );

    // Advect velocity along itself
    std::mem::swap(&mut grid.vx, &mut grid.vx_source);
    std::mem::swap(&mut grid.vy, &mut grid.vy_source);
    advect(FieldType::Vx, &mut grid.vx, &grid.vx_source, &grid.vx_source, &grid.vy_source, dt, n);
    advect(FieldType::Vy, &mut grid.vy, &grid.vy_source, &grid.vx_source, &grid.vy_source, dt, n);

    // Advection reintroduces divergence
    project(
        &mut grid.vx,
        &mut grid.vy,
        &mut grid.vx_source,
        &mut grid.vy_source,
        iterations,
        n,
    );

    grid.vx_source.fill(0.0);
    grid.vy_source.fill(0.0);
}

/// Density step: add source, diffuse, advect along the current velocity.
pub fn density_step(grid: &mut FluidGrid) {
    let n = grid.n;
    let SolverParams { dt, diffusion, iterations, .. } = grid.params;

    add_source(&mut grid.density, &grid.density_source, dt);

    std::mem::swap(&mut grid.density, &mut grid.density_source);
    diffuse(FieldType::Scalar, &mut grid.density, &grid.density_source, diffusion, dt, iterations, n);

    std::mem::swap(&mut grid.density, &mut grid.density_source);
    advect(FieldType::Scalar, &mut grid.density, &grid.density_source, &grid.vx, &grid.vy, dt, n);

    grid.density_source.fill(0.0);
}
