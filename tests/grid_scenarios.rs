use fluidgrid::solver::diagnostics::{compute_kinetic_energy, total_density};
use fluidgrid::{FluidGrid, GridError, SolverParams};

fn stirred_grid(n: usize) -> FluidGrid {
    let mut grid = FluidGrid::new(n, SolverParams::new(0.1, 0.0001, 0.0001)).unwrap();
    let c = (n / 2) as i32;
    grid.inject_density(c, c, 100.0);
    grid.inject_velocity(c, c, 40.0, 25.0);
    grid.inject_velocity(c + 1, c, -10.0, 30.0);
    grid.step();
    grid
}

#[test]
fn spike_diffuses_to_neighbors() {
    let mut grid = FluidGrid::new(10, SolverParams::new(0.1, 0.01, 0.0)).unwrap();
    grid.inject_density(5, 5, 100.0);
    grid.density_step();

    let center = grid.density_at(5, 5);
    assert!(center < 0.1 * 100.0, "center should have spread, got {}", center);
    assert!(center > 0.0);
    for (i, j) in [(4, 5), (6, 5), (5, 4), (5, 6)] {
        assert!(grid.density_at(i, j) > 0.0, "({}, {}) should have gained density", i, j);
    }
}

#[test]
fn walls_stay_sealed_under_repeated_stepping() {
    let n = 24;
    let mut grid = stirred_grid(n);
    for _ in 0..40 {
        grid.step();
    }

    let vx = grid.velocity_x();
    let vy = grid.velocity_y();
    let at = |i: usize, j: usize| grid.flatten(i, j);
    for k in 1..=n {
        // Normal velocity averaged across each wall vanishes
        assert_eq!(vx[at(0, k)], -vx[at(1, k)], "left wall leaks at {}", k);
        assert_eq!(vx[at(n + 1, k)], -vx[at(n, k)], "right wall leaks at {}", k);
        assert_eq!(vy[at(k, 0)], -vy[at(k, 1)], "bottom wall leaks at {}", k);
        assert_eq!(vy[at(k, n + 1)], -vy[at(k, n)], "top wall leaks at {}", k);
    }
    assert!(compute_kinetic_energy(vx, vy, n) > 0.0, "flow should still be moving");
}

#[test]
fn density_ghosts_mirror_interior_after_step() {
    let n = 16;
    let grid = stirred_grid(n);
    let d = grid.density();
    let at = |i: usize, j: usize| grid.flatten(i, j);
    for k in 1..=n {
        assert_eq!(d[at(0, k)], d[at(1, k)]);
        assert_eq!(d[at(n + 1, k)], d[at(n, k)]);
        assert_eq!(d[at(k, 0)], d[at(k, 1)]);
        assert_eq!(d[at(k, n + 1)], d[at(k, n)]);
    }
    assert_eq!(d[at(0, 0)], 0.5 * (d[at(1, 0)] + d[at(0, 1)]));
    assert_eq!(d[at(n + 1, n + 1)], 0.5 * (d[at(n, n + 1)] + d[at(n + 1, n)]));
}

#[test]
fn long_run_stays_finite_with_large_time_step() {
    let n = 20;
    let mut grid = FluidGrid::new(n, SolverParams::new(1.0, 0.01, 0.01)).unwrap();
    for frame in 0..100 {
        let angle = frame as f64 * 0.3;
        grid.inject_density(10, 10, 50.0);
        grid.inject_velocity(10, 10, 30.0 * angle.cos(), 30.0 * angle.sin());
        grid.step();
    }
    assert!(grid.density().iter().all(|v| v.is_finite()));
    assert!(grid.velocity_x().iter().all(|v| v.is_finite()));
    assert!(grid.velocity_y().iter().all(|v| v.is_finite()));
    assert!(total_density(grid.density(), n) > 0.0);
}

#[test]
fn injections_between_steps_accumulate_from_zero() {
    let mut grid = stirred_grid(12);
    assert!(grid.density_source().iter().all(|&v| v == 0.0));
    grid.inject_density(3, 4, 2.0);
    assert_eq!(grid.density_source()[grid.flatten(3, 4)], 2.0);
}

#[test]
fn degenerate_configuration_is_rejected() {
    assert!(matches!(
        FluidGrid::new(0, SolverParams::default()),
        Err(GridError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        FluidGrid::new(8, SolverParams::new(-1.0, 0.0, 0.0)),
        Err(GridError::InvalidConfiguration(_))
    ));
}
