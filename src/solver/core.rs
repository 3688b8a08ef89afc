use crate::state::idx;
use super::boundary::{FieldType, set_bnd};

/// Gauss-Seidel iterative linear solver over the interior cells.
/// Solves: x[i,j] = (x0[i,j] + a * (neighbors)) / c
pub fn lin_solve(field_type: FieldType, x: &mut [f64], x0: &[f64], a: f64, c: f64, iter: usize, n: usize) {
    let c_inv = 1.0 / c;
    for _ in 0..iter {
        for j in 1..=n {
            for i in 1..=n {
                // Edge cells read ghost values left by the previous set_bnd.
                let neighbors = x[idx(i - 1, j, n)]
                    + x[idx(i + 1, j, n)]
                    + x[idx(i, j - 1, n)]
                    + x[idx(i, j + 1, n)];
                x[idx(i, j, n)] = (x0[idx(i, j, n)] + a * neighbors) * c_inv;
            }
        }
        set_bnd(field_type, x, n);
    }
}

/// Implicit diffusion step: spreads the field over time.
/// a = dt * diff * n^2, c = 1 + 4a
pub fn diffuse(field_type: FieldType, x: &mut [f64], x0: &[f64], diff: f64, dt: f64, iter: usize, n: usize) {
    let a = dt * diff * (n * n) as f64;
    let c = 1.0 + 4.0 * a;
    // Start the relaxation from the previous field
    x.copy_from_slice(x0);
    lin_solve(field_type, x, x0, a, c, iter, n);
}

/// Semi-Lagrangian advection: traces each cell backwards through the velocity field
/// and bilinearly samples `d0` at the departure point.
pub fn advect(field_type: FieldType, d: &mut [f64], d0: &[f64], vx: &[f64], vy: &[f64], dt: f64, n: usize) {
    let dt0 = dt * n as f64;
    let lo = 0.5;
    let hi = n as f64 + 0.5;

    for j in 1..=n {
        for i in 1..=n {
            let ii = idx(i, j, n);
            // Trace backwards, clamped so all four samples stay on the lattice
            let x = (i as f64 - dt0 * vx[ii]).clamp(lo, hi);
            let y = (j as f64 - dt0 * vy[ii]).clamp(lo, hi);

            let i0 = x.floor() as usize;
            let i1 = i0 + 1;
            let j0 = y.floor() as usize;
            let j1 = j0 + 1;

            let s1 = x - i0 as f64;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f64;
            let t0 = 1.0 - t1;

            d[ii] = s0 * (t0 * d0[idx(i0, j0, n)] + t1 * d0[idx(i0, j1, n)])
                + s1 * (t0 * d0[idx(i1, j0, n)] + t1 * d0[idx(i1, j1, n)]);
        }
    }
    set_bnd(field_type, d, n);
}

/// Pressure projection: enforces incompressibility (divergence-free velocity field).
/// `p` and `div` are scratch buffers; their contents on entry are ignored.
pub fn project(vx: &mut [f64], vy: &mut [f64], p: &mut [f64], div: &mut [f64], iter: usize, n: usize) {
    let h = 1.0 / n as f64;

    // Calculate divergence
    for j in 1..=n {
        for i in 1..=n {
            div[idx(i, j, n)] = -0.5
                * h
                * (vx[idx(i + 1, j, n)] - vx[idx(i - 1, j, n)]
                    + vy[idx(i, j + 1, n)] - vy[idx(i, j - 1, n)]);
            p[idx(i, j, n)] = 0.0;
        }
    }
    set_bnd(FieldType::Scalar, div, n);
    set_bnd(FieldType::Scalar, p, n);

    // Solve for pressure
    lin_solve(FieldType::Scalar, p, div, 1.0, 4.0, iter, n);

    // Subtract pressure gradient from velocity
    for j in 1..=n {
        for i in 1..=n {
            vx[idx(i, j, n)] -= 0.5 * (p[idx(i + 1, j, n)] - p[idx(i - 1, j, n)]) / h;
            vy[idx(i, j, n)] -= 0.5 * (p[idx(i, j + 1, n)] - p[idx(i, j - 1, n)]) / h;
        }
    }
    set_bnd(FieldType::Vx, vx, n);
    set_bnd(FieldType::Vy, vy, n);
}
