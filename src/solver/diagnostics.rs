use crate::state::idx;

/// Sum of a scalar field over the interior cells.
pub fn total_density(density: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            sum += density[idx(i, j, n)];
        }
    }
    sum
}

/// Compute volume-averaged kinetic energy: KE = 0.5 * <vx² + vy²>.
pub fn compute_kinetic_energy(vx: &[f64], vy: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            let ii = idx(i, j, n);
            sum += vx[ii] * vx[ii] + vy[ii] * vy[ii];
        }
    }
    if n > 0 { 0.5 * sum / (n * n) as f64 } else { 0.0 }
}

/// Largest absolute central-difference divergence over the interior, with h = 1/n.
pub fn max_divergence(vx: &[f64], vy: &[f64], n: usize) -> f64 {
    let half_inv_h = 0.5 * n as f64;
    let mut max = 0.0_f64;
    for j in 1..=n {
        for i in 1..=n {
            let d = half_inv_h
                * (vx[idx(i + 1, j, n)] - vx[idx(i - 1, j, n)] + vy[idx(i, j + 1, n)] - vy[idx(i, j - 1, n)]);
            max = max.max(d.abs());
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 10;
    const SIZE: usize = (N + 2) * (N + 2);

    #[test]
    fn test_total_density_ignores_ghosts() {
        let mut density = vec![1.0; SIZE];
        density[idx(0, 0, N)] = 1000.0;
        density[idx(N + 1, 3, N)] = 1000.0;
        assert_eq!(total_density(&density, N), (N * N) as f64);
    }

    #[test]
    fn test_kinetic_energy_zero() {
        let vx = vec![0.0; SIZE];
        let vy = vec![0.0; SIZE];
        let ke = compute_kinetic_energy(&vx, &vy, N);
        assert!(ke.abs() < 1e-15, "KE should be 0 with no flow, got {}", ke);
    }

    #[test]
    fn test_kinetic_energy_uniform_flow() {
        let vx = vec![1.0; SIZE];
        let vy = vec![0.0; SIZE];
        let ke = compute_kinetic_energy(&vx, &vy, N);
        assert!((ke - 0.5).abs() < 1e-10, "KE should be 0.5, got {}", ke);
    }

    #[test]
    fn test_divergence_of_uniform_flow_is_zero() {
        let vx = vec![0.4; SIZE];
        let vy = vec![-0.7; SIZE];
        assert_eq!(max_divergence(&vx, &vy, N), 0.0);
    }

    #[test]
    fn test_divergence_of_expanding_flow() {
        // vx = x / n: d(vx)/dx == 1 everywhere
        let mut vx = vec![0.0; SIZE];
        let vy = vec![0.0; SIZE];
        for j in 0..N + 2 {
            for i in 0..N + 2 {
                vx[idx(i, j, N)] = i as f64 / N as f64;
            }
        }
        let d = max_divergence(&vx, &vy, N);
        assert!((d - 1.0).abs() < 1e-12, "expected unit divergence, got {}", d);
    }
}
