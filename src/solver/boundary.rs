use crate::state::idx;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Density, pressure and divergence: copied across every wall.
    Scalar,
    /// Horizontal velocity: negated at the left/right walls.
    Vx,
    /// Vertical velocity: negated at the bottom/top walls.
    Vy,
}

/// Sealed-box boundary conditions on an (n+2)x(n+2) lattice.
///   - `FieldType::Scalar`: Neumann (copy neighbor) at all walls
///   - `FieldType::Vx`: negate at vertical walls, copy at horizontal walls
///   - `FieldType::Vy`: negate at horizontal walls, copy at vertical walls
///
/// Corners take the average of their two edge neighbors, so edges are written first.
pub fn set_bnd(field_type: FieldType, x: &mut [f64], n: usize) {
    let flip_x = if field_type == FieldType::Vx { -1.0 } else { 1.0 };
    let flip_y = if field_type == FieldType::Vy { -1.0 } else { 1.0 };

    for i in 1..=n {
        // Left/Right walls
        x[idx(0, i, n)] = flip_x * x[idx(1, i, n)];
        x[idx(n + 1, i, n)] = flip_x * x[idx(n, i, n)];
        // Bottom/Top walls
        x[idx(i, 0, n)] = flip_y * x[idx(i, 1, n)];
        x[idx(i, n + 1, n)] = flip_y * x[idx(i, n, n)];
    }

    x[idx(0, 0, n)] = 0.5 * (x[idx(1, 0, n)] + x[idx(0, 1, n)]);
    x[idx(0, n + 1, n)] = 0.5 * (x[idx(1, n + 1, n)] + x[idx(0, n, n)]);
    x[idx(n + 1, 0, n)] = 0.5 * (x[idx(n, 0, n)] + x[idx(n + 1, 1, n)]);
    x[idx(n + 1, n + 1, n)] = 0.5 * (x[idx(n, n + 1, n)] + x[idx(n + 1, n, n)]);
}
