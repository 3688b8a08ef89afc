use crate::state::{idx, FluidGrid};

/// Tokyo Night-inspired color stops for density mapping.
/// Deep navy -> blue -> purple -> pink -> orange
const COLOR_STOPS: [(f64, f64, f64); 5] = [
    (26.0, 27.0, 38.0),    // #1a1b26 navy         (0.00)
    (122.0, 162.0, 247.0), // #7aa2f7 blue         (0.25)
    (187.0, 154.0, 247.0), // #bb9af7 purple       (0.50)
    (247.0, 118.0, 142.0), // #f7768e pink         (0.75)
    (255.0, 158.0, 100.0), // #ff9e64 orange       (1.00)
];

/// Convert a normalized density [0.0, 1.0] to RGBA.
pub fn density_to_rgba(t: f64) -> [u8; 4] {
    // NaN maps to the background rather than poisoning the ramp lookup
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = COLOR_STOPS[i];
    let (r1, g1, b1) = COLOR_STOPS[i + 1];

    [
        (r0 + s * (r1 - r0)) as u8,
        (g0 + s * (g1 - g0)) as u8,
        (b0 + s * (b1 - b0)) as u8,
        255,
    ]
}

/// Pack RGBA into minifb's 0RGB pixel layout.
fn pack_rgb(rgba: [u8; 4]) -> u32 {
    ((rgba[0] as u32) << 16) | ((rgba[1] as u32) << 8) | rgba[2] as u32
}

/// Render the interior density field into `buf` (width x height, row-major),
/// nearest-neighbor upscaled. `saturation` is the density drawn at full color.
pub fn render_density(buf: &mut Vec<u32>, grid: &FluidGrid, width: usize, height: usize, saturation: f64) {
    let n = grid.n();
    let density = grid.density();
    let inv_sat = if saturation > 0.0 { 1.0 / saturation } else { 0.0 };

    buf.resize(width * height, 0);
    for py in 0..height {
        let j = 1 + (py * n / height.max(1)).min(n - 1);
        let row = &mut buf[py * width..(py + 1) * width];
        for (px, pixel) in row.iter_mut().enumerate() {
            let i = 1 + (px * n / width.max(1)).min(n - 1);
            *pixel = pack_rgb(density_to_rgba(density[idx(i, j, n)] * inv_sat));
        }
    }
}
