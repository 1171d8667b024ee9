use common::shapes::Aabb;

/// Side of the Hilbert grid: box centers are mapped onto 16 bit coordinates.
pub const HILBERT_GRID: u32 = 1 << 16;

/// Position of the cell (x, y) along the Hilbert curve covering the grid.
pub fn hilbert_xy_to_index(mut x: u32, mut y: u32) -> u32 {
    let n = HILBERT_GRID;
    let mut index: u64 = 0;
    let mut s = n / 2;
    while s > 0 {
        let rx = u32::from(x & s > 0);
        let ry = u32::from(y & s > 0);
        index += u64::from(s) * u64::from(s) * u64::from((3 * rx) ^ ry);

        // Rotate the quadrant so the curve stays continuous.
        if ry == 0 {
            if rx == 1 {
                x = n - 1 - x;
                y = n - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }
        s /= 2;
    }
    index as u32
}

/// Hilbert index of the center of `aabb`, relative to `bounds`.
#[inline(always)]
pub fn hilbert_value(aabb: &Aabb, bounds: &Aabb) -> u32 {
    let max = (HILBERT_GRID - 1) as f32;
    let scale_x = if bounds.width() > 0.0 { max / bounds.width() } else { 0.0 };
    let scale_y = if bounds.height() > 0.0 { max / bounds.height() } else { 0.0 };
    let hx = ((aabb.center_x() - bounds.min_x) * scale_x).clamp(0.0, max) as u32;
    let hy = ((aabb.center_y() - bounds.min_y) * scale_y).clamp(0.0, max) as u32;
    hilbert_xy_to_index(hx, hy)
}
