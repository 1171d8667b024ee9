use crate::shapes::Aabb;

// Edges count as overlapping: a box touching the search area is a candidate.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    !(a.max_x < b.min_x || a.max_y < b.min_y || a.min_x > b.max_x || a.min_y > b.max_y)
}

// Check that Aabb inner is fully contained in Aabb outer
pub fn aabb_contains_aabb(outer: &Aabb, inner: &Aabb) -> bool {
    outer.min_x <= inner.min_x
        && outer.max_x >= inner.max_x
        && outer.min_y <= inner.min_y
        && outer.max_y >= inner.max_y
}

pub fn squared_distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}
