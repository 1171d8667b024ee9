use rand::Rng;

/// Axis-aligned bounding box, stored as min/max corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_point(x: f32, y: f32) -> Self {
        Self::new(x, y, x, y)
    }

    // Box spanning a segment, whatever its direction.
    pub fn from_segment(x: f32, y: f32, end_x: f32, end_y: f32) -> Self {
        Self::new(x.min(end_x), y.min(end_y), x.max(end_x), y.max(end_y))
    }

    /// An inverted box that any `expand_to_include` call will overwrite.
    pub fn empty() -> Self {
        Self::new(
            f32::INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NEG_INFINITY,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn expand_to_include(&mut self, other: &Aabb) {
        self.min_x = f32::min(self.min_x, other.min_x);
        self.min_y = f32::min(self.min_y, other.min_y);
        self.max_x = f32::max(self.max_x, other.max_x);
        self.max_y = f32::max(self.max_y, other.max_y);
    }

    /// Grow the box by `margin` on all four sides.
    pub fn expanded_by(&self, margin: f32) -> Aabb {
        Aabb::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.min_x += dx;
        self.min_y += dy;
        self.max_x += dx;
        self.max_y += dy;
    }

    pub fn get_random_point_inside<R: Rng>(&self, rng: &mut R) -> (f32, f32) {
        (
            self._safe_randf32(rng, self.min_x, self.max_x),
            self._safe_randf32(rng, self.min_y, self.max_y),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
