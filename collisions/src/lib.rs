pub mod error;

pub use error::{CollisionsError, CollisionsResult};

use common::shapes::Aabb;
use nalgebra::{Isometry2, Point2, Vector2};
use parry2d::query::{self, Ray};
use parry2d::shape::SharedShape;
use std::fmt;

// Contacts closer than this to zero distance are edges touching, not overlaps.
const TOUCHING_EPSILON: f32 = 1e-4;

/// One convex polygon of an object's collision shape, placed in the world
/// by `position`.
#[derive(Clone)]
pub struct Hitbox {
    pub shape: SharedShape,
    pub position: Isometry2<f32>,
}

impl Hitbox {
    /// Builds a hitbox from world-space vertices. The convex hull of the
    /// vertices is used, so winding order does not matter.
    pub fn from_vertices(vertices: &[(f32, f32)]) -> CollisionsResult<Self> {
        if let Some(&(x, y)) = vertices
            .iter()
            .find(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(CollisionsError::NonFiniteVertex { x, y });
        }
        if vertices.len() < 3 || all_collinear(vertices) {
            return Err(CollisionsError::DegenerateHitbox {
                vertices: vertices.len(),
            });
        }

        let points: Vec<Point2<f32>> = vertices
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect();
        let shape = SharedShape::convex_hull(&points).ok_or(CollisionsError::DegenerateHitbox {
            vertices: vertices.len(),
        })?;

        Ok(Self {
            shape,
            position: Isometry2::identity(),
        })
    }

    /// Axis-aligned rectangle hitbox.
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> CollisionsResult<Self> {
        Self::from_vertices(&[
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ])
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.translation.vector += Vector2::new(dx, dy);
    }

    pub fn aabb(&self) -> Aabb {
        let aabb = self.shape.compute_aabb(&self.position);
        Aabb::new(aabb.mins.x, aabb.mins.y, aabb.maxs.x, aabb.maxs.y)
    }
}

impl fmt::Debug for Hitbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hitbox")
            .field("aabb", &self.aabb())
            .finish()
    }
}

/// Tight bounding box of a list of hitboxes, `None` when the list is empty.
pub fn hitboxes_aabb(hitboxes: &[Hitbox]) -> Option<Aabb> {
    let mut iter = hitboxes.iter();
    let mut aabb = iter.next()?.aabb();
    for hitbox in iter {
        aabb.expand_to_include(&hitbox.aabb());
    }
    Some(aabb)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CollisionResult {
    /// Translation to apply to the first polygon so that it stops
    /// overlapping the second one.
    pub move_axis: (f32, f32),
}

/// Polygon/polygon collision test. When the polygons collide, the result
/// carries the minimum translation vector separating `a` from `b`.
pub fn collision_test(
    a: &Hitbox,
    b: &Hitbox,
    ignore_touching_edges: bool,
) -> Option<CollisionResult> {
    let contact = query::contact(
        &a.position,
        &*a.shape,
        &b.position,
        &*b.shape,
        TOUCHING_EPSILON,
    )
    .ok()
    .flatten()?;

    if ignore_touching_edges && contact.dist >= -TOUCHING_EPSILON {
        return None;
    }

    // `dist` is negative when penetrating, and `normal1` points from `a` towards `b`.
    let depth = contact.dist.min(0.0);
    let normal = contact.normal1.into_inner();
    Some(CollisionResult {
        move_axis: (normal.x * depth, normal.y * depth),
    })
}

pub fn is_point_inside(hitbox: &Hitbox, x: f32, y: f32) -> bool {
    hitbox
        .shape
        .contains_point(&hitbox.position, &Point2::new(x, y))
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RaycastResult {
    pub close_x: f32,
    pub close_y: f32,
    pub close_sq_dist: f32,
    pub far_x: f32,
    pub far_y: f32,
    pub far_sq_dist: f32,
}

/// Intersects the segment from (x, y) to (end_x, end_y) with the boundary of
/// the polygon. The close point is the boundary crossing nearest to the start,
/// the far point the one farthest from it; both are the same point when the
/// segment crosses the boundary only once.
pub fn raycast_test(
    hitbox: &Hitbox,
    x: f32,
    y: f32,
    end_x: f32,
    end_y: f32,
) -> Option<RaycastResult> {
    let delta = Vector2::new(end_x - x, end_y - y);
    let length = delta.norm();
    if length == 0.0 {
        return None;
    }
    // Time of impact is in world units along a unit direction, also when the
    // ray starts inside the polygon.
    let dir = delta / length;

    let start = Point2::new(x, y);
    let end = Point2::new(end_x, end_y);

    let forward = Ray::new(start, dir);
    let close_toi = hitbox
        .shape
        .cast_ray(&hitbox.position, &forward, length, false)?;
    let close = forward.point_at(close_toi);

    let backward = Ray::new(end, -dir);
    let far = match hitbox
        .shape
        .cast_ray(&hitbox.position, &backward, length, false)
    {
        Some(toi) => backward.point_at(toi),
        None => close,
    };

    Some(RaycastResult {
        close_x: close.x,
        close_y: close.y,
        close_sq_dist: (close - start).norm_squared(),
        far_x: far.x,
        far_y: far.y,
        far_sq_dist: (far - start).norm_squared(),
    })
}

fn all_collinear(vertices: &[(f32, f32)]) -> bool {
    let (x0, y0) = vertices[0];
    let Some(&(x1, y1)) = vertices.iter().find(|&&(x, y)| x != x0 || y != y0) else {
        return true;
    };
    vertices.iter().all(|&(x, y)| {
        let cross = (x1 - x0) * (y - y0) - (y1 - y0) * (x - x0);
        cross.abs() <= f32::EPSILON
    })
}
