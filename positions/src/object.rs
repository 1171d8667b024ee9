use collisions::{hitboxes_aabb, Hitbox};
use common::collision_detection::squared_distance;
use common::shapes::Aabb;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What the manager needs to know about a live object of the scene.
pub trait ObjectWithCoordinates {
    fn id(&self) -> u32;
    /// Identifier of the object type; objects of a type share a container.
    fn name_id(&self) -> u32;
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn drawable_x(&self) -> f32;
    fn drawable_y(&self) -> f32;
    /// Center, relative to the drawable position.
    fn center_x(&self) -> f32;
    fn center_y(&self) -> f32;
    fn hitboxes(&self) -> Vec<Hitbox>;
    fn aabb(&self) -> Aabb;
    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);
}

pub type ObjectHandle = Rc<RefCell<dyn ObjectWithCoordinates>>;

/// Coordinates, AABB and hitboxes of an object, as read at the last sync.
#[derive(Debug, Clone)]
pub struct ObjectPosition {
    pub object: Weak<RefCell<dyn ObjectWithCoordinates>>,
    pub object_id: u32,
    pub object_name_id: u32,
    pub x: f32,
    pub y: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub hitboxes: Vec<Hitbox>,
    pub aabb: Aabb,
}

impl ObjectPosition {
    pub fn from_object(object: &ObjectHandle) -> Self {
        let live = object.borrow();
        let hitboxes = live.hitboxes();
        // The AABB must stay the exact bound of the stored hitboxes.
        let aabb = hitboxes_aabb(&hitboxes).unwrap_or_else(|| live.aabb());

        ObjectPosition {
            object: Rc::downgrade(object),
            object_id: live.id(),
            object_name_id: live.name_id(),
            x: live.x(),
            y: live.y(),
            center_x: live.drawable_x() + live.center_x(),
            center_y: live.drawable_y() + live.center_y(),
            hitboxes,
            aabb,
        }
    }

    /// Moves the snapshot without reading the object again.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
        self.center_x += dx;
        self.center_y += dy;
        self.aabb.translate(dx, dy);
        for hitbox in &mut self.hitboxes {
            hitbox.translate(dx, dy);
        }
    }

    pub fn squared_distance_to(&self, other: &ObjectPosition) -> f32 {
        squared_distance(self.center_x, self.center_y, other.center_x, other.center_y)
    }
}
