//! A scene: a camera, an entity list, and the per-frame step/draw loop.
//!
//! Entities draw in insertion order, so later additions paint over
//! earlier ones. The scene owns the shading scratch buffers and threads
//! them through every draw call.

use crate::camera::Camera;
use crate::grid::IndexGrid;
use crate::shader::ShadeScratch;
use crate::sprite::Entity;

/// An ordered collection of entities viewed through one camera.
#[derive(Debug)]
pub struct Scene {
    pub camera: Camera,
    /// When set, every entity draws its hitbox outline.
    pub debug: bool,
    entities: Vec<Entity>,
    scratch: ShadeScratch,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Scene { camera, debug: false, entities: Vec::new(), scratch: ShadeScratch::new() }
    }

    /// Add an entity and return its handle.
    ///
    /// Handles are indices into the insertion order; they stay valid
    /// because the scene never removes entities.
    pub fn add(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, handle: usize) -> Option<&Entity> {
        self.entities.get(handle)
    }

    pub fn entity_mut(&mut self, handle: usize) -> Option<&mut Entity> {
        self.entities.get_mut(handle)
    }

    /// Advance every entity's motion state by `dt` seconds.
    ///
    /// Velocity integrates acceleration first, so a frame's motion uses
    /// the updated velocity.
    pub fn step(&mut self, dt: f32) {
        for entity in &mut self.entities {
            entity.vx += entity.ax * dt;
            entity.vy += entity.ay * dt;
            entity.x += entity.vx * dt;
            entity.y += entity.vy * dt;
        }
    }

    /// Draw every entity onto `target` in insertion order.
    pub fn draw(&mut self, target: &mut IndexGrid) {
        for entity in &self.entities {
            entity.draw(target, &self.camera, &mut self.scratch, self.debug);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ShadeLevel;

    #[test]
    fn test_add_returns_sequential_handles() {
        let mut scene = Scene::new(Camera::new(8, 8));
        assert!(scene.is_empty());
        let a = scene.add(Entity::sprite(IndexGrid::new(2, 2)));
        let b = scene.add(Entity::sprite(IndexGrid::new(2, 2)));
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(scene.len(), 2);
        assert!(scene.entity(b).is_some());
        assert!(scene.entity(2).is_none());
    }

    #[test]
    fn test_step_integrates_motion() {
        let mut scene = Scene::new(Camera::new(8, 8));
        let handle = scene.add(Entity::sprite(IndexGrid::new(2, 2)));
        {
            let e = scene.entity_mut(handle).unwrap();
            e.x = 0.0;
            e.y = 0.0;
            e.vx = 2.0;
            e.ay = 4.0;
        }
        scene.step(0.5);
        let e = scene.entity(handle).unwrap();
        assert_eq!(e.x, 1.0);
        assert_eq!(e.vy, 2.0);
        assert_eq!(e.y, 1.0);
        scene.step(0.5);
        let e = scene.entity(handle).unwrap();
        assert_eq!(e.x, 2.0);
        assert_eq!(e.vy, 4.0);
        assert_eq!(e.y, 3.0);
    }

    #[test]
    fn test_draw_order_is_insertion_order() {
        let mut scene = Scene::new(Camera::new(4, 4));
        let mut first = Entity::sprite(IndexGrid::from_rows(&["22", "22"]).unwrap());
        first.set_top_left(0, 0);
        scene.add(first);
        let mut second = Entity::sprite(IndexGrid::from_rows(&["7"]).unwrap());
        second.set_top_left(0, 0);
        scene.add(second);

        let mut target = IndexGrid::new(4, 4);
        scene.draw(&mut target);
        assert_eq!(target.get(0, 0), Some(7));
        assert_eq!(target.get(1, 0), Some(2));
    }

    #[test]
    fn test_shader_applies_after_sprite_in_order() {
        let mut scene = Scene::new(Camera::new(4, 4));
        let mut sprite = Entity::sprite(IndexGrid::from_rows(&["55", "55"]).unwrap());
        sprite.set_top_left(0, 0);
        scene.add(sprite);
        let mut shader = Entity::shader_rect(2, 2, ShadeLevel::Dark4);
        shader.set_top_left(0, 0);
        scene.add(shader);

        let mut target = IndexGrid::new(4, 4);
        scene.draw(&mut target);
        assert_eq!(target.get(0, 0), Some(0));
        assert_eq!(target.get(1, 1), Some(0));
    }

    #[test]
    fn test_debug_flag_outlines_entities() {
        let mut scene = Scene::new(Camera::new(8, 8));
        let mut sprite = Entity::sprite(IndexGrid::filled(3, 3, 4));
        sprite.set_top_left(2, 2);
        scene.add(sprite);
        scene.debug = true;

        let mut target = IndexGrid::new(8, 8);
        scene.draw(&mut target);
        assert_eq!(target.get(2, 2), Some(1));
        assert_eq!(target.get(4, 4), Some(1));
        assert_eq!(target.get(3, 3), Some(4));
    }

    #[test]
    fn test_camera_pan_shifts_scene() {
        let mut scene = Scene::new(Camera::new(4, 4));
        let mut sprite = Entity::sprite(IndexGrid::from_rows(&["9"]).unwrap());
        sprite.set_top_left(10, 10);
        scene.add(sprite);

        let mut target = IndexGrid::new(4, 4);
        scene.draw(&mut target);
        assert_eq!(target.count(9), 0);

        scene.camera.offset_x = 9;
        scene.camera.offset_y = 9;
        scene.draw(&mut target);
        assert_eq!(target.get(1, 1), Some(9));
    }
}
