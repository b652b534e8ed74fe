//! Object ownership and the frame loop
//!
//! The world owns every drawable and rigid object. Each frame it renders
//! plain objects, then rigid objects, runs the physics step over the rigid
//! objects and finally hands control to the game's update callback.

use super::rigid::RigidObject;
use super::tick::integrate;
use crate::renderer::canvas::{Canvas, draw_command};
use crate::renderer::object::Object;
use crate::settings::PhysicsSettings;

#[derive(Debug, Clone, Default)]
pub struct World {
    objects: Vec<Object>,
    rigid_objects: Vec<RigidObject>,
    pub physics: PhysicsSettings,
    /// Simulation clock in seconds
    elapsed: f64,
    frame: u64,
    running: bool,
    next_id: u32,
}

impl World {
    pub fn new(physics: PhysicsSettings) -> Self {
        Self {
            physics,
            next_id: 1,
            ..Self::default()
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Take ownership of an object; returns its assigned ID
    pub fn add_object(&mut self, mut object: Object) -> u32 {
        let id = self.next_entity_id();
        object.id = id;
        self.objects.push(object);
        log::debug!("added object {}", id);
        id
    }

    pub fn add_rigid_object(&mut self, mut rigid: RigidObject) -> u32 {
        let id = self.next_entity_id();
        rigid.object.id = id;
        self.rigid_objects.push(rigid);
        log::debug!("added rigid object {}", id);
        id
    }

    pub fn remove_object(&mut self, id: u32) -> Option<Object> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn remove_rigid_object(&mut self, id: u32) -> Option<RigidObject> {
        let index = self.rigid_objects.iter().position(|o| o.id() == id)?;
        Some(self.rigid_objects.remove(index))
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }

    pub fn rigid_objects(&self) -> &[RigidObject] {
        &self.rigid_objects
    }

    pub fn rigid_objects_mut(&mut self) -> &mut [RigidObject] {
        &mut self.rigid_objects
    }

    pub fn object_mut(&mut self, id: u32) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn rigid_object_mut(&mut self, id: u32) -> Option<&mut RigidObject> {
        self.rigid_objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask `run` to exit once the current frame completes
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Draw every object, plain objects first
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear();
        for object in &self.objects {
            canvas.draw(draw_command(object));
        }
        for rigid in &self.rigid_objects {
            canvas.draw(draw_command(&rigid.object));
        }
        canvas.present();
    }

    /// Advance the physics of every rigid object by `dt` seconds
    pub fn step_physics(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        integrate(&mut self.rigid_objects, dt, self.elapsed, &self.physics);
    }

    /// One frame: render, physics, then the update callback
    pub fn frame<C, F>(&mut self, dt: f32, canvas: &mut C, mut update: F)
    where
        C: Canvas,
        F: FnMut(&mut World, f32),
    {
        self.render(canvas);
        self.step_physics(dt);
        self.frame += 1;
        update(self, dt);
    }

    /// Run frames until `stop` is called
    ///
    /// `clock` supplies the elapsed time of each frame in seconds.
    pub fn run<C, T, F>(&mut self, canvas: &mut C, mut clock: T, mut update: F)
    where
        C: Canvas,
        T: FnMut() -> f32,
        F: FnMut(&mut World, f32),
    {
        self.running = true;
        log::info!(
            "world running ({} objects, {} rigid objects)",
            self.objects.len(),
            self.rigid_objects.len()
        );
        while self.running {
            let dt = clock();
            self.frame(dt, canvas, &mut update);
        }
        log::info!("world stopped after {} frames ({:.2}s)", self.frame, self.elapsed);
    }
}
