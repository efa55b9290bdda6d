//! Everything the integrator reads while shading.

use crate::{Background, Light, SceneObject};

/// An ordered set of objects, one light and a background.
///
/// Built once, then shared by reference with every render thread.
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
    light: Light,
    background: Box<dyn Background>,
}

impl Scene {
    /// Create a scene with no objects.
    pub fn new(light: Light, background: impl Background + 'static) -> Self {
        Self {
            objects: Vec::new(),
            light,
            background: Box::new(background),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, object: impl SceneObject + 'static) -> Self {
        self.add(Box::new(object));
        self
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn background(&self) -> &dyn Background {
        self.background.as_ref()
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
