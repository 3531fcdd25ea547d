use std::sync::Arc;

use crate::{
    foundation::error::{BlueboardError, BlueboardResult},
    scene::model::AnimationObject,
};

/// Ordered, immutable collection of the objects currently on the canvas.
///
/// Every edit returns a new `Scene`; clones share storage, so handing the
/// current scene to the render loop is cheap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    objects: Arc<Vec<AnimationObject>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scene, rejecting invalid objects and duplicate ids.
    pub fn from_objects(objects: Vec<AnimationObject>) -> BlueboardResult<Self> {
        let mut scene = Self::new();
        for obj in objects {
            scene = scene.with_object(obj)?;
        }
        Ok(scene)
    }

    pub fn objects(&self) -> &[AnimationObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AnimationObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn with_object(&self, obj: AnimationObject) -> BlueboardResult<Self> {
        obj.validate()?;
        if self.get(&obj.id).is_some() {
            return Err(BlueboardError::validation(format!(
                "scene already contains object '{}'",
                obj.id
            )));
        }
        let mut objects = Vec::with_capacity(self.objects.len() + 1);
        objects.extend(self.objects.iter().cloned());
        objects.push(obj);
        Ok(Self {
            objects: Arc::new(objects),
        })
    }

    pub fn without(&self, id: &str) -> Self {
        let objects = self
            .objects
            .iter()
            .filter(|o| o.id != id)
            .cloned()
            .collect();
        Self {
            objects: Arc::new(objects),
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn to_vec(&self) -> Vec<AnimationObject> {
        self.objects.as_ref().clone()
    }
}

impl serde::Serialize for Scene {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.objects.as_slice().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Scene {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let objects = Vec::<AnimationObject>::deserialize(deserializer)?;
        Self::from_objects(objects).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/list.rs"]
mod tests;
