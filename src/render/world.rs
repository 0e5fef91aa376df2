use derive_builder::Builder;
use rayon::prelude::*;

use crate::{
    error::{RaytracerError, Result},
    primitive::{matrix::Matrix4, point::Point, tuple::Tuple},
};

use super::{
    color::Color,
    intersection::{self, IntersecComputations, Intersection, IntersectionCollector},
    light::{PointLightSource, lighting},
    material::Material,
    object::{Object, ObjectId, shape::Shape},
    ray::Ray,
};

/// Arena of objects plus at most one light.
/// Removing an object leaves its slot empty, so ids of the remaining objects stay valid.
#[derive(PartialEq, Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct World {
    #[builder(setter(custom))]
    #[builder(field(
        ty = "Vec<Object>",
        build = "self.objects.iter().cloned().map(Some).collect()"
    ))]
    objects: Vec<Option<Object>>,
    #[builder(setter(strip_option))]
    light_source: Option<PointLightSource>,
}

impl WorldBuilder {
    pub fn object(&mut self, object: Object) -> &mut Self {
        self.objects.push(object);
        self
    }

    pub fn objects(&mut self, objects: impl IntoIterator<Item = Object>) -> &mut Self {
        self.objects.extend(objects);
        self
    }
}

impl World {
    pub fn builder() -> WorldBuilder {
        WorldBuilder::default()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Two concentric spheres lit from the upper left front.
    pub fn default_world() -> Self {
        let outer = Object::with_shape_material(
            Shape::Sphere,
            Material {
                color: Color::new(0.8, 1.0, 0.6),
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            },
        );
        let inner = Object::with_transformation(Shape::Sphere, Matrix4::scaling_uniform(0.5))
            .expect("uniform scaling by 0.5 is invertible");

        let mut world = Self::empty();
        world.add_obj(outer);
        world.add_obj(inner);
        world.set_light_source(PointLightSource::new(
            Point::new(-10., 10., -10.),
            Color::white(),
        ));
        world
    }

    pub fn add_obj(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        tracing::debug!(%id, shape = ?object.shape(), "object added");
        self.objects.push(Some(object));
        id
    }

    pub fn remove_obj(&mut self, id: ObjectId) -> Result<Object> {
        let removed = self
            .objects
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(RaytracerError::UnknownObject(id))?;
        tracing::debug!(%id, "object removed");
        Ok(removed)
    }

    pub fn object(&self, id: ObjectId) -> Result<&Object> {
        self.objects
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(RaytracerError::UnknownObject(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object> {
        self.objects
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(RaytracerError::UnknownObject(id))
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.object(id).is_ok()
    }

    /// Live objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|obj| (ObjectId(index), obj)))
    }

    pub fn len(&self) -> usize {
        self.objects().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn light_source(&self) -> Option<&PointLightSource> {
        self.light_source.as_ref()
    }

    pub fn set_light_source(&mut self, light_source: PointLightSource) {
        tracing::debug!(position = ?light_source.position(), "light source set");
        self.light_source = Some(light_source);
    }

    pub fn clear_light_source(&mut self) -> Option<PointLightSource> {
        tracing::debug!("light source cleared");
        self.light_source.take()
    }

    /// All intersections of the ray with every object, sorted by time.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        let mut objects = self.objects();
        let Some((first_id, first)) = objects.next() else {
            return Vec::new();
        };

        let mut collector = IntersectionCollector::with_object(first_id);
        first.collect_intersections(ray, &mut collector);
        for (id, object) in objects {
            collector.set_object(id);
            object.collect_intersections(ray, &mut collector);
        }
        collector.into_sorted()
    }

    /// A point is shadowed when something lies strictly between it and the light.
    /// Without a light nothing is shadowed.
    pub fn is_shadowed(&self, point: Point) -> bool {
        let Some(light_source) = self.light_source() else {
            return false;
        };

        let v = light_source.position() - point;
        let distance = v.magnitude();
        let Ok(direction) = v.try_normalize() else {
            return false;
        };

        let intersections = self.intersect(&Ray::new(point, direction));
        match intersection::hit(&intersections) {
            None => false,
            Some(inter) => inter.time() < distance,
        }
    }

    pub fn prepare_hit<'a>(
        &'a self,
        intersection: &Intersection,
        ray: &Ray,
    ) -> Result<IntersecComputations<'a>> {
        let object = self.object(intersection.object())?;
        Ok(IntersecComputations::new(intersection, ray, object))
    }

    pub fn hit_computations(&self, ray: &Ray) -> Option<IntersecComputations<'_>> {
        let intersections = self.intersect(ray);
        let hit = intersection::hit(&intersections)?;
        // ids come from this world, so they always resolve
        self.prepare_hit(hit, ray).ok()
    }

    /// Color of a prepared hit, or `None` when there is no light to shade with.
    pub fn shade_hit(&self, hit_comps: &IntersecComputations) -> Option<Color> {
        let Some(light_source) = self.light_source() else {
            tracing::warn!(object = %hit_comps.object_id(), "shading requested without a light source");
            return None;
        };

        let in_shadow = self.is_shadowed(hit_comps.over_point());
        Some(lighting(
            hit_comps.object().material(),
            light_source,
            hit_comps.point(),
            hit_comps.eye_v(),
            hit_comps.normal_v(),
            in_shadow,
        ))
    }

    pub fn color_at(&self, ray: &Ray) -> Color {
        let color = self
            .hit_computations(ray)
            .and_then(|hit_comps| self.shade_hit(&hit_comps))
            .unwrap_or_else(Color::black);
        tracing::trace!(origin = ?ray.origin(), direction = ?ray.direction(), ?color, "ray shaded");
        color
    }

    /// Shades rays in parallel. The result is in the same order as `rays`.
    pub fn color_at_many(&self, rays: &[Ray]) -> Vec<Color> {
        rays.par_iter().map(|ray| self.color_at(ray)).collect()
    }
}
