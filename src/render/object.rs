pub mod cube;
pub mod plane;
pub mod shape;
pub mod sphere;

use std::fmt;

use crate::{
    error::Result,
    primitive::{matrix::Matrix4, point::Point, vector::Vector},
    transformation::Transform,
};

use super::{
    intersection::{Intersection, IntersectionCollector},
    material::Material,
    ray::Ray,
};
use shape::Shape;

/// Stable handle of an object stored in a [`super::world::World`].
/// Ids are never reused, so an id outlives the removal of other objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape placed in the world: object-to-world transformation plus material.
/// The inverse and its transpose are computed once, whenever the transformation changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    shape: Shape,
    material: Material,
    transformation: Matrix4,
    transformation_inverse: Matrix4,
    transformation_inverse_transpose: Matrix4,
}

impl Object {
    pub fn new(shape: Shape, material: Material, transformation: Matrix4) -> Result<Self> {
        let transformation_inverse = transformation.inverse()?;
        Ok(Self {
            shape,
            material,
            transformation,
            transformation_inverse,
            transformation_inverse_transpose: transformation_inverse.transpose(),
        })
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::with_shape_material(shape, Material::default())
    }

    pub fn with_shape_material(shape: Shape, material: Material) -> Self {
        let identity = Matrix4::identity();
        Self {
            shape,
            material,
            transformation: identity,
            transformation_inverse: identity,
            transformation_inverse_transpose: identity,
        }
    }

    pub fn with_transformation(shape: Shape, transformation: Matrix4) -> Result<Self> {
        Self::new(shape, Material::default(), transformation)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn transformation(&self) -> &Matrix4 {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix4 {
        &self.transformation_inverse
    }

    /// Replaces the transformation. A singular matrix is rejected and the object is left untouched.
    pub fn set_transformation(&mut self, transformation: Matrix4) -> Result<()> {
        let transformation_inverse = transformation.inverse().inspect_err(|err| {
            tracing::debug!(%err, shape = ?self.shape, "rejected singular transformation");
        })?;

        self.transformation = transformation;
        self.transformation_inverse = transformation_inverse;
        self.transformation_inverse_transpose = transformation_inverse.transpose();
        Ok(())
    }

    /// Applies `matrix` after the current transformation.
    pub fn transform_by(&mut self, matrix: &Matrix4) -> Result<()> {
        self.set_transformation(self.transformation.transform_new(matrix))
    }

    pub fn collect_intersections(&self, ray: &Ray, collector: &mut IntersectionCollector) {
        let object_ray = ray.transform_new(&self.transformation_inverse);
        self.shape.local_intersect(&object_ray, collector);
    }

    /// Intersections of a world-space ray with this object, sorted by time.
    pub fn intersect(&self, id: ObjectId, ray: &Ray) -> Vec<Intersection> {
        let mut collector = IntersectionCollector::with_object(id);
        self.collect_intersections(ray, &mut collector);
        collector.into_sorted()
    }

    pub fn intersection_times(&self, ray: &Ray) -> Vec<f64> {
        self.intersect(ObjectId(0), ray)
            .into_iter()
            .map(|inter| inter.time())
            .collect()
    }

    pub fn normal_vector_at(&self, world_point: Point) -> Vector {
        let object_point = &self.transformation_inverse * world_point;
        let object_normal = self.shape.local_normal_at(object_point);

        (&self.transformation_inverse_transpose * object_normal).normalize()
    }
}
