use crate::{
    primitive::{point::Point, vector::Vector},
    render::{intersection::IntersectionCollector, ray::Ray},
};

use super::{cube::UnitCube, plane::PlaneXZ, sphere::UnitSphere};

/// Object-space geometry of a primitive.
/// Every variant supplies the local intersection and local normal hooks;
/// conversion between object and world space is done once, in [`super::Object`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Unit sphere at point zero
    Sphere,
    /// Plane extending in x and z directions, at y = 0
    Plane,
    /// Cube with sides of length 2, centered at origin
    Cube,
}

impl Shape {
    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        match self {
            Shape::Sphere => UnitSphere::local_normal_at(object_point),
            Shape::Plane => PlaneXZ::local_normal_at(),
            Shape::Cube => UnitCube::local_normal_at(object_point),
        }
    }

    pub fn local_intersect(&self, object_ray: &Ray, collector: &mut IntersectionCollector) {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(object_ray, collector),
            Shape::Plane => PlaneXZ::local_intersect(object_ray, collector),
            Shape::Cube => UnitCube::local_intersect(object_ray, collector),
        }
    }
}
