use crate::{
    primitive::{tuple::Tuple, vector::Vector},
    render::{intersection::IntersectionCollector, ray::Ray},
};

pub struct PlaneXZ {}

impl PlaneXZ {
    /// Rays whose direction has a smaller y component are treated as parallel.
    pub const PARALLEL_EPSILON: f64 = 1.0e-4;

    pub fn local_normal_at() -> Vector {
        Vector::new(0., 1., 0.)
    }

    // A ray lying inside the plane is reported as a miss too, not as infinitely many hits.
    pub fn local_intersect(object_ray: &Ray, collector: &mut IntersectionCollector) {
        let parallel = object_ray.direction().y().abs() < Self::PARALLEL_EPSILON;
        if parallel {
            return;
        }
        collector.add(-object_ray.origin().y() / object_ray.direction().y());
    }
}
