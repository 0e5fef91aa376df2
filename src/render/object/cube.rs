use crate::{
    approx_eq::EPSILON,
    primitive::{
        point::Point,
        tuple::{Axis, Tuple},
        vector::Vector,
    },
    render::{intersection::IntersectionCollector, ray::Ray},
};

pub struct UnitCube {}

impl UnitCube {
    pub fn local_normal_at(object_point: Point) -> Vector {
        let abs_x = object_point.x().abs();
        let abs_y = object_point.y().abs();
        let abs_z = object_point.z().abs();

        let max_abs = abs_x.max(abs_y).max(abs_z);
        if max_abs == abs_x {
            Vector::new(object_point.x(), 0., 0.)
        } else if max_abs == abs_y {
            Vector::new(0., object_point.y(), 0.)
        } else {
            Vector::new(0., 0., object_point.z())
        }
    }

    fn check_axis(origin: f64, direction: f64) -> (f64, f64) {
        let tmin_numerator = -1. - origin;
        let tmax_numerator = 1. - origin;

        let (tmin, tmax) = if direction.abs() >= EPSILON {
            (tmin_numerator / direction, tmax_numerator / direction)
        } else {
            (
                tmin_numerator * f64::INFINITY,
                tmax_numerator * f64::INFINITY,
            )
        };

        if tmin > tmax { (tmax, tmin) } else { (tmin, tmax) }
    }

    pub fn local_intersect(object_ray: &Ray, collector: &mut IntersectionCollector) {
        let (mut tmin, mut tmax) = (f64::NEG_INFINITY, f64::INFINITY);

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (axis_tmin, axis_tmax) =
                Self::check_axis(object_ray.origin()[axis], object_ray.direction()[axis]);
            tmin = tmin.max(axis_tmin);
            tmax = tmax.min(axis_tmax);
        }

        if tmin > tmax {
            return;
        }
        collector.add(tmin);
        collector.add(tmax);
    }
}
