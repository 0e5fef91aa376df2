use crate::{
    primitive::{point::Point, vector::Vector},
    render::{intersection::IntersectionCollector, ray::Ray},
};

pub struct UnitSphere {}

impl UnitSphere {
    pub fn local_normal_at(object_point: Point) -> Vector {
        object_point - Point::zero()
    }

    pub fn local_intersect(object_ray: &Ray, collector: &mut IntersectionCollector) {
        let vector_sphere_to_ray = *object_ray.origin() - Point::zero();

        let a = object_ray.direction().dot(*object_ray.direction());
        let b = 2. * object_ray.direction().dot(vector_sphere_to_ray);
        let c = vector_sphere_to_ray.dot(vector_sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return;
        }

        let delta_sqrt = discriminant.sqrt();
        collector.add((-b - delta_sqrt) / (2. * a));
        collector.add((-b + delta_sqrt) / (2. * a));
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use crate::{
        assert_approx_eq_low_prec,
        primitive::{matrix::Matrix4, point::Point, tuple::Tuple, vector::Vector},
        render::{
            object::{Object, shape::Shape},
            ray::Ray,
        },
    };

    #[test]
    fn ray_intersects_sphere_at_two_points() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);

        assert_eq!(obj.intersection_times(&ray), vec![4., 6.]);
    }

    #[test]
    fn ray_intersects_sphere_at_tangent() {
        let ray = Ray::new(Point::new(0., 1., -5.), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);

        assert_eq!(obj.intersection_times(&ray), vec![5., 5.]);
    }

    #[test]
    fn ray_misses_sphere() {
        let ray = Ray::new(Point::new(0., 2., -5.), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);

        assert!(obj.intersection_times(&ray).is_empty());
    }

    #[test]
    fn ray_originates_inside_sphere() {
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);

        assert_eq!(obj.intersection_times(&ray), vec![-1., 1.]);
    }

    #[test]
    fn sphere_behind_ray() {
        let ray = Ray::new(Point::new(0., 0., 5.), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);

        assert_eq!(obj.intersection_times(&ray), vec![-6., -4.]);
    }

    #[test]
    fn intersect_scaled_sphere() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let obj =
            Object::with_transformation(Shape::Sphere, Matrix4::scaling_uniform(2.)).unwrap();

        assert_eq!(obj.intersection_times(&ray), vec![3., 7.]);
    }

    #[test]
    fn intersect_translated_sphere() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let obj =
            Object::with_transformation(Shape::Sphere, Matrix4::translation(5., 0., 0.)).unwrap();

        assert!(obj.intersection_times(&ray).is_empty());
    }

    #[test]
    fn normal_on_sphere_axes() {
        let sphere_obj = Object::with_shape(Shape::Sphere);

        for v in [
            Vector::new(1., 0., 0.),
            Vector::new(0., 1., 0.),
            Vector::new(0., 0., 1.),
        ] {
            let p = Point::zero() + v;
            assert_approx_eq_low_prec!(sphere_obj.normal_vector_at(p), v);
        }
    }

    #[test]
    fn normal_on_sphere_at_nonaxial_point_is_normalized() {
        let sphere_obj = Object::with_shape(Shape::Sphere);

        let frac_sqrt_3_3 = 3_f64.sqrt() / 3.;
        let normal =
            sphere_obj.normal_vector_at(Point::new(frac_sqrt_3_3, frac_sqrt_3_3, frac_sqrt_3_3));
        assert_approx_eq_low_prec!(normal, Vector::new(frac_sqrt_3_3, frac_sqrt_3_3, frac_sqrt_3_3));
        assert_approx_eq_low_prec!(normal, normal.normalize());
    }

    #[test]
    fn compute_normal_on_translated_sphere() {
        let sphere_obj =
            Object::with_transformation(Shape::Sphere, Matrix4::translation(0., 1., 0.)).unwrap();
        assert_approx_eq_low_prec!(
            sphere_obj.normal_vector_at(Point::new(0., 1. + FRAC_1_SQRT_2, -FRAC_1_SQRT_2)),
            Vector::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2)
        );
    }

    #[test]
    fn compute_normal_on_transformed_sphere() {
        let sphere_obj = Object::with_transformation(
            Shape::Sphere,
            Matrix4::scaling(1., 0.5, 1.) * Matrix4::rotation_z(PI / 5.),
        )
        .unwrap();
        assert_approx_eq_low_prec!(
            sphere_obj.normal_vector_at(Point::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2)),
            Vector::new(0., 0.97014, -0.24254)
        );
    }
}
