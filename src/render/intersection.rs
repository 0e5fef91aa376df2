use std::cmp::Ordering;

use crate::{
    approx_eq::EPSILON,
    primitive::{point::Point, vector::Vector},
};

use super::{
    object::{Object, ObjectId},
    ray::Ray,
};

/// Ray parameter paired with the id of the object struck there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    time: f64,
    object: ObjectId,
}

impl Intersection {
    pub fn new(time: f64, object: ObjectId) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }
}

/// Gathers intersection times reported by shapes and tags them with the id of
/// the object currently being tested.
#[derive(Debug)]
pub struct IntersectionCollector {
    object: ObjectId,
    vec: Vec<Intersection>,
}

impl IntersectionCollector {
    pub fn with_object(object: ObjectId) -> Self {
        Self {
            object,
            vec: Vec::new(),
        }
    }

    pub fn set_object(&mut self, object: ObjectId) {
        self.object = object;
    }

    pub fn add(&mut self, time: f64) {
        self.vec.push(Intersection::new(time, self.object));
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Stable sort, so intersections with equal times keep the order they were reported in.
    pub fn into_sorted(mut self) -> Vec<Intersection> {
        sort_by_time(&mut self.vec);
        self.vec
    }
}

pub fn sort_by_time(intersections: &mut [Intersection]) {
    intersections.sort_by(|i1, i2| {
        i1.time()
            .partial_cmp(&i2.time())
            .unwrap_or(Ordering::Equal)
    });
}

/// Visible intersection: the one with the smallest non-negative time.
/// The input does not have to be sorted. On equal times the one that comes first wins.
pub fn hit(intersections: &[Intersection]) -> Option<&Intersection> {
    intersections
        .iter()
        .filter(|inter| inter.time() >= 0.)
        .fold(None, |best: Option<&Intersection>, inter| match best {
            Some(best) if best.time() <= inter.time() => Some(best),
            _ => Some(inter),
        })
}

/// Everything shading needs to know about a hit, in world space.
#[derive(Debug)]
pub struct IntersecComputations<'a> {
    object: &'a Object,
    object_id: ObjectId,
    time: f64,
    point: Point,
    over_point: Point,
    eye_v: Vector,
    normal_v: Vector,
    inside_obj: bool,
}

impl<'a> IntersecComputations<'a> {
    pub fn new(intersection: &Intersection, ray: &Ray, object: &'a Object) -> Self {
        let time = intersection.time();
        let point = ray.position(time);
        let eye_v = -*ray.direction();
        let mut normal_v = object.normal_vector_at(point);

        let inside_obj = normal_v.dot(eye_v) < 0.;
        if inside_obj {
            normal_v = -normal_v;
        }
        let over_point = point + normal_v * EPSILON;

        Self {
            object,
            object_id: intersection.object(),
            time,
            point,
            over_point,
            eye_v,
            normal_v,
            inside_obj,
        }
    }

    pub fn object(&self) -> &'a Object {
        self.object
    }
    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }
    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn over_point(&self) -> Point {
        self.over_point
    }
    pub fn eye_v(&self) -> Vector {
        self.eye_v
    }
    pub fn normal_v(&self) -> Vector {
        self.normal_v
    }
    pub fn inside_obj(&self) -> bool {
        self.inside_obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        primitive::{matrix::Matrix4, tuple::Tuple},
        render::object::shape::Shape,
    };

    fn id() -> ObjectId {
        ObjectId(0)
    }

    #[test]
    fn intersection_has_time_and_object() {
        let inter = Intersection::new(3.5, ObjectId(2));
        assert_eq!(inter.time(), 3.5);
        assert_eq!(inter.object(), ObjectId(2));
    }

    #[test]
    fn collector_tags_times_with_current_object() {
        let mut collector = IntersectionCollector::with_object(ObjectId(1));
        collector.add(2.);
        collector.set_object(ObjectId(3));
        collector.add(-1.);

        assert_eq!(
            collector.into_sorted(),
            vec![
                Intersection::new(-1., ObjectId(3)),
                Intersection::new(2., ObjectId(1))
            ]
        );
    }

    #[test]
    fn hit_when_all_intersections_have_positive_time() {
        let intersections = [Intersection::new(1., id()), Intersection::new(2., id())];
        assert_eq!(hit(&intersections), Some(&intersections[0]));
    }

    #[test]
    fn hit_when_some_intersections_have_negative_time() {
        let intersections = [Intersection::new(-1., id()), Intersection::new(1., id())];
        assert_eq!(hit(&intersections), Some(&intersections[1]));
    }

    #[test]
    fn hit_when_all_intersections_have_negative_time() {
        let intersections = [Intersection::new(-2., id()), Intersection::new(-1., id())];
        assert_eq!(hit(&intersections), None);
    }

    #[test]
    fn hit_is_lowest_nonnegative_intersection_of_unsorted_input() {
        let intersections = [
            Intersection::new(5., id()),
            Intersection::new(7., id()),
            Intersection::new(-3., id()),
            Intersection::new(2., id()),
        ];
        assert_eq!(hit(&intersections), Some(&intersections[3]));
    }

    #[test]
    fn hit_at_zero_time_counts() {
        let intersections = [Intersection::new(0., id()), Intersection::new(1., id())];
        assert_eq!(hit(&intersections), Some(&intersections[0]));
    }

    #[test]
    fn hit_tie_picks_first_in_input_order() {
        let intersections = [
            Intersection::new(1., ObjectId(4)),
            Intersection::new(1., ObjectId(9)),
        ];
        assert_eq!(hit(&intersections).map(|i| i.object()), Some(ObjectId(4)));
    }

    #[test]
    fn hit_of_empty_list() {
        assert_eq!(hit(&[]), None);
    }

    #[test]
    fn precomputing_state_of_intersection() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);
        let inter = Intersection::new(4., id());

        let comps = IntersecComputations::new(&inter, &ray, &obj);

        assert_eq!(comps.time(), 4.);
        assert_eq!(comps.object_id(), id());
        assert_eq!(comps.point(), Point::new(0., 0., -1.));
        assert_eq!(comps.eye_v(), Vector::new(0., 0., -1.));
        assert_eq!(comps.normal_v(), Vector::new(0., 0., -1.));
        assert!(!comps.inside_obj());
    }

    #[test]
    fn hit_occurs_on_inside() {
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        let obj = Object::with_shape(Shape::Sphere);
        let inter = Intersection::new(1., id());

        let comps = IntersecComputations::new(&inter, &ray, &obj);

        assert_eq!(comps.point(), Point::new(0., 0., 1.));
        assert_eq!(comps.eye_v(), Vector::new(0., 0., -1.));
        assert!(comps.inside_obj());
        // normal is inverted to face the eye
        assert_eq!(comps.normal_v(), Vector::new(0., 0., -1.));
    }

    #[test]
    fn hit_offsets_over_point() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let obj =
            Object::with_transformation(Shape::Sphere, Matrix4::translation(0., 0., 1.)).unwrap();
        let inter = Intersection::new(5., id());

        let comps = IntersecComputations::new(&inter, &ray, &obj);

        assert!(comps.over_point().z() < -EPSILON / 2.);
        assert!(comps.point().z() > comps.over_point().z());
        assert_approx_eq_low_prec!(comps.point().z() - comps.over_point().z(), EPSILON);
    }
}
