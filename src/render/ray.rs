use crate::{
    primitive::{matrix::Matrix4, point::Point, vector::Vector},
    transformation::Transform,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Transform for Ray {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = Self::new(matrix * self.origin, matrix * self.direction);
    }
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, time: f64) -> Point {
        self.origin + self.direction * time
    }
    pub fn origin(&self) -> &Point {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
