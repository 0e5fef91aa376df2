pub mod approx_eq;
pub mod error;
pub mod transformation;

pub mod primitive {
    pub mod matrix;
    pub mod point;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod color;
    pub mod intersection;
    pub mod light;
    pub mod material;
    pub mod object;
    pub mod ray;
    pub mod world;
}
