use crate::render::object::ObjectId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RaytracerError {
    /// The matrix has no inverse, so it cannot place an object in the world.
    #[error("matrix is singular (determinant {determinant}) and cannot be inverted")]
    SingularMatrix { determinant: f64 },
    #[error("cannot normalize a vector of zero length")]
    DegenerateVector,
    #[error("no object with id {0} in the world")]
    UnknownObject(ObjectId),
}

pub type Result<T> = std::result::Result<T, RaytracerError>;
