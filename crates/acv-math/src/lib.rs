pub mod linsys;
pub mod period;

pub use glam::{dvec2, DVec2};
pub use nalgebra::DMatrix;
pub use period::Period;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
