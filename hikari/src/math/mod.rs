#[macro_use]
mod ops;

mod bounds;
mod common;
mod frame;
mod point;
mod ray;
mod spectrum;
mod vector;

pub use bounds::Bounds2;
pub use common::{lerp, saturate, FloatValueType, ValueType};
pub use frame::{Frame, FrameHelper};
pub use point::Point3;
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::{vec2, vec3, Vec2, Vec3};
