mod cube_map;
mod image_texture;

pub use cube_map::{CubeFace, CubeMap, FaceFlip, FaceMapping, NEUTRAL_GRAY};
pub use image_texture::{ImageTexture, TexelFilter};

use crate::math::{Spectrum, Vec3};

/// Incoming radiance from infinitely far away, looked up by direction.
pub trait Environment: Send + Sync {
    /// Returns the radiance arriving from direction `d`. `d` doesn't need to be normalized.
    fn texel(&self, d: Vec3<f32>) -> Spectrum<f32>;
}

/// An environment with the same radiance in every direction.
pub struct ConstantEnvironment {
    value: Spectrum<f32>,
}

impl ConstantEnvironment {
    pub fn new(value: Spectrum<f32>) -> Self {
        Self { value }
    }
}

impl Environment for ConstantEnvironment {
    fn texel(&self, _d: Vec3<f32>) -> Spectrum<f32> {
        self.value
    }
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Decode(image::error::ImageError),
    Format(String),
    NotSquare {
        face: CubeFace,
        width: usize,
        height: usize,
    },
    MismatchedFaces {
        face: CubeFace,
        size: usize,
        expected: usize,
    },
    Face {
        face: CubeFace,
        source: Box<LoadError>,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(why) => write!(f, "IO error: {}", why),
            LoadError::Decode(why) => write!(f, "Decode error: {}", why),
            LoadError::Format(why) => write!(f, "Format error: {}", why),
            LoadError::NotSquare {
                face,
                width,
                height,
            } => write!(f, "Face '{}' is not square ({}x{})", face, width, height),
            LoadError::MismatchedFaces {
                face,
                size,
                expected,
            } => write!(
                f,
                "Face '{}' is {}px wide, expected {}px like the first face",
                face, size, expected
            ),
            LoadError::Face { face, source } => write!(f, "Face '{}': {}", face, source),
        }
    }
}

impl std::error::Error for LoadError {}
