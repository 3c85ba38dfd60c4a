use bitflags::bitflags;
use std::path::Path;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::{Environment, ImageTexture, LoadError, TexelFilter};
use crate::{
    hikari_debug, hikari_warn,
    math::{Spectrum, Vec3},
};

/// Returned for lookups that land on a face without image data.
pub const NEUTRAL_GRAY: Spectrum<f32> = Spectrum {
    r: 0.5,
    g: 0.5,
    b: 0.5,
};

/// The six faces of a [CubeMap]. Displays as the file suffix of the face image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CubeFace {
    PosX,
    PosY,
    PosZ,
    NegX,
    NegY,
    NegZ,
}

bitflags! {
    /// Mirroring applied to face coordinates after projection.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct FaceFlip: u8 {
        const U = 0b01;
        const V = 0b10;
    }
}

/// How a direction is projected onto a face.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceMapping {
    /// Direction component that becomes u
    pub u_axis: usize,
    /// Direction component that becomes v
    pub v_axis: usize,
    pub flip: FaceFlip,
}

// Indexed by CubeFace. The flips keep the faces of the reference unwraps seamless.
const FACE_MAPPINGS: [FaceMapping; 6] = [
    // +X
    FaceMapping {
        u_axis: 1,
        v_axis: 2,
        flip: FaceFlip::U,
    },
    // +Y
    FaceMapping {
        u_axis: 0,
        v_axis: 2,
        flip: FaceFlip::empty(),
    },
    // +Z
    FaceMapping {
        u_axis: 0,
        v_axis: 1,
        flip: FaceFlip::V,
    },
    // -X
    FaceMapping {
        u_axis: 1,
        v_axis: 2,
        flip: FaceFlip::empty(),
    },
    // -Y
    FaceMapping {
        u_axis: 0,
        v_axis: 2,
        flip: FaceFlip::U,
    },
    // -Z
    FaceMapping {
        u_axis: 0,
        v_axis: 1,
        flip: FaceFlip::empty(),
    },
];

impl CubeFace {
    /// Returns the face for the `axis` (0 = x, 1 = y, 2 = z) in the given direction.
    pub fn from_axis(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, true) => CubeFace::PosX,
            (1, true) => CubeFace::PosY,
            (2, true) => CubeFace::PosZ,
            (0, false) => CubeFace::NegX,
            (1, false) => CubeFace::NegY,
            (2, false) => CubeFace::NegZ,
            _ => panic!("Invalid cube axis {}", axis),
        }
    }

    /// Returns the face hit by `d` along with the index of the dominant axis.
    ///
    /// The dominant axis is the one with the largest magnitude, ties going to
    /// the lower index (x, then y, then z).
    pub fn from_direction(d: Vec3<f32>) -> (Self, usize) {
        let axis = d.abs().max_dimension();
        (Self::from_axis(axis, d[axis] > 0.0), axis)
    }

    pub fn mapping(self) -> FaceMapping {
        FACE_MAPPINGS[self as usize]
    }

    /// Projects `d` onto this face, returning `(u, v)` in `[0, 1]`.
    ///
    /// `axis` is the dominant axis of `d`.
    pub fn project(self, d: Vec3<f32>, axis: usize) -> (f32, f32) {
        let FaceMapping {
            u_axis,
            v_axis,
            flip,
        } = self.mapping();

        let major = d[axis].abs();
        let mut u = (d[u_axis] / major + 1.0) * 0.5;
        let mut v = (d[v_axis] / major + 1.0) * 0.5;
        if flip.contains(FaceFlip::U) {
            u = 1.0 - u;
        }
        if flip.contains(FaceFlip::V) {
            v = 1.0 - v;
        }

        (u.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
    }
}

/// Environment backed by six square face images.
pub struct CubeMap {
    // Indexed by CubeFace
    faces: [Option<ImageTexture>; 6],
    filter: TexelFilter,
}

impl CubeMap {
    /// Creates a `CubeMap` from faces in [CubeFace] order. Missing faces evaluate to [NEUTRAL_GRAY].
    pub fn from_faces(faces: [Option<ImageTexture>; 6], filter: TexelFilter) -> Self {
        Self { faces, filter }
    }

    /// Creates a `CubeMap` where every texel is `value`.
    pub fn constant(value: Spectrum<f32>) -> Self {
        let face = || Some(ImageTexture::from_texels(1, 1, vec![value]));
        Self::from_faces(
            [face(), face(), face(), face(), face(), face()],
            TexelFilter::Nearest,
        )
    }

    /// Loads `<dir>/<face>.<extension>` for all six faces.
    ///
    /// Fails if any face is missing, is not square or doesn't match the size of the others.
    pub fn load(dir: &Path, extension: &str, filter: TexelFilter) -> Result<Self, LoadError> {
        let mut faces: [Option<ImageTexture>; 6] = Default::default();
        let mut expected_size = None;

        for face in CubeFace::iter() {
            let img = ImageTexture::new(&face_path(dir, face, extension)).map_err(|why| {
                LoadError::Face {
                    face,
                    source: Box::new(why),
                }
            })?;

            if img.width() != img.height() {
                return Err(LoadError::NotSquare {
                    face,
                    width: img.width(),
                    height: img.height(),
                });
            }
            let expected = *expected_size.get_or_insert(img.width());
            if img.width() != expected {
                return Err(LoadError::MismatchedFaces {
                    face,
                    size: img.width(),
                    expected,
                });
            }

            hikari_debug!("Loaded cube face '{}' ({}px)", face, img.width());
            faces[face as usize] = Some(img);
        }

        Ok(Self::from_faces(faces, filter))
    }

    /// Like [CubeMap::load] but faces that fail to load are left empty and logged.
    pub fn load_lenient(dir: &Path, extension: &str, filter: TexelFilter) -> Self {
        let mut faces: [Option<ImageTexture>; 6] = Default::default();

        for face in CubeFace::iter() {
            match ImageTexture::new(&face_path(dir, face, extension)) {
                Ok(img) => {
                    if img.width() != img.height() {
                        hikari_warn!(
                            "Cube face '{}' is not square ({}x{})",
                            face,
                            img.width(),
                            img.height()
                        );
                    }
                    faces[face as usize] = Some(img);
                }
                Err(why) => {
                    hikari_warn!("Cube face '{}' failed to load, using gray: {}", face, why);
                }
            }
        }

        Self::from_faces(faces, filter)
    }

    /// Returns `true` if every face has image data.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(Option::is_some)
    }
}

impl Environment for CubeMap {
    fn texel(&self, d: Vec3<f32>) -> Spectrum<f32> {
        if d.has_nans() {
            return NEUTRAL_GRAY;
        }
        // Squared length underflows for tiny directions, the projection only needs the dominant axis
        let dominant = d.abs().max_comp();
        debug_assert!(dominant > 0.0, "Cube map lookup with a zero direction");
        if dominant == 0.0 {
            return NEUTRAL_GRAY;
        }

        let (face, axis) = CubeFace::from_direction(d);
        let (u, v) = face.project(d, axis);

        match &self.faces[face as usize] {
            Some(img) => img.lookup(u, v, self.filter),
            None => NEUTRAL_GRAY,
        }
    }
}

fn face_path(dir: &Path, face: CubeFace, extension: &str) -> std::path::PathBuf {
    dir.join(format!("{}.{}", face, extension))
}
