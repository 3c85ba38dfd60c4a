use crate::math::{lerp, Spectrum};

use image::io::Reader as ImageReader;
use serde::{Deserialize, Serialize};
use std::{io::Cursor, path::Path};

use super::LoadError;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Texture/Image_Texture

macro_rules! load_spectrum_image {
    ($data:expr, $ib:expr, $max:expr) => {
        for p in $ib.pixels() {
            $data.push(Spectrum::new(
                (p[0] as f32) / $max,
                (p[1] as f32) / $max,
                (p[2] as f32) / $max,
            ));
        }
    };
}

macro_rules! load_luma_image {
    ($data:expr, $ib:expr, $max:expr) => {
        for p in $ib.pixels() {
            $data.push(Spectrum::from((p[0] as f32) / $max));
        }
    };
}

/// How texels are reconstructed between texel centers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TexelFilter {
    #[default]
    Nearest,
    Bilinear,
}

/// RGB image with lookups in normalized `[0,1]²` coordinates.
///
/// `v = 0` is the first row of the stored image. Alpha is dropped on load.
#[derive(Clone, Debug)]
pub struct ImageTexture {
    data: Vec<Spectrum<f32>>,
    width: usize,
    height: usize,
}

impl ImageTexture {
    /// Loads an image from `path`.
    pub fn new(path: &Path) -> Result<Self, LoadError> {
        let img = ImageReader::open(path).map_err(LoadError::Io)?;

        load_image_spectrum_f32(img)
    }

    /// Decodes an image from in-memory file contents.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(LoadError::Io)?;

        load_image_spectrum_f32(img)
    }

    /// Creates a texture from row-major texel values.
    pub fn from_texels(width: usize, height: usize, data: Vec<Spectrum<f32>>) -> Self {
        assert!(width > 0 && height > 0);
        assert_eq!(data.len(), width * height);

        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn texel(&self, x: usize, y: usize) -> Spectrum<f32> {
        self.data[y * self.width + x]
    }

    /// Looks up the texture at `(u, v)`. Coordinates outside `[0,1]` are clamped to the edge texels.
    pub fn lookup(&self, u: f32, v: f32, filter: TexelFilter) -> Spectrum<f32> {
        let u = if u.is_nan() { 0.5 } else { u.clamp(0.0, 1.0) };
        let v = if v.is_nan() { 0.5 } else { v.clamp(0.0, 1.0) };
        let max_x = self.width - 1;
        let max_y = self.height - 1;

        match filter {
            TexelFilter::Nearest => {
                let x = ((u * self.width as f32) as usize).min(max_x);
                let y = ((v * self.height as f32) as usize).min(max_y);
                self.texel(x, y)
            }
            TexelFilter::Bilinear => {
                let x = (u * self.width as f32 - 0.5).max(0.0);
                let y = (v * self.height as f32 - 0.5).max(0.0);
                let x0 = (x as usize).min(max_x);
                let y0 = (y as usize).min(max_y);
                let x1 = (x0 + 1).min(max_x);
                let y1 = (y0 + 1).min(max_y);
                let dx = (x - x0 as f32).clamp(0.0, 1.0);
                let dy = (y - y0 as f32).clamp(0.0, 1.0);

                let top = lerp(self.texel(x0, y0), self.texel(x1, y0), dx);
                let bottom = lerp(self.texel(x0, y1), self.texel(x1, y1), dx);
                lerp(top, bottom, dy)
            }
        }
    }
}

fn load_image_spectrum_f32<R: std::io::BufRead + std::io::Seek>(
    img_reader: ImageReader<R>,
) -> Result<ImageTexture, LoadError> {
    let img = img_reader.decode().map_err(LoadError::Decode)?;

    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut data = Vec::with_capacity(width * height);
    match img {
        image::DynamicImage::ImageLuma8(ib) => load_luma_image!(data, ib, u8::MAX as f32),
        image::DynamicImage::ImageLuma16(ib) => load_luma_image!(data, ib, u16::MAX as f32),
        image::DynamicImage::ImageRgb8(ib) => load_spectrum_image!(data, ib, u8::MAX as f32),
        image::DynamicImage::ImageRgba8(ib) => load_spectrum_image!(data, ib, u8::MAX as f32),
        image::DynamicImage::ImageRgb16(ib) => load_spectrum_image!(data, ib, u16::MAX as f32),
        image::DynamicImage::ImageRgba16(ib) => load_spectrum_image!(data, ib, u16::MAX as f32),
        image::DynamicImage::ImageRgb32F(ib) => load_spectrum_image!(data, ib, 1.0f32),
        image::DynamicImage::ImageRgba32F(ib) => load_spectrum_image!(data, ib, 1.0f32),
        _ => return Err(LoadError::Format("Unsupported image format".to_string())),
    }

    if width == 0 || height == 0 {
        return Err(LoadError::Format("Empty image".to_string()));
    }

    Ok(ImageTexture {
        data,
        width,
        height,
    })
}
