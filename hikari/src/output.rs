use std::path::{Path, PathBuf};

use crate::{film::Film, hikari_info};

/// Returns `<name>_<YYYYMMDD_HHMMSS>.exr` in the current working directory.
pub fn default_output_path(name: &str) -> Result<PathBuf, String> {
    match std::env::current_dir() {
        Ok(mut path) => {
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            path.push(format!("{}_{}.exr", name, timestamp));
            Ok(path)
        }
        Err(why) => Err(format!(
            "Error getting current working directory: {:?}",
            why
        )),
    }
}

/// Writes `film` to `path`, picking the format from the extension.
pub fn write_image(path: &Path, film: &Film) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("exr") => write_exr(path, film),
        Some("png") => write_png(path, film),
        Some(ext) => Err(format!("Unknown output extension '{}'", ext)),
        None => Err(format!(
            "Expected an output file with an extension, got '{}'",
            path.to_string_lossy()
        )),
    }
}

/// Writes linear radiance as-is.
pub fn write_exr(path: &Path, film: &Film) -> Result<(), String> {
    hikari_info!("Writing out EXR");
    let width = film.res().x as usize;
    let height = film.res().y as usize;
    let pixels = film.pixels();

    match exr::prelude::write_rgb_file(path, width, height, |x, y| {
        let px = pixels[y * width + x];
        (px.r, px.g, px.b)
    }) {
        Ok(_) => {
            hikari_info!("EXR written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing EXR to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}

/// Writes radiance clamped to `[0,1]` and quantized to 8 bits.
pub fn write_png(path: &Path, film: &Film) -> Result<(), String> {
    hikari_info!("Writing out PNG");
    let res = film.res();

    let img = image::RgbImage::from_fn(res.x as u32, res.y as u32, |x, y| {
        let px = film.pixel(x as u16, y as u16).saturated();
        image::Rgb([to_u8(px.r), to_u8(px.g), to_u8(px.b)])
    });

    match img.save(path) {
        Ok(_) => {
            hikari_info!("PNG written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing PNG to '{}': {}",
            path.to_string_lossy(),
            why
        )),
    }
}

fn to_u8(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::{default_output_path, write_image};
    use crate::{
        film::{Film, FilmTile},
        math::{Bounds2, Spectrum, Vec2},
    };

    fn gradient_film() -> Film {
        let res = Vec2::new(4, 2);
        let mut film = Film::new(res);
        let mut tile = FilmTile::new(Bounds2::new(Vec2::zeros(), res), 0);
        for (i, px) in tile.pixels.iter_mut().enumerate() {
            *px = Spectrum::new(i as f32 / 4.0, 0.5, 2.0);
        }
        film.update_tile(&tile);
        film
    }

    #[test]
    fn png_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_image(&path, &gradient_film()).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 128, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [128, 128, 255]);
        // 7 / 4 saturates
        assert_eq!(img.get_pixel(3, 1).0, [255, 128, 255]);
    }

    #[test]
    fn exr_keeps_hdr_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.exr");
        write_image(&path, &gradient_film()).unwrap();

        let img = image::open(&path).unwrap().to_rgb32f();
        assert_eq!(img.dimensions(), (4, 2));
        let px = img.get_pixel(3, 1).0;
        assert!((px[0] - 1.75).abs() < 1e-3);
        assert!((px[2] - 2.0).abs() < 1e-3);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_image(&dir.path().join("out.bmp"), &gradient_film()).is_err());
        assert!(write_image(&dir.path().join("out"), &gradient_film()).is_err());
    }

    #[test]
    fn default_path_is_timestamped() {
        let path = default_output_path("gold").unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("gold_"));
        assert!(name.ends_with(".exr"));
        // gold_YYYYMMDD_HHMMSS.exr
        assert_eq!(name.len(), "gold_".len() + 15 + ".exr".len());
    }
}
