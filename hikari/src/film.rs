use serde::{Deserialize, Serialize};

use crate::{
    hikari_error,
    math::{Bounds2, Spectrum, Vec2},
};

/// The settings for a `Film`.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilmSettings {
    /// The total film resolution.
    pub res: Vec2<u16>,
    /// The height of the row bands the film is rendered in.
    pub tile_rows: u16,
}

impl Default for FilmSettings {
    /// Creates a new `FilmSettings` with `res` [640, 480] and 8 row bands.
    fn default() -> Self {
        Self {
            res: Vec2::new(640, 480),
            tile_rows: 8,
        }
    }
}

/// A film tile used for rendering.
#[derive(Debug, Clone)]
pub struct FilmTile {
    /// The [Film] pixel bounds for this tile.
    pub bb: Bounds2<u16>,
    /// Index of this tile in render order. Picks the prng stream for the tile.
    pub index: usize,
    /// Pixel values in this tile stored in row-major order.
    pub pixels: Vec<Spectrum<f32>>,
}

impl FilmTile {
    /// Creates a new `FilmTile` with the given [Bounds2].
    pub fn new(bb: Bounds2<u16>, index: usize) -> Self {
        FilmTile {
            bb,
            index,
            pixels: vec![Spectrum::zeros(); (bb.width() as usize) * (bb.height() as usize)],
        }
    }
}

/// Pixel buffer filled through [FilmTile]s.
pub struct Film {
    res: Vec2<u16>,
    // Row-major
    pixels: Vec<Spectrum<f32>>,
}

impl Film {
    /// Creates a black `Film` of resolution `res`.
    pub fn new(res: Vec2<u16>) -> Self {
        Self {
            res,
            pixels: vec![Spectrum::zeros(); (res.x as usize) * (res.y as usize)],
        }
    }

    /// Returns the resolution of this `Film`.
    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns a reference to the the pixels of this `Film`.
    pub fn pixels(&self) -> &[Spectrum<f32>] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u16, y: u16) -> Spectrum<f32> {
        self.pixels[(y as usize) * (self.res.x as usize) + (x as usize)]
    }

    /// Updates this `Film` with the pixel values in a [FilmTile].
    pub fn update_tile(&mut self, tile: &FilmTile) {
        let tile_min = tile.bb.p_min;
        let tile_max = tile.bb.p_max;

        if tile_max.x > self.res.x || tile_max.y > self.res.y {
            hikari_error!("Tile doesn't fit film ({:?} {:?})", self.res, tile.bb);
            return;
        }

        let tile_width = (tile_max.x - tile_min.x) as usize;

        // Copy pixels over to the film
        for (tile_row, film_row) in ((tile_min.y as usize)..(tile_max.y as usize)).enumerate() {
            let film_row_offset = film_row * (self.res.x as usize);

            let film_slice_start = film_row_offset + (tile_min.x as usize);
            let film_slice_end = film_row_offset + (tile_max.x as usize);

            let tile_slice_start = tile_row * tile_width;
            let tile_slice_end = (tile_row + 1) * tile_width;

            let film_slice = &mut self.pixels[film_slice_start..film_slice_end];
            let tile_slice = &tile.pixels[tile_slice_start..tile_slice_end];

            film_slice.copy_from_slice(tile_slice);
        }
    }
}

/// Splits a film of the given settings into full-width row bands, top to bottom.
pub fn film_tiles(settings: &FilmSettings) -> Vec<FilmTile> {
    let rows = settings.tile_rows.max(1);
    let res = settings.res;

    (0..res.y)
        .step_by(rows as usize)
        .enumerate()
        .map(|(index, y)| {
            // Limit tiles to film dimensions
            let max_y = y.saturating_add(rows).min(res.y);
            FilmTile::new(
                Bounds2::new(Vec2::new(0, y), Vec2::new(res.x, max_y)),
                index,
            )
        })
        .collect()
}
