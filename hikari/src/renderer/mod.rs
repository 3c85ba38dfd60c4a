mod render_worker;

use serde::{Deserialize, Serialize};
use std::{
    collections::VecDeque,
    sync::{mpsc::channel, Mutex, PoisonError},
    time::Instant,
};

use crate::{
    camera::CameraRays,
    film::{film_tiles, Film, FilmSettings},
    hikari_debug, hikari_info, hikari_trace,
    integrators::IntegratorType,
    sampling::UniformSampler,
    scene::Scene,
    textures::Environment,
};

/// Everything a render reads. Shared between the worker threads.
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub camera: &'a dyn CameraRays,
    pub environment: &'a dyn Environment,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Worker thread count, 0 for one per logical core
    pub thread_count: usize,
    /// Seed for the sampler. Each tile draws from its own stream of it.
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            thread_count: 0,
            seed: 0x5EED,
        }
    }
}

impl RenderSettings {
    fn resolved_thread_count(&self) -> usize {
        if self.thread_count == 0 {
            num_cpus::get().max(1)
        } else {
            self.thread_count
        }
    }
}

/// Result of a finished render
pub struct RenderResult {
    pub film: Film,
    pub ray_count: usize,
    pub elapsed_s: f32,
}

/// Renders `ctx` into a new [Film] using worker threads that pull tiles from a shared queue.
pub fn render(
    ctx: &RenderContext,
    integrator: IntegratorType,
    film_settings: &FilmSettings,
    settings: &RenderSettings,
) -> Result<RenderResult, String> {
    let render_start = Instant::now();

    let film = Mutex::new(Film::new(film_settings.res));
    let tiles: VecDeque<_> = film_tiles(film_settings).into();
    let tiles_total = tiles.len();
    let tiles = Mutex::new(tiles);
    let sampler = UniformSampler::new(settings.seed);
    let thread_count = settings.resolved_thread_count().min(tiles_total.max(1));

    hikari_info!(
        "Rendering {}x{} with {} in {} tiles on {} threads",
        film_settings.res.x,
        film_settings.res.y,
        integrator,
        tiles_total,
        thread_count
    );

    let payload = render_worker::Payload {
        ctx,
        tiles: &tiles,
        film: &film,
        integrator,
        sampler: &sampler,
    };

    let ray_count = std::thread::scope(|s| -> Result<usize, String> {
        let (to_manager, from_workers) = channel();

        for thread_id in 0..thread_count {
            let to_manager = to_manager.clone();
            let payload = &payload;
            std::thread::Builder::new()
                .name(format!("RenderWorker{}", thread_id))
                .spawn_scoped(s, move || render_worker::launch(thread_id, payload, &to_manager))
                .map_err(|why| format!("Failed to spawn render worker: {}", why))?;
        }
        // Workers hold the remaining senders so the loop below ends when they all have quit
        drop(to_manager);

        let mut ray_count = 0;
        let mut tiles_done = 0;
        let mut last_reported_decile = 0;
        for msg in from_workers.iter() {
            match msg {
                render_worker::Message::TileDone {
                    thread_id,
                    ray_count: rays,
                    elapsed_s,
                } => {
                    ray_count += rays;
                    tiles_done += 1;
                    hikari_trace!(
                        "Render manager: Worker {} finished a tile in {:.3}s",
                        thread_id,
                        elapsed_s
                    );

                    let decile = tiles_done * 10 / tiles_total.max(1);
                    if decile > last_reported_decile {
                        last_reported_decile = decile;
                        hikari_info!("{}% ({}/{} tiles)", decile * 10, tiles_done, tiles_total);
                    }
                }
                render_worker::Message::Finished { thread_id } => {
                    hikari_debug!("Render manager: Worker {} finished", thread_id);
                }
            }
        }

        Ok(ray_count)
    })?;

    let elapsed_s = render_start.elapsed().as_secs_f32();
    hikari_info!(
        "Render took {:.2}s, {:.2} Mrays/s",
        elapsed_s,
        (ray_count as f32) / elapsed_s.max(1e-6) * 1e-6
    );

    Ok(RenderResult {
        film: film.into_inner().unwrap_or_else(PoisonError::into_inner),
        ray_count,
        elapsed_s,
    })
}
