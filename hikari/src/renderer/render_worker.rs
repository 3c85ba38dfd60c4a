use std::{
    collections::VecDeque,
    sync::{mpsc::Sender, Mutex, PoisonError},
    time::Instant,
};

use super::RenderContext;
use crate::{
    film::{Film, FilmTile},
    hikari_error, hikari_trace,
    integrators::IntegratorType,
    sampling::Sampler,
};

pub enum Message {
    TileDone {
        thread_id: usize,
        ray_count: usize,
        elapsed_s: f32,
    },
    Finished {
        thread_id: usize,
    },
}

/// Shared state the workers pull from and write into.
pub struct Payload<'a> {
    pub ctx: &'a RenderContext<'a>,
    pub tiles: &'a Mutex<VecDeque<FilmTile>>,
    pub film: &'a Mutex<Film>,
    pub integrator: IntegratorType,
    pub sampler: &'a dyn Sampler,
}

/// Renders tiles until the queue is empty.
pub fn launch(thread_id: usize, payload: &Payload, to_parent: &Sender<Message>) {
    hikari_trace!("Render thread {}: Begin", thread_id);

    let integrator = payload.integrator.instantiate();

    while let Some(mut tile) = pop_tile(payload) {
        hikari_trace!("Render thread {}: Render tile {:?}", thread_id, tile.bb);

        let tile_start = Instant::now();
        let ray_count = integrator.render(payload.ctx, payload.sampler, &mut tile);

        {
            hikari_trace!("Render thread {}: Waiting for lock on film", thread_id);
            let mut film = payload.film.lock().unwrap_or_else(PoisonError::into_inner);
            film.update_tile(&tile);
        }

        if let Err(why) = to_parent.send(Message::TileDone {
            thread_id,
            ray_count,
            elapsed_s: tile_start.elapsed().as_secs_f32(),
        }) {
            hikari_error!(
                "Render thread {}: Error notifying parent on tile done: {}",
                thread_id,
                why
            );
        };
    }

    hikari_trace!("Render thread {}: Signal done", thread_id);
    if let Err(why) = to_parent.send(Message::Finished { thread_id }) {
        hikari_error!(
            "Render thread {}: Error notifying parent on finish: {}",
            thread_id,
            why
        );
    };
}

fn pop_tile(payload: &Payload) -> Option<FilmTile> {
    let mut tiles = payload.tiles.lock().unwrap_or_else(PoisonError::into_inner);
    tiles.pop_front()
}
