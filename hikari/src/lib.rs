pub mod macros;

pub mod camera;
pub mod film;
pub mod integrators;
pub mod materials;
pub mod math;
pub mod output;
pub mod renderer;
pub mod sampling;
pub mod scene;
pub mod settings;
pub mod textures;

// Used through the logging macros
pub use log;
