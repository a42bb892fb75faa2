//! Composite / tone-map stage.

mod pipeline;
mod tone_map;

pub use pipeline::*;
pub use tone_map::*;
