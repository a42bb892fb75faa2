//! Iterative separable Gaussian blur of the bright-pass attachment.
//!
//! [`BlurSchedule`] decides which texture every pass reads and writes;
//! [`BlurPipeline`] records the passes.

mod pipeline;
mod schedule;
mod types;

pub use pipeline::*;
pub use schedule::*;
pub use types::*;
