mod frame;
mod helpers;
mod state;

pub use frame::FrameInput;
pub use state::RenderState;
