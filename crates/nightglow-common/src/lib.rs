pub mod actions;
pub mod errors;
pub mod types;

pub use actions::{Action, Trigger};
pub use errors::{ConfigError, NightglowError, PlatformError};
pub use types::Rgb;

pub type Result<T> = std::result::Result<T, NightglowError>;
