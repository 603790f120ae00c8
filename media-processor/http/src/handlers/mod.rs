mod health;
mod process_media;

pub use health::{health, supported_formats};
pub use process_media::process_media;
