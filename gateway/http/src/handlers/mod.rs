mod health;
mod jobs;
mod media_to_text;
mod text_to_audio;

pub use health::health;
pub use jobs::{download, job_status};
pub use media_to_text::media_to_text;
pub use text_to_audio::text_to_audio;
