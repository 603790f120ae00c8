mod files;
mod health;
mod speech;

pub use files::{download, files};
pub use health::{health, supported_languages};
pub use speech::generate_speech;
