mod formats;
mod process_media;

pub use formats::SupportedFormatsResponse;
pub use process_media::{ProcessMediaRequest, ProcessMediaResponse};
