mod files;
mod generate_speech;
mod languages;

pub use files::{DownloadableAudio, FileListingResponse, ListedFile};
pub use generate_speech::{GenerateSpeechRequest, GenerateSpeechResponse};
pub use languages::SupportedLanguagesResponse;
