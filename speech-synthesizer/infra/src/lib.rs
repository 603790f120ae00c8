mod espeak;
mod google;
mod store;

pub use espeak::{parse_voice_list, select_voice, EspeakEngine, EspeakVoice};
pub use google::{split_text, GoogleTranslateEngine, MAX_CHUNK_CHARS};
pub use store::{default_download_dir, LocalAudioStore};
