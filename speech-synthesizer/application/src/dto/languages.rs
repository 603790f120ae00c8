use std::collections::BTreeMap;

use serde::Serialize;
use speech_domain::{VoiceType, MAX_TEXT_CHARS};

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
];

#[derive(Debug, Clone, Serialize)]
pub struct SupportedLanguagesResponse {
    pub languages: BTreeMap<&'static str, &'static str>,
    pub voice_types: Vec<&'static str>,
    pub max_text_length: usize,
}

impl Default for SupportedLanguagesResponse {
    fn default() -> Self {
        Self {
            languages: LANGUAGES.iter().copied().collect(),
            voice_types: VoiceType::all().iter().map(|voice| voice.as_str()).collect(),
            max_text_length: MAX_TEXT_CHARS,
        }
    }
}
