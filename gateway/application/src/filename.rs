use rand::Rng;

pub const DEFAULT_AUDIO_EXTENSION: &str = ".mp3";
const RANDOM_STEM_LEN: usize = 10;

/// Ten random lowercase letters followed by `.mp3`.
pub fn random_audio_filename() -> String {
    let mut rng = rand::rng();
    let stem: String = (0..RANDOM_STEM_LEN)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect();
    format!("{stem}{DEFAULT_AUDIO_EXTENSION}")
}

pub fn resolve_audio_filename(requested: Option<&str>) -> String {
    match requested {
        Some(name) if !name.is_empty() => {
            if name.ends_with(DEFAULT_AUDIO_EXTENSION) {
                name.to_string()
            } else {
                format!("{name}{DEFAULT_AUDIO_EXTENSION}")
            }
        }
        _ => random_audio_filename(),
    }
}
