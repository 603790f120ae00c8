mod ffmpeg;
mod ffprobe;

pub use ffmpeg::{extract_audio_args, FfmpegTranscoder};
pub use ffprobe::{parse_probe_output, FfprobeProber};
