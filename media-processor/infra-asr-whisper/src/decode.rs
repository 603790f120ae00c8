use std::{path::Path, process::Stdio};

use media_domain::DomainError;
use tokio::process::Command;

pub const WHISPER_SAMPLE_RATE_HZ: u32 = 16_000;

pub fn pcm16le_bytes_to_f32(samples: &[u8]) -> Vec<f32> {
    samples
        .chunks_exact(2)
        .map(|chunk| {
            let value = i16::from_le_bytes([chunk[0], chunk[1]]);
            f32::from(value) / f32::from(i16::MAX)
        })
        .collect()
}

/// Mono 16 kHz samples for any container ffmpeg can read.
#[cfg_attr(not(feature = "whisper-runtime"), allow(dead_code))]
pub(crate) async fn decode_to_pcm(ffmpeg: &str, audio: &Path) -> Result<Vec<f32>, DomainError> {
    let sample_rate = WHISPER_SAMPLE_RATE_HZ.to_string();
    let output = Command::new(ffmpeg)
        .args(["-nostdin", "-threads", "0", "-i"])
        .arg(audio)
        .args([
            "-f",
            "s16le",
            "-ac",
            "1",
            "-acodec",
            "pcm_s16le",
            "-ar",
            sample_rate.as_str(),
            "-",
        ])
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|err| DomainError::Transcription(format!("failed to start ffmpeg: {err}")))?;

    if !output.status.success() {
        return Err(DomainError::Transcription(format!(
            "failed to decode audio: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let samples = pcm16le_bytes_to_f32(&output.stdout);
    if samples.is_empty() {
        return Err(DomainError::Transcription(
            "no audio samples decoded".to_string(),
        ));
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_little_endian_pcm() {
        let bytes = [0x00, 0x00, 0xff, 0x7f, 0x01, 0x80, 0x10];
        let samples = pcm16le_bytes_to_f32(&bytes);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 1.0);
        assert_eq!(samples[2], -1.0);
    }

    #[tokio::test]
    async fn missing_ffmpeg_is_a_transcription_error() {
        let err = decode_to_pcm("definitely-not-ffmpeg", Path::new("/nonexistent.wav"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Transcription(_)));
    }
}
