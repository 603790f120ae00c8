use std::{
    io::Write,
    path::Path,
    process::{Command, Stdio},
};

use speech_domain::{AudioFormat, EngineFailure, SpeechEngine, SpeechRequest, VoiceType};

const ENGINE: &str = "espeak-ng";

const FEMALE_KEYWORDS: &[&str] = &["female", "woman", "zira", "susan", "anna"];
const MALE_KEYWORDS: &[&str] = &["male", "man", "david", "mark", "james"];

/// One row of `espeak-ng --voices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspeakVoice {
    pub language: String,
    pub name: String,
    pub file: String,
}

impl EspeakVoice {
    fn name_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
    }
}

/// Columns: `Pty Language Age/Gender VoiceName File [Other Languages]`.
pub fn parse_voice_list(stdout: &str) -> Vec<EspeakVoice> {
    stdout
        .lines()
        .filter_map(|line| {
            let columns = line.split_whitespace().collect::<Vec<_>>();
            if columns.len() < 5 || columns[0] == "Pty" {
                return None;
            }
            Some(EspeakVoice {
                language: columns[1].to_string(),
                name: columns[3].to_string(),
                file: columns[4].to_string(),
            })
        })
        .collect()
}

/// First voice whose name carries a keyword for `voice_type`, else the first
/// voice. Keywords match whole name tokens.
pub fn select_voice(voices: &[EspeakVoice], voice_type: VoiceType) -> Option<&EspeakVoice> {
    let keywords = match voice_type {
        VoiceType::Female => FEMALE_KEYWORDS,
        VoiceType::Male => MALE_KEYWORDS,
    };
    voices
        .iter()
        .find(|voice| voice.name_tokens().any(|token| keywords.contains(&token.as_str())))
        .or_else(|| voices.first())
}

/// Offline WAV synthesis through the `espeak-ng` binary.
pub struct EspeakEngine {
    binary: String,
    rate_wpm: u32,
    amplitude: u32,
}

impl EspeakEngine {
    /// `volume` is a 0.0..=2.0 factor; espeak takes it as amplitude 0..=200.
    pub fn new(binary: impl Into<String>, rate_wpm: u32, volume: f32) -> Self {
        Self {
            binary: binary.into(),
            rate_wpm,
            amplitude: (volume.clamp(0.0, 2.0) * 100.0).round() as u32,
        }
    }

    fn process_failure(message: impl Into<String>) -> EngineFailure {
        EngineFailure::Process {
            engine: ENGINE,
            message: message.into(),
        }
    }

    fn list_voices(&self) -> Result<Vec<EspeakVoice>, EngineFailure> {
        let output = Command::new(&self.binary)
            .arg("--voices")
            .stdin(Stdio::null())
            .output()
            .map_err(|err| Self::process_failure(format!("cannot run `{}`: {err}", self.binary)))?;
        if !output.status.success() {
            return Err(Self::process_failure(format!(
                "voice listing exited with {:?}",
                output.status.code()
            )));
        }
        Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn render(&self, text: &str, voice: Option<&EspeakVoice>, wav: &Path) -> Result<(), EngineFailure> {
        let mut command = Command::new(&self.binary);
        if let Some(voice) = voice {
            command.arg("-v").arg(&voice.file);
        }
        command
            .arg("-s")
            .arg(self.rate_wpm.to_string())
            .arg("-a")
            .arg(self.amplitude.to_string())
            .arg("-w")
            .arg(wav)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut child = command
            .spawn()
            .map_err(|err| Self::process_failure(format!("cannot run `{}`: {err}", self.binary)))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|err| Self::process_failure(format!("cannot write text: {err}")))?;
        }
        let output = child
            .wait_with_output()
            .map_err(|err| Self::process_failure(err.to_string()))?;
        if !output.status.success() {
            return Err(Self::process_failure(format!(
                "exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

fn read_wav(path: &Path) -> Result<Vec<u8>, EngineFailure> {
    let invalid = |message: String| EngineFailure::InvalidOutput {
        engine: ENGINE,
        message,
    };
    let reader = hound::WavReader::open(path).map_err(|err| invalid(err.to_string()))?;
    if reader.duration() == 0 {
        return Err(invalid("no samples written".to_string()));
    }
    drop(reader);
    std::fs::read(path).map_err(|err| invalid(err.to_string()))
}

impl SpeechEngine for EspeakEngine {
    fn name(&self) -> &'static str {
        ENGINE
    }

    fn output_format(&self) -> AudioFormat {
        AudioFormat::Wav
    }

    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, EngineFailure> {
        let voices = self.list_voices()?;
        let voice = select_voice(&voices, request.voice_type);
        tracing::debug!(
            voice = voice.map(|v| v.name.as_str()).unwrap_or("default"),
            voice_type = %request.voice_type,
            "espeak voice selected"
        );

        let wav = tempfile::Builder::new()
            .prefix("speech-")
            .suffix(".wav")
            .tempfile()
            .map_err(|err| Self::process_failure(format!("cannot create temp file: {err}")))?;
        self.render(&request.text, voice, wav.path())?;
        read_wav(wav.path())
    }
}
