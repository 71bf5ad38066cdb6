//! Client, SpeechConfig, Response Type.
pub mod client;

use crate::constants;

/// Synthesis Config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechConfig {
    pub voice_id: String,
    /// e.g. `eleven_flash_v2_5`, vendor default when `None`
    pub model_id: Option<String>,
    /// `codec_samplerate_bitrate`, vendor default when `None`.
    ///
    /// For example:
    /// + mp3_22050_32
    /// + mp3_44100_64
    /// + mp3_44100_128
    /// + mp3_44100_192
    /// + pcm_16000
    /// + pcm_44100
    /// + ulaw_8000
    pub output_format: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice_id: constants::DEFAULT_VOICE_ID.to_owned(),
            model_id: Some(constants::DEFAULT_MODEL_ID.to_owned()),
            output_format: Some(constants::DEFAULT_OUTPUT_FORMAT.to_owned()),
        }
    }
}

impl From<&str> for SpeechConfig {
    fn from(voice_id: &str) -> Self {
        Self {
            voice_id: voice_id.to_owned(),
            model_id: None,
            output_format: None,
        }
    }
}

/// Synthesized Audio
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// requested output format, `None` when the vendor default was used
    pub audio_format: Option<String>,
    pub audio_bytes: Vec<u8>,
}

#[derive(Debug, serde::Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<&'a str>,
}

impl<'a> TextToSpeechBody<'a> {
    fn new(text: &'a str, config: &'a SpeechConfig) -> Self {
        Self {
            text,
            model_id: config.model_id.as_deref(),
        }
    }
}

fn build_url(api_base_url: &str, config: &SpeechConfig) -> String {
    let url = format!(
        "{}/v1/text-to-speech/{}",
        api_base_url.trim_end_matches('/'),
        config.voice_id
    );
    match config.output_format {
        Some(ref output_format) => format!("{}?output_format={}", url, output_format),
        None => url,
    }
}
