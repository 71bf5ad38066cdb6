//! Audio playback on the default output device. Needs the `playback` feature.

use crate::error::{Error, Result};

/// Decode `audio_bytes` and block until playback ends.
pub fn play(audio_bytes: Vec<u8>) -> Result<()> {
    let stream = rodio::OutputStreamBuilder::open_default_stream()
        .map_err(|err| Error::Playback(err.to_string()))?;
    let sink = rodio::play(stream.mixer(), std::io::Cursor::new(audio_bytes))
        .map_err(|err| Error::Playback(err.to_string()))?;
    tracing::debug!("playing audio...");
    sink.sleep_until_end();
    tracing::debug!("play audio done.");
    Ok(())
}
