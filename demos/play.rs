use proxy_tts::{tts::{SpeechConfig, client::TTSClient}, play::play};
use std::time::Instant;

fn main() {
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();
    let client = TTSClient::new(api_key);

    let start = Instant::now();
    let audio = client
        .convert("Hello, World! Xin chào!", &SpeechConfig::default())
        .unwrap();
    println!("{:?}", Instant::now() - start);

    println!("play audio...");
    play(audio.audio_bytes).unwrap();
    println!("play audio done.");
}
