use proxy_tts::{
    constants::{DEFAULT_VOICE_ID, PROXY_LIST},
    proxy::ProxyPool,
    tts::client::TTSClient,
};
use std::time::Instant;

fn main() {
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();
    let client = TTSClient::new(api_key);
    let mut pool = ProxyPool::new(PROXY_LIST);

    for _ in 0..3 {
        let start = Instant::now();
        match client.synthesize("Hello, World! Xin chào!", DEFAULT_VOICE_ID, &mut pool) {
            Ok(audio) => println!("{} bytes", audio.audio_bytes.len()),
            Err(err) => println!("{}", err),
        }
        println!("{:?}", Instant::now() - start);
    }
}
