use proxy_tts::{
    constants::{DEFAULT_VOICE_ID, PROXY_LIST},
    probe::Prober,
    proxy::ProxyPool,
    tts::client::TTSClient,
};

#[tokio::main]
async fn main() {
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();

    println!("diagnose...");
    for report in Prober::default().diagnose_async(&PROXY_LIST).await {
        println!("{}", report);
    }

    println!("synthesizing...");
    let client = TTSClient::new(api_key);
    let mut pool = ProxyPool::new(PROXY_LIST);
    let audio = client
        .synthesize_async("Hello, World! Xin chào!", DEFAULT_VOICE_ID, &mut pool)
        .await
        .unwrap();
    println!("{} bytes", audio.audio_bytes.len());
}
