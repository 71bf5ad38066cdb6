use proxy_tts::{
    config::Config,
    error::Result,
    probe::Prober,
    proxy::ProxyPool,
    tts::{SpeechConfig, SynthesizedAudio, client::TTSClient},
};
use tracing_subscriber::EnvFilter;

static TEXT: &str = "
    Gặp em trong những người bạn thân quen một ngày mùa đông
    Nhiều năm xa cách kể từ lúc ấy chẳng còn chờ mong
    Và thời gian đã nhuộm màu chính ta nên giờ mình khác xưa
    Đôi nếp nhăn đầu mùa

    Giờ thôi xao xuyến nhưng còn bâng khuâng như chuyện vừa qua
    Chuyện thời thương mến chỉ bằng đan tay hôn vội vài giây
    Và dù ta cũng có niềm chưa vui mất ngàn ngày để vơi
    Nhưng đã qua cả rồi khi vui hãy nhớ
";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // diagnostic pass, does not influence the proxy used below
    let prober = Prober::new(config.ip_echo_url.clone(), config.timeout);
    let reports = prober.diagnose(&config.proxy_list);
    for report in &reports {
        println!("{}", report);
    }
    let active = reports.iter().filter(|report| report.is_active()).count();
    tracing::info!("{}/{} proxies working", active, reports.len());

    let client = TTSClient::new(config.require_api_key()?)
        .with_api_base_url(config.api_base_url.clone())
        .with_timeout(config.timeout);

    let mut pool = ProxyPool::new(config.proxy_list.clone());
    let audio = client.synthesize_or_convert(TEXT, &SpeechConfig::default(), &mut pool)?;
    output(audio, &config)
}

#[cfg(feature = "playback")]
fn output(audio: SynthesizedAudio, _config: &Config) -> Result<()> {
    proxy_tts::play::play(audio.audio_bytes)
}

#[cfg(not(feature = "playback"))]
fn output(audio: SynthesizedAudio, config: &Config) -> Result<()> {
    std::fs::write(&config.output_path, &audio.audio_bytes)?;
    println!(
        "saved {} bytes of audio to {}",
        audio.audio_bytes.len(),
        config.output_path.display()
    );
    Ok(())
}
