//! TTS Client module

use {
    super::{SpeechConfig, SynthesizedAudio, TextToSpeechBody, build_url},
    crate::{
        constants,
        error::{Error, Result},
        proxy::{ProxyConfig, ProxyPool},
        transport,
    },
    rand::Rng,
    std::time::Duration,
};

/// Text to speech client.
///
/// Sync functions need the `blocking` feature, async functions end with `_async`.
#[derive(Clone)]
pub struct TTSClient {
    api_key: String,
    api_base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for TTSClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TTSClient")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TTSClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: constants::API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(constants::REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Synthesize `text` with `voice_id` through a proxy picked at random from `pool`.
    ///
    /// When no proxy can be picked (empty pool, malformed entry) no request is sent.
    #[cfg(feature = "blocking")]
    pub fn synthesize<R: Rng>(
        &self,
        text: &str,
        voice_id: &str,
        pool: &mut ProxyPool<R>,
    ) -> Result<SynthesizedAudio> {
        let proxy = pick_proxy(pool)?;
        self.synthesize_proxy(text, voice_id, &proxy)
    }

    /// Synthesize `text` with `voice_id` through the given proxy.
    #[cfg(feature = "blocking")]
    pub fn synthesize_proxy(
        &self,
        text: &str,
        voice_id: &str,
        proxy: &ProxyConfig,
    ) -> Result<SynthesizedAudio> {
        let result = self.send(text, &SpeechConfig::from(voice_id), Some(proxy));
        log_outcome(&result);
        result
    }

    /// Synthesize `text` with a full [SpeechConfig], without proxy.
    #[cfg(feature = "blocking")]
    pub fn convert(&self, text: &str, config: &SpeechConfig) -> Result<SynthesizedAudio> {
        let result = self.send(text, config, None);
        log_outcome(&result);
        result
    }

    /// Synthesize `text` with a full [SpeechConfig] through a proxy picked at random from
    /// `pool`, and call the api directly only when that attempt fails.
    ///
    /// The direct call is only sent after the proxied one failed.
    #[cfg(feature = "blocking")]
    pub fn synthesize_or_convert<R: Rng>(
        &self,
        text: &str,
        config: &SpeechConfig,
        pool: &mut ProxyPool<R>,
    ) -> Result<SynthesizedAudio> {
        let proxied = pick_proxy(pool).and_then(|proxy| {
            let result = self.send(text, config, Some(&proxy));
            log_outcome(&result);
            result
        });
        match proxied {
            Ok(audio) => Ok(audio),
            Err(err) => {
                tracing::warn!("proxied synthesis failed, calling api directly: {}", err);
                self.convert(text, config)
            }
        }
    }

    /// Same as [TTSClient::synthesize], asynchronously.
    pub async fn synthesize_async<R: Rng>(
        &self,
        text: &str,
        voice_id: &str,
        pool: &mut ProxyPool<R>,
    ) -> Result<SynthesizedAudio> {
        let proxy = pick_proxy(pool)?;
        self.synthesize_proxy_async(text, voice_id, &proxy).await
    }

    /// Same as [TTSClient::synthesize_proxy], asynchronously.
    pub async fn synthesize_proxy_async(
        &self,
        text: &str,
        voice_id: &str,
        proxy: &ProxyConfig,
    ) -> Result<SynthesizedAudio> {
        let result = self
            .send_async(text, &SpeechConfig::from(voice_id), Some(proxy))
            .await;
        log_outcome(&result);
        result
    }

    /// Same as [TTSClient::convert], asynchronously.
    pub async fn convert_async(
        &self,
        text: &str,
        config: &SpeechConfig,
    ) -> Result<SynthesizedAudio> {
        let result = self.send_async(text, config, None).await;
        log_outcome(&result);
        result
    }

    /// Same as [TTSClient::synthesize_or_convert], asynchronously.
    pub async fn synthesize_or_convert_async<R: Rng>(
        &self,
        text: &str,
        config: &SpeechConfig,
        pool: &mut ProxyPool<R>,
    ) -> Result<SynthesizedAudio> {
        let proxied = match pick_proxy(pool) {
            Ok(proxy) => {
                let result = self.send_async(text, config, Some(&proxy)).await;
                log_outcome(&result);
                result
            }
            Err(err) => Err(err),
        };
        match proxied {
            Ok(audio) => Ok(audio),
            Err(err) => {
                tracing::warn!("proxied synthesis failed, calling api directly: {}", err);
                self.convert_async(text, config).await
            }
        }
    }

    #[cfg(feature = "blocking")]
    fn send(
        &self,
        text: &str,
        config: &SpeechConfig,
        proxy: Option<&ProxyConfig>,
    ) -> Result<SynthesizedAudio> {
        let response = transport::blocking_client(proxy, self.timeout)?
            .post(build_url(&self.api_base_url, config))
            .header(constants::API_KEY_HEADER, &self.api_key)
            .json(&TextToSpeechBody::new(text, config))
            .send()?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::status(response.status()));
        }
        Ok(SynthesizedAudio {
            audio_format: config.output_format.clone(),
            audio_bytes: response.bytes()?.to_vec(),
        })
    }

    async fn send_async(
        &self,
        text: &str,
        config: &SpeechConfig,
        proxy: Option<&ProxyConfig>,
    ) -> Result<SynthesizedAudio> {
        let response = transport::async_client(proxy, self.timeout)?
            .post(build_url(&self.api_base_url, config))
            .header(constants::API_KEY_HEADER, &self.api_key)
            .json(&TextToSpeechBody::new(text, config))
            .send()
            .await?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::status(response.status()));
        }
        Ok(SynthesizedAudio {
            audio_format: config.output_format.clone(),
            audio_bytes: response.bytes().await?.to_vec(),
        })
    }
}

fn pick_proxy<R: Rng>(pool: &mut ProxyPool<R>) -> Result<ProxyConfig> {
    pool.pick_random().map_err(|err| {
        tracing::warn!("No valid proxy found: {}", err);
        Error::from(err)
    })
}

fn log_outcome(result: &Result<SynthesizedAudio>) {
    match result {
        Ok(audio) => tracing::info!("API call successful! {} bytes", audio.audio_bytes.len()),
        Err(Error::Status(code, _)) => {
            tracing::warn!("API call failed with status code: {}", code)
        }
        Err(err) => tracing::warn!("API call error: {}", err),
    }
}
