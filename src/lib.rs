//! Rotate through authenticated HTTP proxies, check that they answer, and synthesize
//! speech with the **ElevenLabs** text to speech API through them.
//!
//! # Features
//! + `blocking`: sync functions. Default
//! + `playback`: play synthesized audio with rodio on the default output device
//!
//! # How to use
//! 1. Build a [ProxyPool](proxy::ProxyPool) from `ip:port:username:password` entries.
//!    The pool picks one entry at random per call. Its random source can be injected with
//!    [ProxyPool::with_rng](proxy::ProxyPool::with_rng).
//!
//! 2. Check the proxies with a [Prober](probe::Prober).
//!     ```rust,no_run
//!     use proxy_tts::{constants::PROXY_LIST, probe::Prober};
//!
//!     fn main() {
//!         for report in Prober::default().diagnose(&PROXY_LIST) {
//!             println!("{}", report);
//!         }
//!     }
//!     ```
//!
//! 3. Synthesize text to speech through a random proxy with a
//!    [TTSClient](tts::client::TTSClient). [synthesize](tts::client::TTSClient::synthesize)
//!    returns [SynthesizedAudio](tts::SynthesizedAudio).
//!    Use [convert](tts::client::TTSClient::convert) to pass a full
//!    [SpeechConfig](tts::SpeechConfig) (model and output format) without proxy.
//!    [synthesize_or_convert](tts::client::TTSClient::synthesize_or_convert) tries the proxy
//!    first and only calls the api directly when that fails.
//!     ```rust,no_run
//!     use proxy_tts::{constants::PROXY_LIST, proxy::ProxyPool, tts::client::TTSClient};
//!
//!     fn main() {
//!         let mut pool = ProxyPool::new(PROXY_LIST);
//!         let client = TTSClient::new("your-api-key");
//!         let audio = client
//!             .synthesize("Hello, World!", "JBFqnCBsd6RMkjVDRZzb", &mut pool)
//!             .unwrap();
//!         println!("{} bytes", audio.audio_bytes.len());
//!     }
//!     ```
//!
//! Every request builds its own client, nothing is retried and failures come back as
//! [Error](error::Error) values: [Proxy](error::Error::Proxy) for a bad pick,
//! [Status](error::Error::Status) for a non-200 answer and [Transport](error::Error::Transport)
//! for connection errors, timeouts and tls failures.

mod transport;

pub mod config;
pub mod constants;
pub mod error;
#[cfg(feature = "playback")]
pub mod play;
pub mod probe;
pub mod proxy;
pub mod tts;
