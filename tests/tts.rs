#![cfg(feature = "blocking")]

use mockito::{Matcher, Server};
use proxy_tts::{
    error::{Error, ProxyError},
    proxy::{ProxyConfig, ProxyPool},
    tts::{SpeechConfig, client::TTSClient},
};
use rand::rngs::mock::StepRng;
use serde_json::json;
use std::{
    net::TcpListener,
    time::{Duration, Instant},
};

// the host never resolves, requests only arrive through the proxy
const API_BASE_URL: &str = "http://tts.test";

fn client(api_base_url: &str) -> TTSClient {
    TTSClient::new("test-key")
        .with_api_base_url(api_base_url)
        .with_timeout(Duration::from_secs(5))
}

fn proxy_entry(server: &Server) -> String {
    format!("{}:u:p", server.host_with_port())
}

#[test]
fn synthesize_through_random_proxy() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/text-to-speech/voice123")
        .match_header("xi-api-key", "test-key")
        .match_header("proxy-authorization", "Basic dTpw")
        .match_body(Matcher::Json(json!({ "text": "hello" })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(b"ID3audio")
        .create();

    let mut pool = ProxyPool::with_rng(
        [proxy_entry(&server), "bad-entry".to_owned()],
        StepRng::new(0, 0),
    );
    let audio = client(API_BASE_URL)
        .synthesize("hello", "voice123", &mut pool)
        .unwrap();
    assert_eq!(audio.audio_bytes, b"ID3audio");
    assert!(audio.audio_format.is_none());
    mock.assert();
}

#[test]
fn synthesize_bad_status() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(401)
        .with_body(r#"{"detail":"invalid api key"}"#)
        .create();

    let proxy = ProxyConfig::try_from(proxy_entry(&server).as_str()).unwrap();
    let result = client(API_BASE_URL).synthesize_proxy("hello", "voice123", &proxy);
    assert!(matches!(result, Err(Error::Status(401, _))));
}

#[test]
fn synthesize_proxy_timeout_is_transport_error() {
    // accepts connections through the backlog but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let entry = format!("{}:u:p", listener.local_addr().unwrap());
    let proxy = ProxyConfig::try_from(entry.as_str()).unwrap();

    let start = Instant::now();
    let result = client(API_BASE_URL)
        .with_timeout(Duration::from_secs(1))
        .synthesize_proxy("hello", "voice123", &proxy);
    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn synthesize_or_convert_sends_one_request_when_proxy_works() {
    let mut server = Server::new();
    let proxied = server
        .mock("POST", "/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb")
        .match_header("proxy-authorization", "Basic dTpw")
        .with_status(200)
        .with_body(b"proxied")
        .expect(1)
        .create();
    let direct = server
        .mock("POST", Matcher::Any)
        .match_header("proxy-authorization", Matcher::Missing)
        .with_status(200)
        .with_body(b"direct")
        .expect(0)
        .create();

    // the stub server is both the proxy and the api
    let mut pool = ProxyPool::new([proxy_entry(&server)]);
    let audio = client(&server.url())
        .synthesize_or_convert("hello", &SpeechConfig::default(), &mut pool)
        .unwrap();
    assert_eq!(audio.audio_bytes, b"proxied");
    proxied.assert();
    direct.assert();
}

#[test]
fn synthesize_or_convert_falls_back_after_proxy_failure() {
    let mut server = Server::new();
    let proxied = server
        .mock("POST", Matcher::Any)
        .match_header("proxy-authorization", "Basic dTpw")
        .with_status(502)
        .expect(1)
        .create();
    let direct = server
        .mock("POST", "/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb")
        .match_header("proxy-authorization", Matcher::Missing)
        .match_query(Matcher::UrlEncoded(
            "output_format".into(),
            "mp3_44100_128".into(),
        ))
        .with_status(200)
        .with_body(b"direct")
        .expect(1)
        .create();

    let mut pool = ProxyPool::new([proxy_entry(&server)]);
    let audio = client(&server.url())
        .synthesize_or_convert("hello", &SpeechConfig::default(), &mut pool)
        .unwrap();
    assert_eq!(audio.audio_bytes, b"direct");
    proxied.assert();
    direct.assert();
}

#[test]
fn synthesize_or_convert_without_proxy_calls_api_once() {
    let mut server = Server::new();
    let direct = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .with_body(b"direct")
        .expect(1)
        .create();

    let mut pool = ProxyPool::new(["bad-entry"]);
    let audio = client(&server.url())
        .synthesize_or_convert("hello", &SpeechConfig::default(), &mut pool)
        .unwrap();
    assert_eq!(audio.audio_bytes, b"direct");
    direct.assert();
}

#[test]
fn synthesize_empty_pool_sends_nothing() {
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let mut pool = ProxyPool::new(Vec::<String>::new());
    let result = client(&server.url()).synthesize("hello", "voice123", &mut pool);
    assert!(matches!(result, Err(Error::Proxy(ProxyError::EmptyPool))));
    mock.assert();
}

#[test]
fn synthesize_malformed_pick_sends_nothing() {
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let mut pool = ProxyPool::new(["bad-entry"]);
    let result = client(&server.url()).synthesize("hello", "voice123", &mut pool);
    assert!(matches!(
        result,
        Err(Error::Proxy(ProxyError::Malformed(ref raw))) if raw == "bad-entry"
    ));
    mock.assert();
}

#[test]
fn convert_with_speech_config() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/text-to-speech/JBFqnCBsd6RMkjVDRZzb")
        .match_query(Matcher::UrlEncoded(
            "output_format".into(),
            "mp3_44100_128".into(),
        ))
        .match_header("xi-api-key", "test-key")
        .match_body(Matcher::Json(
            json!({ "text": "hello", "model_id": "eleven_flash_v2_5" }),
        ))
        .with_status(200)
        .with_body(b"mp3")
        .create();

    let audio = client(&server.url())
        .convert("hello", &SpeechConfig::default())
        .unwrap();
    assert_eq!(audio.audio_bytes, b"mp3");
    assert_eq!(audio.audio_format.as_deref(), Some("mp3_44100_128"));
    mock.assert();
}

#[tokio::test]
async fn synthesize_async_through_proxy() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/text-to-speech/voice123")
        .match_header("xi-api-key", "test-key")
        .with_status(200)
        .with_body(b"audio")
        .create_async()
        .await;

    let mut pool = ProxyPool::new([proxy_entry(&server)]);
    let audio = client(API_BASE_URL)
        .synthesize_async("hello", "voice123", &mut pool)
        .await
        .unwrap();
    assert_eq!(audio.audio_bytes, b"audio");
    mock.assert_async().await;
}

#[tokio::test]
async fn synthesize_or_convert_async_empty_pool_calls_api_once() {
    let mut server = Server::new_async().await;
    let direct = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .with_body(b"direct")
        .expect(1)
        .create_async()
        .await;

    let mut pool = ProxyPool::new(Vec::<String>::new());
    let audio = client(&server.url())
        .synthesize_or_convert_async("hello", &SpeechConfig::from("voice123"), &mut pool)
        .await
        .unwrap();
    assert_eq!(audio.audio_bytes, b"direct");
    direct.assert_async().await;
}

#[tokio::test]
async fn convert_async_bad_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(422)
        .create_async()
        .await;

    let result = client(&server.url())
        .convert_async("hello", &SpeechConfig::from("voice123"))
        .await;
    assert!(matches!(result, Err(Error::Status(422, _))));
}
