//! Proxy connectivity check
//!
//! Use [Prober::probe] to check one proxy against an IP echo endpoint.
//! Use [Prober::probe_async] to check one proxy asynchronously.
//! Use [Prober::diagnose] to check every entry of a proxy list one after another.

use crate::{
    constants,
    error::{Error, Result},
    proxy::{ProxyConfig, ProxyCredential, redact},
    transport,
};
use std::time::{Duration, Instant};

/// Body returned by the echo endpoint, e.g. `{"ip":"38.154.227.167"}`
#[derive(Debug, serde::Deserialize)]
struct EchoedIp {
    ip: String,
}

/// A successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable {
    /// Exit address reported by the echo endpoint, `None` if the body had no `ip` field.
    pub ip: Option<String>,
    pub latency: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyStatus {
    Active,
    Error,
}

impl std::fmt::Display for ProxyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProxyStatus::Active => write!(f, "active"),
            ProxyStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of checking one proxy list entry.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// `host:port` of the entry, credentials are never kept
    pub proxy: String,
    pub status: ProxyStatus,
    pub ip: Option<String>,
    pub latency: Option<Duration>,
    pub error: Option<String>,
    pub checked_at: chrono::DateTime<chrono::Local>,
}

impl ProbeReport {
    fn new(proxy: String, outcome: Result<Reachable>) -> Self {
        let checked_at = chrono::Local::now();
        match outcome {
            Ok(reachable) => Self {
                proxy,
                status: ProxyStatus::Active,
                ip: reachable.ip,
                latency: Some(reachable.latency),
                error: None,
                checked_at,
            },
            Err(err) => Self {
                proxy,
                status: ProxyStatus::Error,
                ip: None,
                latency: None,
                error: Some(err.to_string()),
                checked_at,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProxyStatus::Active
    }
}

impl std::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] checked {}",
            self.proxy,
            self.status,
            self.checked_at.to_rfc2822()
        )?;
        if let Some(ref ip) = self.ip {
            write!(f, " - exit ip {}", ip)?;
        }
        if let Some(latency) = self.latency {
            write!(f, " in {:?}", latency)?;
        }
        if let Some(ref error) = self.error {
            write!(f, " - {}", error)?;
        }
        Ok(())
    }
}

/// Checks proxies against an IP echo endpoint.
#[derive(Debug, Clone)]
pub struct Prober {
    echo_url: String,
    timeout: Duration,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new(
            constants::IP_ECHO_URL,
            Duration::from_secs(constants::REQUEST_TIMEOUT_SECS),
        )
    }
}

impl Prober {
    pub fn new(echo_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            echo_url: echo_url.into(),
            timeout,
        }
    }

    pub fn echo_url(&self) -> &str {
        &self.echo_url
    }

    /// GET the echo endpoint through `proxy`.
    ///
    /// Only HTTP 200 is a success. Any other status is [Error::Status],
    /// connection errors, timeouts and tls failures are [Error::Transport].
    #[cfg(feature = "blocking")]
    pub fn probe(&self, proxy: &ProxyConfig) -> Result<Reachable> {
        let result = self.send_probe(proxy);
        log_outcome(&result);
        result
    }

    /// `true` iff [Prober::probe] succeeds.
    #[cfg(feature = "blocking")]
    pub fn is_reachable(&self, proxy: &ProxyConfig) -> bool {
        self.probe(proxy).is_ok()
    }

    /// Probe every entry one after another.
    ///
    /// Malformed entries are reported without any request.
    #[cfg(feature = "blocking")]
    pub fn diagnose<S: AsRef<str>>(&self, entries: &[S]) -> Vec<ProbeReport> {
        entries
            .iter()
            .map(|raw| match ProxyCredential::parse(raw.as_ref()) {
                Ok(credential) => ProbeReport::new(
                    display_name(&credential),
                    self.probe(&ProxyConfig::from(&credential)),
                ),
                Err(err) => ProbeReport::new(redact(raw.as_ref()), Err(err.into())),
            })
            .collect()
    }

    /// Same as [Prober::probe], asynchronously.
    pub async fn probe_async(&self, proxy: &ProxyConfig) -> Result<Reachable> {
        let result = self.send_probe_async(proxy).await;
        log_outcome(&result);
        result
    }

    /// Same as [Prober::diagnose], asynchronously. Entries are still probed one at a time.
    pub async fn diagnose_async<S: AsRef<str>>(&self, entries: &[S]) -> Vec<ProbeReport> {
        let mut reports = Vec::with_capacity(entries.len());
        for raw in entries {
            let report = match ProxyCredential::parse(raw.as_ref()) {
                Ok(credential) => ProbeReport::new(
                    display_name(&credential),
                    self.probe_async(&ProxyConfig::from(&credential)).await,
                ),
                Err(err) => ProbeReport::new(redact(raw.as_ref()), Err(err.into())),
            };
            reports.push(report);
        }
        reports
    }

    #[cfg(feature = "blocking")]
    fn send_probe(&self, proxy: &ProxyConfig) -> Result<Reachable> {
        let client = transport::blocking_client(Some(proxy), self.timeout)?;
        let start = Instant::now();
        let response = client.get(&self.echo_url).send()?;
        let latency = start.elapsed();
        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::status(response.status()));
        }
        Ok(Reachable {
            ip: echoed_ip(&response.bytes()?),
            latency,
        })
    }

    async fn send_probe_async(&self, proxy: &ProxyConfig) -> Result<Reachable> {
        let client = transport::async_client(Some(proxy), self.timeout)?;
        let start = Instant::now();
        let response = client.get(&self.echo_url).send().await?;
        let latency = start.elapsed();
        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::status(response.status()));
        }
        Ok(Reachable {
            ip: echoed_ip(&response.bytes().await?),
            latency,
        })
    }
}

fn echoed_ip(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<EchoedIp>(body)
        .map(|echoed| echoed.ip)
        .ok()
}

// credentials stay out of reports and logs
fn display_name(credential: &ProxyCredential) -> String {
    format!("{}:{}", credential.host, credential.port)
}

fn log_outcome(result: &Result<Reachable>) {
    match result {
        Ok(Reachable { ip: Some(ip), .. }) => tracing::info!("Proxy working: {}", ip),
        Ok(Reachable { ip: None, .. }) => tracing::info!("Proxy working"),
        Err(Error::Status(code, _)) => {
            tracing::warn!("Proxy failed with status code: {}", code)
        }
        Err(err) => tracing::warn!("Proxy error: {}", err),
    }
}
