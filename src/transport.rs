use crate::proxy::ProxyConfig;
use std::time::Duration;

// Only the given proxy is used, proxies from the environment are ignored.
#[cfg(feature = "blocking")]
pub(crate) fn blocking_client(
    proxy: Option<&ProxyConfig>,
    timeout: Duration,
) -> reqwest::Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(timeout);
    if let Some(proxy) = proxy {
        for proxy in proxy.to_proxies()? {
            builder = builder.proxy(proxy);
        }
    }
    builder.build()
}

pub(crate) fn async_client(
    proxy: Option<&ProxyConfig>,
    timeout: Duration,
) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().no_proxy().timeout(timeout);
    if let Some(proxy) = proxy {
        for proxy in proxy.to_proxies()? {
            builder = builder.proxy(proxy);
        }
    }
    builder.build()
}
