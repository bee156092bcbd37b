use std::time::Duration;

use ureq::Agent;
use url::Url;

use crate::error::Error;

use super::AssetSource;

/// Fetches assets over HTTP(S), relative to a base URL.
pub struct HttpSource {
    agent: Agent,
    base: Url,
}

impl HttpSource {
    pub fn new(mut base: Url, proxy_url: Option<&str>) -> Self {
        let mut agent = Agent::config_builder().timeout_global(Some(Duration::from_secs(5)));
        let proxy = proxy_url.and_then(|proxy_url| match ureq::Proxy::new(proxy_url) {
            Ok(proxy) => Some(proxy),
            Err(err) => {
                log::warn!("ignoring proxy {proxy_url:?}: {err}");
                None
            }
        });
        agent = agent.proxy(proxy);
        // Without a trailing slash, joining would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            agent: agent.build().into(),
            base,
        }
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

impl AssetSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.url(path)?;
        log::debug!("requesting asset: {url}");
        let mut response = self.agent.get(url.as_str()).call()?;
        Ok(response.body_mut().read_to_vec()?)
    }
}
