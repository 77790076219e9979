use reqwest::{blocking::Client, header::ACCEPT};

use super::{HostIpError, HostIpOptions, PublicIpSource};

/// [`PublicIpSource`] that GETs a plain-text "what is my IP" endpoint.
pub struct HttpIpSource {
    client: Client,
    url: String,
}

impl HttpIpSource {
    pub fn new(options: &HostIpOptions) -> Result<Self, HostIpError> {
        let client = Client::builder()
            .timeout(options.timeout())
            .build()
            .map_err(|source| HostIpError::HttpClient { source })?;
        Ok(Self {
            client,
            url: options.lookup_url.clone(),
        })
    }
}

impl PublicIpSource for HttpIpSource {
    fn fetch(&self) -> Result<String, HostIpError> {
        debug_event!("fetching public IPs from {}", self.url);
        self.client
            .get(&self.url)
            .header(ACCEPT, "text/plain")
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| HostIpError::http(&self.url, source))
    }
}
