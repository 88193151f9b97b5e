use crate::error::{Error, Result};
use reqwest::Client;
use std::future::Future;

/// Something the keep-alive loop can ping. Only success or failure matters.
pub trait PingTarget {
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;

    fn describe(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct HttpPingTarget {
    client: Client,
    url: String,
}

impl HttpPingTarget {
    pub fn new(url: &str) -> Self {
        HttpPingTarget {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

impl PingTarget for HttpPingTarget {
    async fn ping(&self) -> Result<()> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused(self.url.clone())
            } else {
                Error::Http(e)
            }
        })?;
        // body is ignored, only the status matters
        response.error_for_status()?;
        Ok(())
    }

    fn describe(&self) -> &str {
        &self.url
    }
}
