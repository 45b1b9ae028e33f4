// CT Log Aggregator Client
//
// Handles the single HTTP query against crt.sh

use super::Result;
use super::parser;
use crate::error::DiscoveryError;
use crate::scanner::config::CtQueryConfig;
use tracing::{debug, info, warn};

/// crt.sh API client
pub struct CrtShClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CrtShClient {
    /// Create a new client from the query configuration
    pub fn new(config: &CtQueryConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Query URL for every certificate under `domain`
    ///
    /// `%25` is an encoded `%`, the crt.sh wildcard.
    pub fn query_url(&self, domain: &str) -> String {
        format!("{}/?q=%25.{}&output=json", self.endpoint, domain)
    }

    /// Fetch raw candidate names for `domain`
    ///
    /// Never fails: network errors, non-success statuses and malformed
    /// bodies are logged and yield an empty list.
    pub async fn fetch_candidates(&self, domain: &str) -> Vec<String> {
        match self.try_fetch(domain).await {
            Ok(names) => {
                info!("crt.sh returned {} names for {}", names.len(), domain);
                names
            }
            Err(e) => {
                warn!("CT log query for {} failed: {}", domain, e);
                Vec::new()
            }
        }
    }

    /// Fetch raw candidate names, surfacing the failure reason
    pub async fn try_fetch(&self, domain: &str) -> Result<Vec<String>> {
        let url = self.query_url(domain);
        debug!("Querying {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::HttpError {
                status: status.as_u16(),
                details: format!("Request failed with status: {}", status),
            });
        }

        let body = response.text().await?;
        parser::parse_response(&body)
    }
}
